//! Error types for registration, resolution and evaluation.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;
use crate::types::ValueKind;

/// Errors raised while populating an engine during startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A type tag with the same cast name is already registered.
    #[error("a type with cast name '{cast_name}' is already registered")]
    DuplicateCastName { cast_name: String },

    /// A type tag of the same kind is already registered.
    #[error("a type of kind {kind} is already registered")]
    DuplicateKind { kind: ValueKind },

    /// A placeholder was added for a kind with no registered type tag.
    #[error("cannot add placeholder '{name}': no type of kind {kind} is registered")]
    UnknownKind { kind: ValueKind, name: String },

    /// The number format could not round-trip its own output.
    #[error("invalid number format: {reason}")]
    InvalidNumberFormat { reason: String },
}

/// An error that occurred while resolving an expression string.
///
/// These indicate configuration mistakes and are meant to surface when the
/// configuration is loaded, not when values are displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The cast prefix names a type that is not registered.
    #[error("unknown cast type '{name}'{}", format_suggestions(suggestions))]
    UnknownCastType {
        name: String,
        suggestions: Vec<String>,
    },

    /// Fewer arguments were supplied than the placeholder requires.
    #[error("placeholder '{name}' requires at least {required} arguments, found {found}")]
    InsufficientArguments {
        name: String,
        found: usize,
        required: usize,
    },

    /// No registered type can parse the literal.
    #[error("unable to parse literal '{text}'")]
    UnparsableLiteral { text: String },

    /// A builder rejected one of its arguments.
    #[error("invalid argument '{argument}' for placeholder '{name}': {reason}")]
    InvalidArgument {
        name: String,
        argument: String,
        reason: String,
    },

    /// A placeholder produced a different kind than required.
    #[error("placeholder '{name}' is a {found}, expected a {expected}")]
    KindMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

/// An error that occurred while evaluating a placeholder against a context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The stringified value could not be reparsed as the cast target.
    #[error("cannot cast '{text}' to {target}")]
    CastFailed { text: String, target: ValueKind },

    /// The context has no data for the placeholder.
    #[error("value for '{name}' is unavailable")]
    Unavailable { name: String },
}

/// An error that occurred while compiling a text pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// One of the embedded expressions failed to resolve.
    #[error("in placeholder '[{expression}]': {source}")]
    Resolve {
        expression: String,
        #[source]
        source: ResolveError,
    },
}

/// Compute typo suggestions for a name among available names.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - Limit to 3 suggestions, sorted by distance
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{s}'")).collect();
    format!(", did you mean {}?", quoted.join(" or "))
}
