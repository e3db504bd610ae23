//! Miette diagnostic wrapper for expression and pattern errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use plex::parser::ParseError;
use plex::{ConditionError, PatternError, ResolveError};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into an expression or pattern.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(plex::expression))]
pub struct ExpressionDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl ExpressionDiagnostic {
    /// Create a diagnostic for an expression that failed to resolve.
    ///
    /// `origin` names where the expression came from, e.g. `texts.title`.
    pub fn from_resolve_error(origin: &str, expression: &str, err: &ResolveError) -> Self {
        Self::at(origin, expression, 0, expression, err)
    }

    /// Create a diagnostic for a pattern that failed to compile.
    pub fn from_pattern_error(origin: &str, pattern: &str, err: &PatternError) -> Self {
        match err {
            PatternError::Parse(parse) => {
                let help = match parse {
                    ParseError::Unclosed { .. } => Some("close it with ']' or escape it as '[['"),
                    ParseError::UnmatchedClose { .. } => Some("escape a literal ']' as ']]'"),
                    ParseError::Empty { .. } => None,
                };
                Self::new(
                    origin,
                    pattern,
                    (parse.offset(), 1),
                    err.to_string(),
                    help.map(String::from),
                )
            }
            PatternError::Resolve { expression, source } => {
                let start = pattern.find(expression.as_str()).unwrap_or(0);
                Self::at(origin, pattern, start, expression, source)
                    .with_message(err.to_string())
            }
        }
    }

    /// Create a diagnostic for a condition entry that failed to compile.
    pub fn from_condition_error(origin: &str, err: &ConditionError) -> Self {
        match err {
            ConditionError::Resolve { expression, source } => {
                Self::from_resolve_error(origin, expression, source).with_message(err.to_string())
            }
            _ => Self::new(origin, "", (0, 0), err.to_string(), None),
        }
    }

    /// Point at `expression`, found at byte `start` of `content`.
    fn at(origin: &str, content: &str, start: usize, expression: &str, err: &ResolveError) -> Self {
        let whole = (start, expression.len());
        let (span, help) = match err {
            // Underline the cast name inside the parentheses.
            ResolveError::UnknownCastType { name, .. } => ((start + 1, name.len()), None),
            ResolveError::UnparsableLiteral { .. } => (
                whole,
                Some("no placeholder has this name; quote text literals, e.g. 'hello'".to_string()),
            ),
            ResolveError::InsufficientArguments { .. } => (
                whole,
                Some("arguments follow the name after ':', separated by commas".to_string()),
            ),
            _ => (whole, None),
        };
        Self::new(origin, content, span, err.to_string(), help)
    }

    fn new(
        origin: &str,
        content: &str,
        (offset, len): (usize, usize),
        message: String,
        help: Option<String>,
    ) -> Self {
        // Clamp the span to the content to avoid miette panics.
        let offset = offset.min(content.len());
        let len = len.min(content.len() - offset);
        ExpressionDiagnostic {
            src: NamedSource::new(origin, content.to_string()),
            span: (offset, len).into(),
            message,
            help,
        }
    }

    fn with_message(mut self, message: String) -> Self {
        self.message = message;
        self
    }
}
