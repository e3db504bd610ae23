//! Expression resolution: grammar match, lookup, argument validation and
//! casting.
//!
//! Resolution order for an expression string:
//! 1. No grammar match: resolve the whole input as a primitive literal.
//! 2. Cast prefix present: it must name a registered type.
//! 3. Search placeholder tables in type registration order; first match wins.
//! 4. No placeholder found: resolve the name as a primitive literal. Any cast
//!    prefix and arguments are dropped on this path.
//! 5. Validate the argument count, then build the instance.
//! 6. Wrap the instance in a stringify/reparse cast if one was requested.

use tracing::trace;

use crate::interpreter::error::compute_suggestions;
use crate::interpreter::registry::TypeRegistry;
use crate::interpreter::{Engine, Placeholder, ResolveError};
use crate::parser::parse_expression;

/// Resolve an expression string against a sealed engine.
pub(crate) fn resolve<C: 'static>(
    engine: &Engine<C>,
    input: &str,
) -> Result<Placeholder<C>, ResolveError> {
    let Some(expression) = parse_expression(input) else {
        trace!(input, "no expression match, resolving as literal");
        return resolve_primitive(engine.types(), input);
    };

    let cast = match &expression.cast {
        Some(name) => Some(engine.types().by_cast_name(name).ok_or_else(|| {
            ResolveError::UnknownCastType {
                name: name.clone(),
                suggestions: compute_suggestions(name, engine.types().cast_names()),
            }
        })?),
        None => None,
    };

    let Some((owner, builder)) = engine.find(&expression.name) else {
        trace!(input, name = %expression.name, "no placeholder found, resolving as literal");
        return resolve_primitive(engine.types(), &expression.name);
    };

    let found = expression.arguments.len();
    let required = builder.required_args();
    if found < required {
        return Err(ResolveError::InsufficientArguments {
            name: expression.name,
            found,
            required,
        });
    }

    let base = builder.build(&expression.name, &expression.arguments)?;
    if base.kind() != owner.kind() {
        return Err(ResolveError::KindMismatch {
            name: expression.name,
            expected: owner.kind(),
            found: base.kind(),
        });
    }

    trace!(input, kind = %owner.kind(), cast = ?expression.cast, "resolved placeholder");
    Ok(match cast {
        Some(target) => base.cast(owner, target),
        None => base,
    })
}

/// Resolve literal text with the first type that can parse it.
pub(crate) fn resolve_primitive<C: 'static>(
    types: &TypeRegistry,
    literal: &str,
) -> Result<Placeholder<C>, ResolveError> {
    types
        .parse_literal(literal)
        .map(Placeholder::constant)
        .ok_or_else(|| ResolveError::UnparsableLiteral {
            text: literal.to_string(),
        })
}
