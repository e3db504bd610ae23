//! Placeholder expression parser using winnow.
//!
//! Grammar:
//! - `expression := [ "(" cast ")" ] name [ ":" arguments ]`
//! - `cast`: letters, digits, `_`, `.`
//! - `name`: letters, digits, `_`, `.`, `(`, `)`
//! - `arguments`: comma-separated atoms, surrounding whitespace trimmed
//!
//! The cast-prefixed form is tried first. When it does not match the whole
//! input, the unprefixed form is tried, so `(x)` is a plain name.

use super::ast::Expression;
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

/// Parse a placeholder expression.
///
/// Returns `None` if the input does not match the grammar; callers resolve
/// such input as a primitive literal.
pub fn parse_expression(input: &str) -> Option<Expression> {
    let mut remaining = input;
    alt((cast_form, bare_form)).parse_next(&mut remaining).ok()
}

/// Split an argument clause on commas, trimming each argument.
///
/// An empty or blank clause yields no arguments.
pub fn split_arguments(clause: &str) -> Vec<String> {
    if clause.trim().is_empty() {
        return Vec::new();
    }
    clause.split(',').map(|a| a.trim().to_string()).collect()
}

/// Parse `(cast)name[:arguments]` to the end of input.
fn cast_form(input: &mut &str) -> ModalResult<Expression> {
    let cast = cast(input)?;
    let mut expression = bare_form(input)?;
    expression.cast = Some(cast.to_string());
    Ok(expression)
}

/// Parse `name[:arguments]` to the end of input.
fn bare_form(input: &mut &str) -> ModalResult<Expression> {
    let name = name(input)?;
    let arguments = opt(preceded(':', argument_clause)).parse_next(input)?;
    if !input.is_empty() {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    Ok(Expression {
        cast: None,
        name: name.to_string(),
        arguments: arguments.map(split_arguments).unwrap_or_default(),
    })
}

/// Parse a cast prefix: `(identifier)`.
fn cast<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('(', take_while(1.., is_cast_char), ')').parse_next(input)
}

/// Parse a placeholder name.
fn name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_name_char).parse_next(input)
}

/// Parse the raw argument clause after `:` (possibly empty).
fn argument_clause<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., is_argument_char).parse_next(input)
}

fn is_cast_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn is_name_char(c: char) -> bool {
    is_cast_char(c) || c == '(' || c == ')'
}

fn is_argument_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ',' | '+' | '-' | '\'' | ' ' | '\t')
}
