//! Text pattern parser using winnow.
//!
//! Parses display text with embedded placeholders. Handles:
//! - Literal text segments
//! - Placeholders: `[expression]`
//! - Escape sequences: `[[` -> `[`, `]]` -> `]`

use super::ast::{Pattern, Segment};
use super::error::ParseError;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

/// Parse a text pattern into segments.
pub fn parse_pattern(input: &str) -> Result<Pattern, ParseError> {
    let mut remaining = input;
    // `repeat(0.., _)` stops at the first segment it cannot parse and never
    // fails on its own, so errors are classified from what is left over.
    let segments: Vec<Segment> = repeat(0.., segment)
        .parse_next(&mut remaining)
        .unwrap_or_default();
    if remaining.is_empty() {
        return Ok(Pattern {
            segments: merge_literals(segments),
        });
    }

    let offset = input.len() - remaining.len();
    let blank = remaining
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .is_some_and(|(inside, _)| inside.trim().is_empty());
    Err(if blank {
        ParseError::Empty { offset }
    } else if remaining.starts_with('[') {
        ParseError::Unclosed { offset }
    } else {
        ParseError::UnmatchedClose { offset }
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (escape, placeholder, or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_char)).parse_next(input)
}

/// Parse escape sequences: `[[` -> `[`, `]]` -> `]`
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "[[".value(Segment::Literal("[".to_string())),
        "]]".value(Segment::Literal("]".to_string())),
    ))
    .parse_next(input)
}

/// Parse a placeholder: `[expression]`, which must not be blank.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('[', take_while(1.., |c: char| c != '[' && c != ']'), ']')
        .verify(|content: &str| !content.trim().is_empty())
        .map(|content: &str| Segment::Placeholder(content.trim().to_string()))
        .parse_next(input)
}

/// Parse a single literal character (not `[` or `]`).
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['[', ']'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
