//! Parse error types for text patterns.

use thiserror::Error;

/// An error that occurred while parsing a text pattern.
///
/// Offsets are byte offsets into the pattern source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `[` without a matching `]`.
    #[error("unclosed '[' at offset {offset}")]
    Unclosed { offset: usize },

    /// A `[]` with nothing inside.
    #[error("empty placeholder at offset {offset}")]
    Empty { offset: usize },

    /// A `]` that does not close a placeholder.
    #[error("unmatched ']' at offset {offset}")]
    UnmatchedClose { offset: usize },
}

impl ParseError {
    /// Byte offset of the error in the pattern source.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Unclosed { offset }
            | ParseError::Empty { offset }
            | ParseError::UnmatchedClose { offset } => *offset,
        }
    }
}
