//! Expression and text pattern parsers.
//!
//! This module turns configuration strings into an AST. Expressions that do
//! not fit the grammar are not errors: the resolver treats them as primitive
//! literals, so [`parse_expression`] returns `None` instead.

pub mod ast;
pub mod error;
mod expression;
mod pattern;

pub use ast::*;
pub use error::ParseError;
pub use expression::{parse_expression, split_arguments};
pub use pattern::parse_pattern;
