//! Public AST types for placeholder expressions and text patterns.
//!
//! These types are public to enable external tooling (linters, editors, etc.).

/// A parsed placeholder expression: `[(cast)]name[:arg,arg...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Cast name without parentheses (e.g., "string" in `(string)health`).
    pub cast: Option<String>,
    /// Placeholder name to look up.
    pub name: String,
    /// Trimmed, comma-separated arguments after `:`.
    pub arguments: Vec<String>,
}

/// A parsed text pattern containing segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub segments: Vec<Segment>,
}

/// A segment within a text pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text (no placeholder).
    Literal(String),
    /// The expression inside `[...]`, trimmed.
    Placeholder(String),
}
