use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The kind of a [`Value`], one per registered type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    Text,
    Boolean,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => write!(f, "number"),
            ValueKind::Text => write!(f, "text"),
            ValueKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// A runtime value produced by evaluating a placeholder.
///
/// # Example
///
/// ```
/// use plex::{Value, ValueKind};
///
/// let health: Value = 20.0.into();
/// assert_eq!(health.kind(), ValueKind::Number);
///
/// let name: Value = "Steve".into();
/// assert_eq!(name.as_text(), Some("Steve"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A floating-point number.
    Number(f64),

    /// A text value.
    Text(String),

    /// A boolean value.
    Boolean(bool),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Rust types that map onto exactly one [`ValueKind`].
///
/// Used by [`crate::Placeholder::from_fn`] and
/// [`crate::EngineBuilder::add_fn`] to derive the declared kind of a
/// placeholder from the return type of its supplier.
pub trait Typed: Into<Value> {
    const KIND: ValueKind;
}

impl Typed for f64 {
    const KIND: ValueKind = ValueKind::Number;
}

impl Typed for String {
    const KIND: ValueKind = ValueKind::Text;
}

impl Typed for bool {
    const KIND: ValueKind = ValueKind::Boolean;
}

// From implementations for common types

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}
