use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use super::number::parse_decimal;
use super::{NumberFormat, Value, ValueKind};

/// Parser signature for a type tag: text to value, `None` on failure.
pub type ParseFn = Arc<dyn Fn(&str) -> Option<Value> + Send + Sync>;

/// Stringifier signature for a type tag.
pub type StringifyFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// A registered value type: its kind, the name used in cast syntax
/// (`(number)health`), and the functions converting it to and from text.
///
/// A tag carries two parsers. [`TypeTag::parse`] is the inverse of
/// [`TypeTag::stringify`] and drives casts. [`TypeTag::parse_literal`] reads
/// the literal syntax accepted in configuration strings and drives primitive
/// resolution; it defaults to `parse`. The built-in `string` tag is the one
/// place they differ: literals must be quoted (`'hello'`), cast input is not.
#[derive(Clone)]
pub struct TypeTag {
    kind: ValueKind,
    cast_name: String,
    parse: ParseFn,
    parse_literal: ParseFn,
    stringify: StringifyFn,
}

impl TypeTag {
    /// Create a tag whose literal syntax equals its cast parser.
    pub fn new(
        kind: ValueKind,
        cast_name: impl Into<String>,
        parse: impl Fn(&str) -> Option<Value> + Send + Sync + 'static,
        stringify: impl Fn(&Value) -> String + Send + Sync + 'static,
    ) -> Self {
        let parse: ParseFn = Arc::new(parse);
        Self {
            kind,
            cast_name: cast_name.into(),
            parse_literal: Arc::clone(&parse),
            parse,
            stringify: Arc::new(stringify),
        }
    }

    /// Replace the literal parser.
    pub fn with_literal_parser(
        mut self,
        parse_literal: impl Fn(&str) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_literal = Arc::new(parse_literal);
        self
    }

    /// The built-in `number` tag.
    ///
    /// Literals use plain decimal syntax (`3.5`, `-2`, `1e3`); cast input and
    /// output follow `format`.
    pub fn number(format: NumberFormat) -> Self {
        let parse_format = format.clone();
        TypeTag::new(
            ValueKind::Number,
            "number",
            move |text| parse_format.parse(text).map(Value::Number),
            move |value| match value {
                Value::Number(n) => format.format(*n),
                other => other.to_string(),
            },
        )
        .with_literal_parser(|text| parse_decimal(text.trim()).map(Value::Number))
    }

    /// The built-in `string` tag.
    pub fn string() -> Self {
        TypeTag::new(
            ValueKind::Text,
            "string",
            |text| Some(Value::Text(text.to_string())),
            |value| value.to_string(),
        )
        .with_literal_parser(|text| {
            if text.len() > 1 && text.starts_with('\'') && text.ends_with('\'') {
                Some(Value::Text(text[1..text.len() - 1].to_string()))
            } else {
                None
            }
        })
    }

    /// The built-in `boolean` tag.
    pub fn boolean() -> Self {
        TypeTag::new(
            ValueKind::Boolean,
            "boolean",
            |text| match text {
                "true" => Some(Value::Boolean(true)),
                "false" => Some(Value::Boolean(false)),
                _ => None,
            },
            |value| value.to_string(),
        )
    }

    /// The kind of value this tag produces.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The name used in cast syntax.
    pub fn cast_name(&self) -> &str {
        &self.cast_name
    }

    /// Parse text produced by [`TypeTag::stringify`].
    pub fn parse(&self, text: &str) -> Option<Value> {
        (self.parse)(text)
    }

    /// Parse a literal written in a configuration string.
    pub fn parse_literal(&self, text: &str) -> Option<Value> {
        (self.parse_literal)(text)
    }

    /// Render a value as text.
    pub fn stringify(&self, value: &Value) -> String {
        (self.stringify)(value)
    }
}

impl Debug for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeTag")
            .field("kind", &self.kind)
            .field("cast_name", &self.cast_name)
            .finish_non_exhaustive()
    }
}
