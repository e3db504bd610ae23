//! Type registry for storing and looking up value type tags.

use std::collections::HashMap;

use crate::interpreter::RegistrationError;
use crate::types::{NumberFormat, TypeTag, Value, ValueKind};

/// An ordered registry of value type tags.
///
/// Tags are indexed by kind and by cast name. Registration order is part of
/// the contract: literal parsing and name lookup across kinds both take the
/// first matching tag in the order tags were registered.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    /// Tags in registration order.
    tags: Vec<TypeTag>,
    /// Maps kind to index in `tags`.
    by_kind: HashMap<ValueKind, usize>,
    /// Maps cast name to index in `tags`.
    by_cast_name: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tags in their documented order:
    /// `number`, `string`, `boolean`.
    pub fn builtin(number_format: NumberFormat) -> Self {
        let mut registry = Self::new();
        for tag in [
            TypeTag::number(number_format),
            TypeTag::string(),
            TypeTag::boolean(),
        ] {
            registry.push(tag);
        }
        registry
    }

    /// Register a tag, returning its position.
    ///
    /// Returns an error if its cast name or kind is already taken.
    pub fn register(&mut self, tag: TypeTag) -> Result<usize, RegistrationError> {
        if self.by_cast_name.contains_key(tag.cast_name()) {
            return Err(RegistrationError::DuplicateCastName {
                cast_name: tag.cast_name().to_string(),
            });
        }
        if self.by_kind.contains_key(&tag.kind()) {
            return Err(RegistrationError::DuplicateKind { kind: tag.kind() });
        }
        Ok(self.push(tag))
    }

    fn push(&mut self, tag: TypeTag) -> usize {
        let index = self.tags.len();
        self.by_kind.insert(tag.kind(), index);
        self.by_cast_name.insert(tag.cast_name().to_string(), index);
        self.tags.push(tag);
        index
    }

    /// Get a tag by its cast name.
    pub fn by_cast_name(&self, name: &str) -> Option<&TypeTag> {
        self.by_cast_name.get(name).map(|&i| &self.tags[i])
    }

    /// Get a tag by the kind it produces.
    pub fn by_kind(&self, kind: ValueKind) -> Option<&TypeTag> {
        self.position(kind).map(|i| &self.tags[i])
    }

    /// Registration index of the tag for `kind`.
    pub fn position(&self, kind: ValueKind) -> Option<usize> {
        self.by_kind.get(&kind).copied()
    }

    /// All tags in registration order.
    pub fn tags(&self) -> &[TypeTag] {
        &self.tags
    }

    /// Cast names in registration order.
    pub fn cast_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(TypeTag::cast_name)
    }

    /// Parse a literal with the first tag that accepts it.
    pub fn parse_literal(&self, text: &str) -> Option<Value> {
        self.tags.iter().find_map(|tag| tag.parse_literal(text))
    }

    /// Render a value with the tag for its kind.
    ///
    /// Falls back to the value's `Display` output if its kind is not
    /// registered.
    pub fn stringify(&self, value: &Value) -> String {
        match self.by_kind(value.kind()) {
            Some(tag) => tag.stringify(value),
            None => value.to_string(),
        }
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tags are registered.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
