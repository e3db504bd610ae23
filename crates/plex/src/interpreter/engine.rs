//! Engine lifecycle: a mutable registration phase and a sealed, read-only
//! resolution phase.

use tracing::debug;

use crate::config::EngineConfig;
use crate::interpreter::builder::{FnBuilder, PlaceholderBuilder, PlaceholderTable};
use crate::interpreter::pattern::TextPattern;
use crate::interpreter::registry::TypeRegistry;
use crate::interpreter::resolver;
use crate::interpreter::{PatternError, Placeholder, RegistrationError, ResolveError};
use crate::types::{NumberFormat, TypeTag, Typed, Value, ValueKind};

/// Registration phase of an [`Engine`].
///
/// All mutation happens here, typically single-threaded during startup.
/// [`EngineBuilder::seal`] consumes the builder and returns the read-only
/// engine, so nothing can be registered once resolution begins.
///
/// # Example
///
/// ```
/// use plex::{EngineBuilder, Value};
///
/// struct Mob {
///     health: f64,
/// }
///
/// let mut builder = EngineBuilder::new();
/// builder.add_fn("health", |mob: &Mob| mob.health).unwrap();
/// let engine = builder.seal();
///
/// let health = engine.parse("(string)health").unwrap();
/// assert_eq!(health.evaluate(&Mob { health: 20.0 }), Ok(Value::Text("20".into())));
/// ```
pub struct EngineBuilder<C> {
    types: TypeRegistry,
    /// One table per registered tag, in the same order as `types`.
    tables: Vec<PlaceholderTable<C>>,
}

impl<C: 'static> EngineBuilder<C> {
    /// Create a builder with the built-in `number`, `string` and `boolean`
    /// tags using the default number format.
    pub fn new() -> Self {
        Self::from_types(TypeRegistry::builtin(NumberFormat::default()))
    }

    /// Create a builder with the built-in tags configured by `config`.
    ///
    /// Fails if the number format cannot parse its own output.
    pub fn with_config(config: &EngineConfig) -> Result<Self, RegistrationError> {
        config.number.validate()?;
        Ok(Self::from_types(TypeRegistry::builtin(config.number.clone())))
    }

    fn from_types(types: TypeRegistry) -> Self {
        let tables = types.tags().iter().map(|_| PlaceholderTable::new()).collect();
        Self { types, tables }
    }

    /// Create a builder with no type tags at all.
    pub fn empty() -> Self {
        Self {
            types: TypeRegistry::new(),
            tables: Vec::new(),
        }
    }

    /// Register an additional type tag. It is searched after every tag
    /// registered before it.
    pub fn register_type(&mut self, tag: TypeTag) -> Result<&mut Self, RegistrationError> {
        let cast_name = tag.cast_name().to_string();
        let kind = tag.kind();
        self.types.register(tag)?;
        self.tables.push(PlaceholderTable::new());
        debug!(%cast_name, %kind, "registered value type");
        Ok(self)
    }

    /// Register a zero-argument placeholder backed by a plain supplier.
    ///
    /// The owning kind follows from the supplier's return type.
    pub fn add_fn<T: Typed>(
        &mut self,
        name: impl Into<String>,
        f: impl Fn(&C) -> T + Send + Sync + 'static,
    ) -> Result<&mut Self, RegistrationError> {
        let placeholder = Placeholder::from_fn(f);
        self.add_builder(
            T::KIND,
            name,
            FnBuilder::new(0, move |_, _| Ok(placeholder.clone())),
        )
    }

    /// Register a builder under `kind`.
    ///
    /// Names are scoped per kind. Registering an existing `(kind, name)` pair
    /// replaces the earlier builder.
    pub fn add_builder(
        &mut self,
        kind: ValueKind,
        name: impl Into<String>,
        builder: impl PlaceholderBuilder<C> + 'static,
    ) -> Result<&mut Self, RegistrationError> {
        let name = name.into();
        let Some(index) = self.types.position(kind) else {
            return Err(RegistrationError::UnknownKind { kind, name });
        };
        if self.tables[index].insert(name.clone(), Box::new(builder)) {
            debug!(%name, %kind, "replaced placeholder");
        } else {
            debug!(%name, %kind, "registered placeholder");
        }
        Ok(self)
    }

    /// The types registered so far.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Finish registration.
    pub fn seal(self) -> Engine<C> {
        debug!(
            types = self.types.len(),
            placeholders = self.tables.iter().map(PlaceholderTable::len).sum::<usize>(),
            "sealed placeholder engine"
        );
        Engine {
            types: self.types,
            tables: self.tables,
        }
    }
}

impl<C: 'static> Default for EngineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sealed, read-only placeholder engine.
///
/// Resolution and evaluation only read the registries, so an engine can be
/// shared between threads. Resolve each configuration string once and keep
/// the returned [`Placeholder`]; the engine does no caching of its own.
pub struct Engine<C> {
    types: TypeRegistry,
    tables: Vec<PlaceholderTable<C>>,
}

impl<C: 'static> Engine<C> {
    /// Resolve an expression string into a placeholder.
    ///
    /// Input that does not match the expression grammar, or whose name is not
    /// registered, is resolved as a primitive literal.
    pub fn parse(&self, expression: &str) -> Result<Placeholder<C>, ResolveError> {
        resolver::resolve(self, expression)
    }

    /// Resolve text as a primitive literal, skipping placeholder lookup.
    pub fn parse_primitive(&self, literal: &str) -> Result<Placeholder<C>, ResolveError> {
        resolver::resolve_primitive(&self.types, literal)
    }

    /// Compile a text pattern with embedded `[expression]` placeholders.
    pub fn compile_pattern(&self, pattern: &str) -> Result<TextPattern<C>, PatternError> {
        TextPattern::compile(self, pattern)
    }
}

impl<C> Engine<C> {
    /// The registered types.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Render a value with the tag for its kind.
    pub fn stringify(&self, value: &Value) -> String {
        self.types.stringify(value)
    }

    /// Check if a placeholder `name` is registered under `kind`.
    pub fn contains(&self, kind: ValueKind, name: &str) -> bool {
        self.types
            .position(kind)
            .is_some_and(|index| self.tables[index].contains(name))
    }

    /// Find the first builder named `name`, searching kinds in registration
    /// order, together with the tag that owns it.
    pub(crate) fn find(&self, name: &str) -> Option<(&TypeTag, &dyn PlaceholderBuilder<C>)> {
        self.types
            .tags()
            .iter()
            .zip(&self.tables)
            .find_map(|(tag, table)| table.get(name).map(|builder| (tag, builder)))
    }
}
