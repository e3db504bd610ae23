//! Placeholder builders and the per-kind tables that hold them.

use std::collections::HashMap;

use crate::interpreter::{Placeholder, ResolveError};

/// A named factory turning expression arguments into a [`Placeholder`].
///
/// Builders are held by the engine for its whole lifetime; the instances they
/// produce are owned by whoever resolved the expression.
pub trait PlaceholderBuilder<C>: Send + Sync {
    /// Minimum number of arguments `build` needs.
    fn required_args(&self) -> usize {
        0
    }

    /// Build an instance for `name` from its arguments.
    ///
    /// Called only with at least [`PlaceholderBuilder::required_args`]
    /// arguments. Extra arguments may be used or ignored.
    fn build(&self, name: &str, args: &[String]) -> Result<Placeholder<C>, ResolveError>;
}

type BuildFn<C> = dyn Fn(&str, &[String]) -> Result<Placeholder<C>, ResolveError> + Send + Sync;

/// A [`PlaceholderBuilder`] backed by a closure.
///
/// # Example
///
/// ```
/// use plex::{FnBuilder, Placeholder, PlaceholderBuilder, ResolveError};
///
/// struct Mob {
///     health: f64,
/// }
///
/// let round = FnBuilder::new(1, |name, args| {
///     let digits: i32 = args[0].parse().map_err(|_| ResolveError::InvalidArgument {
///         name: name.to_string(),
///         argument: args[0].clone(),
///         reason: "expected a digit count".to_string(),
///     })?;
///     let scale = 10f64.powi(digits);
///     Ok(Placeholder::from_fn(move |mob: &Mob| (mob.health * scale).round() / scale))
/// });
/// assert_eq!(round.required_args(), 1);
/// ```
pub struct FnBuilder<C> {
    required_args: usize,
    build: Box<BuildFn<C>>,
}

impl<C> FnBuilder<C> {
    /// Create a builder requiring at least `required_args` arguments.
    pub fn new(
        required_args: usize,
        build: impl Fn(&str, &[String]) -> Result<Placeholder<C>, ResolveError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            required_args,
            build: Box::new(build),
        }
    }
}

impl<C> PlaceholderBuilder<C> for FnBuilder<C> {
    fn required_args(&self) -> usize {
        self.required_args
    }

    fn build(&self, name: &str, args: &[String]) -> Result<Placeholder<C>, ResolveError> {
        (self.build)(name, args)
    }
}

/// Name to builder mapping for one value kind.
pub struct PlaceholderTable<C> {
    builders: HashMap<String, Box<dyn PlaceholderBuilder<C>>>,
}

impl<C> PlaceholderTable<C> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Insert a builder, replacing any existing entry with the same name.
    ///
    /// Returns `true` if an entry was replaced.
    pub fn insert(&mut self, name: String, builder: Box<dyn PlaceholderBuilder<C>>) -> bool {
        self.builders.insert(name, builder).is_some()
    }

    /// Get a builder by name.
    pub fn get(&self, name: &str) -> Option<&dyn PlaceholderBuilder<C>> {
        self.builders.get(name).map(|builder| &**builder)
    }

    /// Check if a builder exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Number of registered builders.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl<C> Default for PlaceholderTable<C> {
    fn default() -> Self {
        Self::new()
    }
}
