//! Typed placeholder expressions.
//!
//! Configuration strings such as `health`, `(string)name` or `round:2` are
//! resolved once into [`Placeholder`] instances that are evaluated many times
//! against a caller-defined context.

pub mod condition;
pub mod config;
pub mod global;
pub mod interpreter;
pub mod parser;
pub mod supplier;
pub mod types;

pub use condition::{Comparison, Condition, ConditionError, ConditionSpec, Gate};
pub use config::EngineConfig;
pub use global::{GlobalEngine, InstallError};
pub use interpreter::{
    Engine, EngineBuilder, EvalError, FnBuilder, PatternError, Placeholder, PlaceholderBuilder,
    RegistrationError, ResolveError, TextPattern, TypeRegistry, compute_suggestions,
};
pub use supplier::NumericSupplier;
pub use types::{NumberFormat, TypeTag, Typed, Value, ValueKind};
