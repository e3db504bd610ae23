//! Placeholder interpreter.
//!
//! This module holds the registries, the engine lifecycle and the resolver
//! that turns expression strings into evaluable [`Placeholder`] instances.

mod builder;
mod engine;
mod error;
mod pattern;
mod placeholder;
mod registry;
mod resolver;

pub use builder::{FnBuilder, PlaceholderBuilder, PlaceholderTable};
pub use engine::{Engine, EngineBuilder};
pub use error::{
    EvalError, PatternError, RegistrationError, ResolveError, compute_suggestions,
};
pub use pattern::TextPattern;
pub use placeholder::Placeholder;
pub use registry::TypeRegistry;
