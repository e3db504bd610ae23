//! Process-wide engine storage.
//!
//! Provides a write-once slot for a sealed [`Engine`], removing the need to
//! pass `&Engine` through every configuration loader.

use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

use crate::interpreter::{Engine, EngineBuilder};

/// Errors from installing or reading a [`GlobalEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    /// An engine was already installed.
    #[error("a placeholder engine is already installed")]
    AlreadyInstalled,

    /// No engine has been installed yet.
    #[error("no placeholder engine has been installed")]
    NotInstalled,
}

/// A process-wide slot holding one sealed engine.
///
/// Declare it as a `static`, populate an [`EngineBuilder`] during startup and
/// install it once. Every later read is lock-free.
///
/// # Example
///
/// ```
/// use plex::{EngineBuilder, GlobalEngine, Value};
///
/// struct Mob {
///     health: f64,
/// }
///
/// static ENGINE: GlobalEngine<Mob> = GlobalEngine::new();
///
/// let mut builder = EngineBuilder::new();
/// builder.add_fn("health", |mob: &Mob| mob.health).unwrap();
/// ENGINE.install(builder).unwrap();
///
/// let health = ENGINE.engine().unwrap().parse("health").unwrap();
/// assert_eq!(health.evaluate(&Mob { health: 3.0 }), Ok(Value::Number(3.0)));
/// ```
pub struct GlobalEngine<C> {
    cell: OnceLock<Engine<C>>,
}

impl<C> GlobalEngine<C> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Seal `builder` and install the resulting engine.
    ///
    /// Fails if an engine is already installed; the builder is discarded.
    pub fn install(&self, builder: EngineBuilder<C>) -> Result<&Engine<C>, InstallError>
    where
        C: 'static,
    {
        self.cell
            .set(builder.seal())
            .map_err(|_| InstallError::AlreadyInstalled)?;
        debug!("installed global placeholder engine");
        self.engine()
    }

    /// The installed engine.
    pub fn engine(&self) -> Result<&Engine<C>, InstallError> {
        self.cell.get().ok_or(InstallError::NotInstalled)
    }

    /// Whether an engine has been installed.
    pub fn is_installed(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<C> Default for GlobalEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}
