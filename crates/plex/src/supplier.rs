//! Numeric value suppliers.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::interpreter::{Placeholder, ResolveError};
use crate::types::{Value, ValueKind};

type SupplyFn<C> = dyn Fn(&C) -> Option<f64> + Send + Sync;

/// A function from a context to a number, where `None` means the value is
/// invalid or unavailable (distinct from zero).
///
/// # Example
///
/// ```
/// use plex::NumericSupplier;
///
/// let ratio = NumericSupplier::from_fn(|pair: &(f64, f64)| Some(pair.0 / pair.1));
/// assert_eq!(ratio.value(&(1.0, 4.0)), Some(0.25));
/// assert_eq!(NumericSupplier::<()>::zero().value(&()), Some(0.0));
/// assert_eq!(NumericSupplier::<()>::invalid().value(&()), None);
/// ```
pub struct NumericSupplier<C> {
    supply: Arc<SupplyFn<C>>,
}

impl<C: 'static> NumericSupplier<C> {
    /// Create a supplier from a function.
    pub fn from_fn(f: impl Fn(&C) -> Option<f64> + Send + Sync + 'static) -> Self {
        Self {
            supply: Arc::new(f),
        }
    }

    /// A supplier that always yields zero.
    pub fn zero() -> Self {
        Self::from_fn(|_| Some(0.0))
    }

    /// A supplier that is always invalid.
    pub fn invalid() -> Self {
        Self::from_fn(|_| None)
    }

    /// Adapt a number placeholder. Evaluation failures become `None`.
    ///
    /// Fails if the placeholder does not produce numbers.
    pub fn from_placeholder(
        name: &str,
        placeholder: Placeholder<C>,
    ) -> Result<Self, ResolveError> {
        if placeholder.kind() != ValueKind::Number {
            return Err(ResolveError::KindMismatch {
                name: name.to_string(),
                expected: ValueKind::Number,
                found: placeholder.kind(),
            });
        }
        Ok(Self::from_fn(move |ctx| match placeholder.evaluate(ctx) {
            Ok(Value::Number(n)) => Some(n),
            _ => None,
        }))
    }
}

impl<C> NumericSupplier<C> {
    /// The supplied value, or `None` if unavailable.
    pub fn value(&self, ctx: &C) -> Option<f64> {
        (self.supply)(ctx)
    }
}

impl<C> Clone for NumericSupplier<C> {
    fn clone(&self) -> Self {
        Self {
            supply: Arc::clone(&self.supply),
        }
    }
}

impl<C> Debug for NumericSupplier<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericSupplier").finish_non_exhaustive()
    }
}
