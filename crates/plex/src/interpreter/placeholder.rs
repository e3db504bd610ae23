//! Evaluable placeholder instances.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::interpreter::EvalError;
use crate::types::{TypeTag, Typed, Value, ValueKind};

type EvalFn<C> = dyn Fn(&C) -> Result<Value, EvalError> + Send + Sync;

/// A resolved placeholder: a declared result kind plus an evaluation
/// function from context to value.
///
/// Instances are produced once per configuration string and evaluated many
/// times. Cloning is cheap and shares the evaluation function.
///
/// # Example
///
/// ```
/// use plex::{Placeholder, Value, ValueKind};
///
/// struct Mob {
///     health: f64,
/// }
///
/// let health = Placeholder::from_fn(|mob: &Mob| mob.health);
/// assert_eq!(health.kind(), ValueKind::Number);
/// assert_eq!(health.evaluate(&Mob { health: 7.5 }), Ok(Value::Number(7.5)));
/// ```
pub struct Placeholder<C> {
    kind: ValueKind,
    eval: Arc<EvalFn<C>>,
}

impl<C: 'static> Placeholder<C> {
    /// Create a placeholder from a fallible evaluation function.
    ///
    /// The function must return values of `kind`.
    pub fn new(
        kind: ValueKind,
        eval: impl Fn(&C) -> Result<Value, EvalError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            eval: Arc::new(eval),
        }
    }

    /// Create a placeholder from an infallible supplier. The kind follows
    /// from the supplier's return type.
    pub fn from_fn<T: Typed>(f: impl Fn(&C) -> T + Send + Sync + 'static) -> Self {
        Self::new(T::KIND, move |ctx| Ok(f(ctx).into()))
    }

    /// Create a placeholder that always evaluates to `value`.
    pub fn constant(value: Value) -> Self {
        Self::new(value.kind(), move |_| Ok(value.clone()))
    }

    /// Derive a placeholder that renders this one with `from` and reparses the
    /// text with `to`.
    pub(crate) fn cast(self, from: &TypeTag, to: &TypeTag) -> Self {
        let from = from.clone();
        let to = to.clone();
        Self::new(to.kind(), move |ctx| {
            let text = from.stringify(&self.evaluate(ctx)?);
            to.parse(&text).ok_or(EvalError::CastFailed {
                text,
                target: to.kind(),
            })
        })
    }
}

impl<C> Placeholder<C> {
    /// The declared result kind.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Evaluate against a context.
    pub fn evaluate(&self, ctx: &C) -> Result<Value, EvalError> {
        (self.eval)(ctx)
    }
}

impl<C> Clone for Placeholder<C> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<C> Debug for Placeholder<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Placeholder")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
