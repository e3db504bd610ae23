//! Display conditions: boolean predicates over a context.
//!
//! Besides plain combinators, conditions can be compiled from configuration
//! entries that compare two placeholder expressions, chained with `and`/`or`
//! gates.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::Not;
use std::str::FromStr;
use std::sync::Arc;

use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::interpreter::{Engine, ResolveError};
use crate::types::{Value, ValueKind};

/// Errors that occur while compiling conditions from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// The gate is neither `and` nor `or`.
    #[error("unsupported gate: '{gate}'")]
    UnsupportedGate { gate: String },

    /// The comparison operator is not recognized.
    #[error("unsupported operation: '{operation}'")]
    UnsupportedOperation { operation: String },

    /// One side of a comparison failed to resolve.
    #[error("in condition operand '{expression}': {source}")]
    Resolve {
        expression: String,
        #[source]
        source: ResolveError,
    },

    /// The two sides of a comparison have different kinds.
    #[error("cannot compare '{first}' ({first_kind}) with '{second}' ({second_kind})")]
    KindMismatch {
        first: String,
        first_kind: ValueKind,
        second: String,
        second_kind: ValueKind,
    },
}

type TestFn<C> = dyn Fn(&C) -> bool + Send + Sync;

/// A predicate over a context.
///
/// # Example
///
/// ```
/// use plex::Condition;
///
/// let low = Condition::from_fn(|health: &f64| *health < 5.0);
/// let high = !low.clone();
///
/// assert!(low.test(&2.0));
/// assert!(high.test(&8.0));
/// assert!(Condition::always().or(low).test(&8.0));
/// ```
pub struct Condition<C> {
    predicate: Arc<TestFn<C>>,
}

impl<C: 'static> Condition<C> {
    /// A condition that always holds.
    pub fn always() -> Self {
        Self::from_fn(|_| true)
    }

    /// Create a condition from a predicate.
    pub fn from_fn(test: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Arc::new(test),
        }
    }

    /// Holds when both conditions hold.
    pub fn and(self, other: Condition<C>) -> Self {
        Self::from_fn(move |ctx| self.test(ctx) && other.test(ctx))
    }

    /// Holds when either condition holds.
    pub fn or(self, other: Condition<C>) -> Self {
        Self::from_fn(move |ctx| self.test(ctx) || other.test(ctx))
    }

    /// Join this condition with `other` through `gate`.
    pub fn join(self, gate: Gate, other: Condition<C>) -> Self {
        match gate {
            Gate::And => self.and(other),
            Gate::Or => self.or(other),
        }
    }

    /// Compile a comparison between two placeholder expressions.
    ///
    /// Both sides are resolved immediately and must have the same kind. If
    /// either side fails to evaluate later, the condition is false and a
    /// warning is logged.
    pub fn compare(
        engine: &Engine<C>,
        first: &str,
        comparison: Comparison,
        second: &str,
    ) -> Result<Self, ConditionError> {
        let resolve = |expression: &str| {
            engine
                .parse(expression)
                .map_err(|source| ConditionError::Resolve {
                    expression: expression.to_string(),
                    source,
                })
        };
        let left = resolve(first)?;
        let right = resolve(second)?;
        if left.kind() != right.kind() {
            return Err(ConditionError::KindMismatch {
                first: first.to_string(),
                first_kind: left.kind(),
                second: second.to_string(),
                second_kind: right.kind(),
            });
        }

        let first = first.to_string();
        let second = second.to_string();
        Ok(Self::from_fn(move |ctx| {
            match (left.evaluate(ctx), right.evaluate(ctx)) {
                (Ok(a), Ok(b)) => comparison.apply(&a, &b),
                (Err(error), _) | (_, Err(error)) => {
                    warn!(%first, %second, %error, "condition operand failed to evaluate");
                    false
                }
            }
        }))
    }

    /// Fold configuration entries into one condition.
    ///
    /// Starts from [`Condition::always`] and joins each entry in order with
    /// its gate (default `and`), after negating it if `not` is set.
    pub fn from_specs(engine: &Engine<C>, specs: &[ConditionSpec]) -> Result<Self, ConditionError> {
        let mut condition = Self::always();
        for spec in specs {
            let mut next = spec.compile(engine)?;
            if spec.not {
                next = !next;
            }
            let gate = match &spec.gate {
                Some(gate) => gate.parse::<Gate>()?,
                None => Gate::And,
            };
            condition = condition.join(gate, next);
        }
        Ok(condition)
    }
}

impl<C> Condition<C> {
    /// Evaluate the condition.
    pub fn test(&self, ctx: &C) -> bool {
        (self.predicate)(ctx)
    }
}

impl<C: 'static> Not for Condition<C> {
    type Output = Condition<C>;

    fn not(self) -> Self::Output {
        Condition::from_fn(move |ctx| !self.test(ctx))
    }
}

impl<C> Clone for Condition<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C> Debug for Condition<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").finish_non_exhaustive()
    }
}

/// How a condition joins the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    And,
    Or,
}

impl FromStr for Gate {
    type Err = ConditionError;

    /// Parse `and` or `or`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(Gate::And),
            "or" => Ok(Gate::Or),
            _ => Err(ConditionError::UnsupportedGate {
                gate: s.to_string(),
            }),
        }
    }
}

/// A comparison operator between two values of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Comparison {
    /// Apply the operator.
    ///
    /// Booleans order `false < true`, text orders lexicographically. Values
    /// of different kinds are never equal and never ordered.
    pub fn apply(self, a: &Value, b: &Value) -> bool {
        match self {
            Comparison::Equal => a == b,
            Comparison::NotEqual => a != b,
            Comparison::Greater => order(a, b).is_some_and(Ordering::is_gt),
            Comparison::GreaterOrEqual => order(a, b).is_some_and(Ordering::is_ge),
            Comparison::Less => order(a, b).is_some_and(Ordering::is_lt),
            Comparison::LessOrEqual => order(a, b).is_some_and(Ordering::is_le),
        }
    }
}

fn order(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.partial_cmp(y),
        (Value::Text(x), Value::Text(y)) => Some(x.cmp(y)),
        (Value::Boolean(x), Value::Boolean(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

impl FromStr for Comparison {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "==" => Ok(Comparison::Equal),
            "!=" => Ok(Comparison::NotEqual),
            ">" => Ok(Comparison::Greater),
            ">=" => Ok(Comparison::GreaterOrEqual),
            "<" => Ok(Comparison::Less),
            "<=" => Ok(Comparison::LessOrEqual),
            _ => Err(ConditionError::UnsupportedOperation {
                operation: s.to_string(),
            }),
        }
    }
}

/// A condition entry as written in configuration.
///
/// ```toml
/// [[conditions]]
/// first = "health"
/// operation = "<"
/// second = "5"
/// not = false
/// gate = "and"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "kebab-case")]
pub struct ConditionSpec {
    /// Left-hand expression.
    pub first: String,
    /// Right-hand expression.
    pub second: String,
    /// Comparison operator (`==`, `!=`, `>`, `>=`, `<`, `<=`).
    pub operation: String,
    /// Negate the comparison.
    #[serde(default)]
    #[builder(default)]
    pub not: bool,
    /// Gate joining this entry to the previous ones; `and` when absent.
    #[serde(default)]
    pub gate: Option<String>,
}

impl ConditionSpec {
    /// Compile this entry's comparison, ignoring `not` and `gate`.
    pub fn compile<C: 'static>(&self, engine: &Engine<C>) -> Result<Condition<C>, ConditionError> {
        let comparison = self.operation.parse::<Comparison>()?;
        Condition::compare(engine, &self.first, comparison, &self.second)
    }
}
