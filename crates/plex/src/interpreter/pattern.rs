//! Compiled text patterns: display text with embedded placeholders.

use std::fmt::{self, Debug, Formatter};

use crate::interpreter::{Engine, EvalError, PatternError, Placeholder};
use crate::parser::{Segment, parse_pattern};
use crate::types::TypeTag;

enum Part<C> {
    Literal(String),
    Placeholder {
        placeholder: Placeholder<C>,
        /// Tag used to render the value; `None` only for unregistered kinds.
        tag: Option<TypeTag>,
    },
}

/// A text pattern such as `"[name]: [health] / [max_health]"`, compiled once
/// against an engine and rendered per context.
///
/// `[[` and `]]` produce literal brackets.
///
/// # Example
///
/// ```
/// use plex::EngineBuilder;
///
/// struct Mob {
///     name: String,
///     health: f64,
/// }
///
/// let mut builder = EngineBuilder::new();
/// builder.add_fn("name", |mob: &Mob| mob.name.clone()).unwrap();
/// builder.add_fn("health", |mob: &Mob| mob.health).unwrap();
/// let engine = builder.seal();
///
/// let pattern = engine.compile_pattern("[name] ([[[health]]] hp)").unwrap();
/// let mob = Mob { name: "Zombie".to_string(), health: 12.5 };
/// assert_eq!(pattern.render(&mob).unwrap(), "Zombie ([12.5] hp)");
/// ```
pub struct TextPattern<C> {
    source: String,
    parts: Vec<Part<C>>,
}

impl<C: 'static> TextPattern<C> {
    pub(crate) fn compile(engine: &Engine<C>, source: &str) -> Result<Self, PatternError> {
        let pattern = parse_pattern(source)?;
        let mut parts = Vec::with_capacity(pattern.segments.len());
        for segment in pattern.segments {
            match segment {
                Segment::Literal(text) => parts.push(Part::Literal(text)),
                Segment::Placeholder(expression) => {
                    let placeholder =
                        engine
                            .parse(&expression)
                            .map_err(|source| PatternError::Resolve {
                                expression: expression.clone(),
                                source,
                            })?;
                    let tag = engine.types().by_kind(placeholder.kind()).cloned();
                    parts.push(Part::Placeholder { placeholder, tag });
                }
            }
        }
        Ok(Self {
            source: source.to_string(),
            parts,
        })
    }
}

impl<C> TextPattern<C> {
    /// Render the pattern against a context.
    ///
    /// Fails on the first placeholder whose evaluation fails.
    pub fn render(&self, ctx: &C) -> Result<String, EvalError> {
        let mut output = String::new();
        for part in &self.parts {
            match part {
                Part::Literal(text) => output.push_str(text),
                Part::Placeholder { placeholder, tag } => {
                    let value = placeholder.evaluate(ctx)?;
                    match tag {
                        Some(tag) => output.push_str(&tag.stringify(&value)),
                        None => output.push_str(&value.to_string()),
                    }
                }
            }
        }
        Ok(output)
    }

    /// The pattern text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of placeholders in the pattern.
    pub fn placeholder_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, Part::Placeholder { .. }))
            .count()
    }
}

impl<C> Debug for TextPattern<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextPattern")
            .field("source", &self.source)
            .field("placeholders", &self.placeholder_count())
            .finish()
    }
}
