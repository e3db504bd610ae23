//! Sheet files: TOML documents declaring variables, text patterns and
//! conditions to evaluate against them.
//!
//! ```toml
//! [number]
//! max-fraction-digits = 1
//!
//! [variables]
//! name = "'Zombie'"
//! health = "12.5"
//!
//! [texts]
//! title = "[name] ([health] hp)"
//!
//! [[conditions]]
//! first = "health"
//! operation = "<"
//! second = "20"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use plex::{
    ConditionSpec, Engine, EngineBuilder, EngineConfig, EvalError, FnBuilder, NumberFormat,
    Placeholder, RegistrationError, ResolveError, Value, ValueKind,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors from loading a sheet or building its engine.
#[derive(Debug, Error, Diagnostic)]
pub enum SheetError {
    #[error("cannot read sheet {}", path.display())]
    #[diagnostic(code(plex::sheet::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid sheet {}", path.display())]
    #[diagnostic(code(plex::sheet::toml))]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("variable '{name}' has no valid literal value: '{literal}'")]
    #[diagnostic(
        code(plex::sheet::variable),
        help("quote text values, e.g. \"'Zombie'\"")
    )]
    InvalidVariable { name: String, literal: String },

    #[error(transparent)]
    #[diagnostic(code(plex::sheet::registration))]
    Registration(#[from] RegistrationError),
}

/// A parsed sheet file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Sheet {
    /// Number formatting for the `number` type.
    #[serde(default)]
    pub number: NumberFormat,

    /// Variable name to literal text, e.g. `"12.5"` or `"'Zombie'"`.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,

    /// Text name to pattern.
    #[serde(default)]
    pub texts: BTreeMap<String, String>,

    /// Conditions, folded in order.
    #[serde(default)]
    pub conditions: Vec<ConditionSpec>,
}

impl Sheet {
    /// Read and parse a sheet file.
    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let content = read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SheetError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise an empty sheet.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SheetError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Build an engine whose placeholders are this sheet's variables, plus
    /// the subject holding their values.
    ///
    /// `overrides` replace or add variables before anything is parsed.
    pub fn build(
        &self,
        overrides: &[(String, String)],
    ) -> Result<(Engine<Subject>, Subject), SheetError> {
        let mut literals = self.variables.clone();
        for (name, literal) in overrides {
            literals.insert(name.clone(), literal.clone());
        }

        let config = EngineConfig::builder().number(self.number.clone()).build();
        let mut builder = EngineBuilder::with_config(&config)?;
        let mut subject = Subject::default();
        let count = literals.len();
        for (name, literal) in literals {
            let value = builder.types().parse_literal(&literal).ok_or_else(|| {
                SheetError::InvalidVariable {
                    name: name.clone(),
                    literal: literal.clone(),
                }
            })?;
            let kind = value.kind();
            let placeholder = variable(name.clone(), kind);
            builder.add_builder(
                kind,
                name.clone(),
                FnBuilder::new(0, move |_, _| Ok(placeholder.clone())),
            )?;
            subject.insert(name, value);
        }
        builder.add_builder(ValueKind::Number, "round", round_builder())?;

        debug!(variables = count, "built sheet engine");
        Ok((builder.seal(), subject))
    }
}

/// Variable values a sheet's placeholders are evaluated against.
#[derive(Debug, Default, Clone)]
pub struct Subject {
    values: HashMap<String, Value>,
}

impl Subject {
    /// Set a variable.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Get a variable.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

fn variable(name: String, kind: ValueKind) -> Placeholder<Subject> {
    Placeholder::new(kind, move |subject: &Subject| {
        subject
            .get(&name)
            .cloned()
            .ok_or_else(|| EvalError::Unavailable { name: name.clone() })
    })
}

/// `round:<variable>[,digits]` rounds a number variable, to whole numbers
/// unless a digit count is given.
fn round_builder() -> FnBuilder<Subject> {
    FnBuilder::new(1, |name, args| {
        let target = args[0].clone();
        let digits = match args.get(1) {
            Some(digits) => digits.parse::<i32>().map_err(|_| ResolveError::InvalidArgument {
                name: name.to_string(),
                argument: digits.clone(),
                reason: "expected a digit count".to_string(),
            })?,
            None => 0,
        };
        let scale = 10f64.powi(digits);
        Ok(Placeholder::new(ValueKind::Number, move |subject: &Subject| {
            subject
                .get(&target)
                .and_then(Value::as_number)
                .map(|n| Value::Number((n * scale).round() / scale))
                .ok_or_else(|| EvalError::Unavailable {
                    name: target.clone(),
                })
        }))
    })
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use plex::Condition;
    use tempfile::TempDir;

    use super::*;

    const SHEET: &str = r#"
[number]
max-fraction-digits = 1

[variables]
name = "'Zombie'"
health = "12.34"
boss = "false"

[texts]
title = "[name] ([health] hp)"

[[conditions]]
first = "health"
operation = "<"
second = "20"
"#;

    fn sheet() -> Sheet {
        toml::from_str(SHEET).unwrap()
    }

    #[test]
    fn parses_all_sections() {
        let sheet = sheet();
        assert_eq!(sheet.number.max_fraction_digits, 1);
        assert_eq!(sheet.variables.len(), 3);
        assert_eq!(sheet.texts["title"], "[name] ([health] hp)");
        assert_eq!(sheet.conditions.len(), 1);
        assert!(!sheet.conditions[0].not);
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(toml::from_str::<Sheet>("[colors]\nred = 1\n").is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mob.toml");
        write(&path, SHEET).unwrap();
        let sheet = Sheet::load(&path).unwrap();
        assert_eq!(sheet.texts.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Sheet::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SheetError::Io { .. }));
    }

    #[test]
    fn variables_become_placeholders() {
        let (engine, subject) = sheet().build(&[]).unwrap();
        let pattern = engine.compile_pattern(&sheet().texts["title"]).unwrap();
        assert_eq!(pattern.render(&subject).unwrap(), "Zombie (12.3 hp)");

        let boss = engine.parse("boss").unwrap();
        assert_eq!(boss.evaluate(&subject), Ok(Value::Boolean(false)));
    }

    #[test]
    fn overrides_replace_variables() {
        let overrides = [
            ("health".to_string(), "30".to_string()),
            ("level".to_string(), "2".to_string()),
        ];
        let (engine, subject) = sheet().build(&overrides).unwrap();
        let condition = Condition::from_specs(&engine, &sheet().conditions).unwrap();
        assert!(!condition.test(&subject));
        assert!(engine.parse("level").is_ok());
        assert_eq!(subject.get("level"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn invalid_variable_literal() {
        let mut sheet = sheet();
        sheet.variables.insert("title".into(), "Zombie".into());
        let err = sheet.build(&[]).err().unwrap();
        assert!(matches!(err, SheetError::InvalidVariable { ref name, .. } if name == "title"));
    }

    #[test]
    fn clashing_number_separators() {
        let mut sheet = sheet();
        sheet.number = NumberFormat::builder()
            .decimal_separator(',')
            .grouping_separator(',')
            .build();
        let err = sheet.build(&[]).err().unwrap();
        assert!(matches!(
            err,
            SheetError::Registration(RegistrationError::InvalidNumberFormat { .. })
        ));
    }

    #[test]
    fn round_variable() {
        let (engine, subject) = sheet().build(&[]).unwrap();
        let whole = engine.parse("round:health").unwrap();
        assert_eq!(whole.evaluate(&subject), Ok(Value::Number(12.0)));
        let tenths = engine.parse("round:health,1").unwrap();
        assert_eq!(tenths.evaluate(&subject), Ok(Value::Number(12.3)));

        let missing = engine.parse("round:mana").unwrap();
        assert_eq!(
            missing.evaluate(&subject),
            Err(EvalError::Unavailable {
                name: "mana".into()
            })
        );
        assert!(engine.parse("round:health,x").is_err());
    }
}
