//! Implementation of the `plex check` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use plex::{Engine, Gate};

use crate::output::table::{format_check_table, CheckRow};
use crate::output::ExpressionDiagnostic;
use crate::sheet::{Sheet, Subject};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Sheet to check (.toml)
    pub sheet: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, verbose: bool) -> miette::Result<i32> {
    let sheet = Sheet::load(&args.sheet)?;
    let (engine, _) = match sheet.build(&[]) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("{:?}", Report::new(e));
            return Ok(exitcode::DATAERR);
        }
    };

    let rows = check_sheet(&sheet, &engine, verbose);
    let failures = rows.iter().filter(|row| row.error.is_some()).count();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
    } else {
        println!("{}", format_check_table(&rows));
        if failures == 0 {
            println!("{} {} entries ok", "✓".green(), rows.len());
        } else {
            println!("{} {} of {} entries failed", "✗".red(), failures, rows.len());
        }
    }

    if failures == 0 {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

/// Compile every text and condition in `sheet`, one row each.
///
/// With `verbose`, failures are also printed as full diagnostics.
fn check_sheet(sheet: &Sheet, engine: &Engine<Subject>, verbose: bool) -> Vec<CheckRow> {
    let mut rows = Vec::with_capacity(sheet.texts.len() + sheet.conditions.len());

    for (name, pattern) in &sheet.texts {
        let entry = format!("texts.{name}");
        let error = engine.compile_pattern(pattern).err().map(|e| {
            if verbose {
                let diagnostic = ExpressionDiagnostic::from_pattern_error(&entry, pattern, &e);
                eprintln!("{:?}", Report::new(diagnostic));
            }
            e.to_string()
        });
        rows.push(CheckRow {
            entry,
            source: pattern.clone(),
            error,
        });
    }

    for (index, spec) in sheet.conditions.iter().enumerate() {
        let entry = format!("conditions[{index}]");
        let gate = spec.gate.as_deref().map(str::parse::<Gate>).transpose();
        let error = match gate.and_then(|_| spec.compile(engine)) {
            Ok(_) => None,
            Err(e) => {
                if verbose {
                    let diagnostic = ExpressionDiagnostic::from_condition_error(&entry, &e);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                Some(e.to_string())
            }
        };
        let negation = if spec.not { "not " } else { "" };
        rows.push(CheckRow {
            entry,
            source: format!("{negation}{} {} {}", spec.first, spec.operation, spec.second),
            error,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(source: &str) -> Sheet {
        toml::from_str(source).unwrap()
    }

    #[test]
    fn valid_entries_have_no_errors() {
        let sheet = sheet(
            r#"
[variables]
health = "5"

[texts]
hp = "[health] hp"

[[conditions]]
first = "health"
operation = ">"
second = "0"
gate = "or"
"#,
        );
        let (engine, _) = sheet.build(&[]).unwrap();
        let rows = check_sheet(&sheet, &engine, false);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.error.is_none()));
        assert_eq!(rows[1].source, "health > 0");
    }

    #[test]
    fn failures_are_reported_per_entry() {
        let sheet = sheet(
            r#"
[variables]
health = "5"

[texts]
broken = "[health"
fine = "[health]"
unknown = "[mana]"

[[conditions]]
first = "health"
operation = "=<"
second = "0"

[[conditions]]
first = "health"
operation = "=="
second = "'five'"
not = true
"#,
        );
        let (engine, _) = sheet.build(&[]).unwrap();
        let rows = check_sheet(&sheet, &engine, false);
        let errors: Vec<_> = rows.iter().map(|row| row.error.as_deref()).collect();
        assert_eq!(
            errors,
            vec![
                Some("unclosed '[' at offset 0"),
                None,
                Some("in placeholder '[mana]': unable to parse literal 'mana'"),
                Some("unsupported operation: '=<'"),
                Some("cannot compare 'health' (number) with ''five'' (text)"),
            ]
        );
        assert_eq!(rows[4].source, "not health == 'five'");
    }
}
