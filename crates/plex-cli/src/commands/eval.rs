//! Implementation of the `plex eval` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Report};
use plex::ValueKind;
use serde::Serialize;

use crate::output::ExpressionDiagnostic;
use crate::sheet::Sheet;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Expression to evaluate, e.g. `(string)health` or `round:health,1`
    pub expression: String,

    /// Sheet providing variables and number formatting (.toml)
    #[arg(long)]
    pub sheet: Option<PathBuf>,

    /// Variables in name=literal format (repeatable)
    #[arg(short = 's', long = "set", value_parser = parse_key_val)]
    pub set: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub expression: String,
    pub kind: ValueKind,
    pub value: String,
}

/// Parse a name=literal variable string.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid variable format '{}': expected name=literal", s))?;
    Ok((s[..pos].trim().to_string(), s[pos + 1..].to_string()))
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let sheet = Sheet::load_or_default(args.sheet.as_deref())?;
    let (engine, subject) = sheet.build(&args.set)?;

    let placeholder = match engine.parse(&args.expression) {
        Ok(placeholder) => placeholder,
        Err(e) => {
            let diagnostic =
                ExpressionDiagnostic::from_resolve_error("<expression>", &args.expression, &e);
            eprintln!("{:?}", Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };

    match placeholder.evaluate(&subject) {
        Ok(value) => {
            let rendered = engine.stringify(&value);
            if args.json {
                let output = EvalResult {
                    expression: args.expression,
                    kind: value.kind(),
                    value: rendered,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", rendered);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "expression": args.expression,
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_splits_on_first_equals() {
        assert_eq!(
            parse_key_val("label='a=b'"),
            Ok(("label".to_string(), "'a=b'".to_string()))
        );
        assert_eq!(
            parse_key_val(" health =20"),
            Ok(("health".to_string(), "20".to_string()))
        );
        assert!(parse_key_val("health").is_err());
    }
}
