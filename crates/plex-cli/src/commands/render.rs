//! Implementation of the `plex render` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use plex::Condition;
use serde::Serialize;

use crate::commands::eval::parse_key_val;
use crate::output::ExpressionDiagnostic;
use crate::sheet::Sheet;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Sheet to render (.toml)
    pub sheet: PathBuf,

    /// Variables in name=literal format, overriding the sheet (repeatable)
    #[arg(short = 's', long = "set", value_parser = parse_key_val)]
    pub set: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
struct RenderResult {
    texts: Vec<RenderedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<bool>,
}

#[derive(Serialize)]
struct RenderedText {
    name: String,
    text: String,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let sheet = Sheet::load(&args.sheet)?;
    let (engine, subject) = sheet.build(&args.set)?;

    let mut texts = Vec::with_capacity(sheet.texts.len());
    for (name, source) in &sheet.texts {
        let pattern = match engine.compile_pattern(source) {
            Ok(pattern) => pattern,
            Err(e) => {
                let origin = format!("texts.{name}");
                let diagnostic = ExpressionDiagnostic::from_pattern_error(&origin, source, &e);
                eprintln!("{:?}", Report::new(diagnostic));
                return Ok(exitcode::DATAERR);
            }
        };
        match pattern.render(&subject) {
            Ok(text) => texts.push(RenderedText {
                name: name.clone(),
                text,
            }),
            Err(e) => {
                eprintln!("Evaluation error in texts.{}: {}", name, e);
                return Ok(exitcode::DATAERR);
            }
        }
    }

    let condition = if sheet.conditions.is_empty() {
        None
    } else {
        match Condition::from_specs(&engine, &sheet.conditions) {
            Ok(condition) => Some(condition.test(&subject)),
            Err(e) => {
                let diagnostic = ExpressionDiagnostic::from_condition_error("conditions", &e);
                eprintln!("{:?}", Report::new(diagnostic));
                return Ok(exitcode::DATAERR);
            }
        }
    };

    if args.json {
        let output = RenderResult { texts, condition };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        for text in &texts {
            println!("{}: {}", text.name.bold(), text.text);
        }
        match condition {
            Some(true) => println!("{} {}", "conditions:".bold(), "pass".green()),
            Some(false) => println!("{} {}", "conditions:".bold(), "fail".red()),
            None => {}
        }
    }

    Ok(exitcode::OK)
}
