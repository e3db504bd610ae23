//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Result of checking one sheet entry.
#[derive(Debug, Serialize)]
pub struct CheckRow {
    /// Entry path, e.g. `texts.title` or `conditions[0]`.
    pub entry: String,
    /// The expression or pattern text.
    pub source: String,
    /// Error message, if the entry failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Format check results as an ASCII table.
pub fn format_check_table(rows: &[CheckRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Entry", "Source", "Status"]);

    for row in rows {
        table.add_row(vec![
            row.entry.clone(),
            row.source.clone(),
            row.error.clone().unwrap_or_else(|| "ok".to_string()),
        ]);
    }

    table
}
