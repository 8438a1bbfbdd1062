//! Small Markdown formatting helpers shared by the route and document renderers.

use std::borrow::Cow;

use serde_json::Value;

/// Escapes `|` so a value cannot break a table row.
pub(crate) fn cell(text: &str) -> Cow<'_, str> {
    if text.contains('|') {
        Cow::Owned(text.replace('|', "\\|"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Formats an optional JSON value for a table cell.
///
/// Strings are shown raw, anything else as compact JSON, and a missing
/// value as `-`.
pub(crate) fn value_cell(value: Option<&Value>) -> String {
    match value {
        None => "-".to_string(),
        Some(Value::String(s)) => cell(s).into_owned(),
        Some(other) => cell(&other.to_string()).into_owned(),
    }
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Renders a fenced, pretty-printed `json` code block followed by a blank line.
pub(crate) fn json_block(value: &Value) -> String {
    format!("```json\n{value:#}\n```\n\n")
}

/// Builds a table header and separator row from column names.
pub(crate) fn table_header(columns: &[&str]) -> String {
    let rules: Vec<String> = columns.iter().map(|c| "-".repeat(c.len() + 2)).collect();
    format!("| {} |\n|{}|\n", columns.join(" | "), rules.join("|"))
}
