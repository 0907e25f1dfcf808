//! JSON output for scripting.

use super::binary::BinaryColumns;
use crate::error::Result;
use crate::processing::Report;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    binary: Option<BinaryColumns>,
}

/// Pretty printed report; binary renderings only when `show_binary` is set.
pub fn render_json(report: &Report, show_binary: bool) -> Result<String> {
    let doc = JsonReport {
        report,
        binary: show_binary.then(|| BinaryColumns::for_report(report)),
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
