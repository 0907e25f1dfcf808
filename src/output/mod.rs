//! Output formatting for a derived report.
//!
//! - [`binary`] - dot grouped binary renderings
//! - [`terminal`] - `ipcalc` style columns
//! - [`json`] - JSON document

mod binary;
mod json;
mod terminal;

pub use binary::{get_binary_string_rep, BinaryColumns};
pub use json::render_json;
pub use terminal::{format_row, render_report, SEPARATOR};
