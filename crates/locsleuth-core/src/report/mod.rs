/// Report rendering.
///
/// Text output is the primary form and its layout is fixed. JSON and CSV
/// carry the same ordered entries for tooling.
pub mod export;
pub mod text;

pub use export::{render_csv, render_json};
pub use text::render_text;

use crate::error::ReportError;
use crate::model::LargeFileReport;
use std::io::Write;

/// Output format for a finished report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Write `report` to `out` in the requested format.
pub fn render<W: Write>(
    report: &LargeFileReport,
    format: OutputFormat,
    out: W,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => render_text(report, out),
        OutputFormat::Json => render_json(report, out),
        OutputFormat::Csv => render_csv(report, out),
    }
}
