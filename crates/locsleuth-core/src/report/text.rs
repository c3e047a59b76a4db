//! Plain-text report, the default output.
//!
//! ```text
//! Rust files with 500+ LOC (2 files):
//!
//!     812 lines  crates/core/src/scanner/mod.rs
//!     500 lines  src/main.rs
//! ```
//!
//! or, when nothing qualifies, the single line
//! `No Rust files with 500+ LOC found.`

use crate::error::ReportError;
use crate::model::LargeFileReport;
use std::io::Write;

/// Minimum width of the right-aligned line-count column.
const COUNT_WIDTH: usize = 5;

pub fn render_text<W: Write>(report: &LargeFileReport, mut out: W) -> Result<(), ReportError> {
    if report.is_empty() {
        writeln!(
            out,
            "No {} files with {}+ LOC found.",
            report.language, report.threshold
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "{} files with {}+ LOC ({} files):",
        report.language,
        report.threshold,
        report.len()
    )?;
    writeln!(out)?;

    for file in &report.files {
        writeln!(
            out,
            "  {:>width$} lines  {}",
            file.lines,
            file.path.display(),
            width = COUNT_WIDTH
        )?;
    }

    out.flush()?;
    Ok(())
}
