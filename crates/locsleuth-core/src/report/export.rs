//! Machine-readable exports of a finished report.
//!
//! Both formats list the same entries in the same order as the text output.

use crate::error::ReportError;
use crate::model::{LargeFileReport, ScanStats, SourceFile};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::Write;

/// JSON envelope. Adds `count` so consumers need not measure the array.
#[derive(Serialize)]
struct JsonReport<'a> {
    language: &'a str,
    suffix: &'a str,
    threshold: usize,
    count: usize,
    files: &'a [SourceFile],
    stats: &'a ScanStats,
    generated_at: &'a DateTime<Local>,
}

impl<'a> From<&'a LargeFileReport> for JsonReport<'a> {
    fn from(report: &'a LargeFileReport) -> Self {
        Self {
            language: &report.language,
            suffix: &report.suffix,
            threshold: report.threshold,
            count: report.len(),
            files: &report.files,
            stats: &report.stats,
            generated_at: &report.generated_at,
        }
    }
}

/// Pretty-printed JSON object followed by a newline.
pub fn render_json<W: Write>(report: &LargeFileReport, mut out: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut out, &JsonReport::from(report))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// `path,lines` header followed by one record per entry. An empty report
/// still writes the header.
pub fn render_csv<W: Write>(report: &LargeFileReport, out: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(out);
    if report.is_empty() {
        writer.write_record(["path", "lines"])?;
    }
    for file in &report.files {
        writer.serialize(file)?;
    }
    writer.flush()?;
    Ok(())
}
