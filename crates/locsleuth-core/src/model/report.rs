//! The finished report and the counters gathered while producing it.

use crate::model::SourceFile;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Counters for one scan. Diagnostic only; they never influence what is
/// reported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Files whose name carries the target suffix.
    pub candidates: u64,
    /// Candidates removed by an exclusion rule.
    pub excluded: u64,
    /// Candidates that could not be read or decoded.
    pub unreadable: u64,
    /// Candidates measured but under the threshold.
    pub below_threshold: u64,
    /// Entries in the final result list.
    pub reported: u64,
    /// Sub-directories that could not be listed.
    pub skipped_dirs: u64,
}

/// Result of a scan, ready to be rendered.
///
/// `files` is sorted by line count, largest first, and every entry is at or
/// above `threshold`.
#[derive(Debug, Clone, Serialize)]
pub struct LargeFileReport {
    /// Human name of the scanned language, e.g. "Rust".
    pub language: String,
    /// File suffix without the dot, e.g. "rs".
    pub suffix: String,
    pub threshold: usize,
    pub files: Vec<SourceFile>,
    pub stats: ScanStats,
    pub generated_at: DateTime<Local>,
}

impl LargeFileReport {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
