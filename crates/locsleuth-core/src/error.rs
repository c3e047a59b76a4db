//! Error types.
//!
//! Only failures that end the run live here. Per-file read failures are
//! absorbed by the scanner and never become an error value.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal failure while scanning the anchor root.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root could not be resolved (missing, dangling, or not permitted).
    #[error("scan root {} is unavailable: {source}", path.display())]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The root resolved but is not a directory.
    #[error("scan root {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The root exists but its entries could not be listed.
    #[error("scan root {} could not be read: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },
}

/// A failure while writing a rendered report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode report as CSV: {0}")]
    Csv(#[from] csv::Error),
}
