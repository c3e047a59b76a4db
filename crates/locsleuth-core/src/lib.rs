/// LocSleuth Core — scanning, line counting, and report rendering.
///
/// This crate contains all business logic with zero CLI dependencies.
/// The `locsleuth` binary is a thin shell over it.
///
/// # Modules
///
/// - [`model`] — Measured source files, scan statistics, and the report.
/// - [`scanner`] — Serial directory walk, exclusion rules, scan orchestration.
/// - [`analysis`] — Line counting and threshold selection.
/// - [`report`] — Text, JSON, and CSV renderers.
/// - [`error`] — Error types for fatal scan and render failures.
pub mod analysis;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use error::{ReportError, ScanError};
pub use model::{LargeFileReport, ScanStats, SourceFile};
pub use scanner::{scan, ScanConfig};
