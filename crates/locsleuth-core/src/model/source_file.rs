//! A single measured source file.
//!
//! Only the path relative to the scan root is kept. The absolute path is
//! needed just long enough to read the content and is dropped afterwards.

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// One entry in the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Path relative to the scan root, using the platform separator.
    /// Serialised lossily so a non-UTF-8 name cannot fail an export.
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    /// Number of lines (`str::lines` semantics).
    pub lines: usize,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, lines: usize) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }
}

fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
