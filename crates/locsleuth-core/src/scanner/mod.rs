/// Scanner module — orchestrates one reporting run.
///
/// A run is strictly sequential:
/// 1. resolve the anchor root (fatal if it does not exist),
/// 2. walk it serially and collect `.rs` candidates in path order,
/// 3. drop anything an [`ExclusionRules`] check matches,
/// 4. read and count each survivor, silently skipping unreadable files,
/// 5. keep those at or above the threshold, largest first.
///
/// Nothing here writes to stdout; rendering lives in [`crate::report`].
pub mod filter;
pub mod walk;

pub use filter::{Exclusion, ExclusionRules};

use crate::analysis::{measure, select_large_files};
use crate::error::ScanError;
use crate::model::{LargeFileReport, ScanStats, SourceFile};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, trace};

/// Minimum line count reported when none is given.
pub const DEFAULT_THRESHOLD: usize = 500;

/// File suffix scanned for, without the dot.
pub const DEFAULT_SUFFIX: &str = "rs";

/// Language label used in report headers.
pub const DEFAULT_LANGUAGE: &str = "Rust";

/// Everything a scan needs. Read-only for the duration of the run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Anchor directory. Canonicalised before the walk starts.
    pub root: PathBuf,
    pub threshold: usize,
    /// Suffix without the dot, e.g. `rs`.
    pub suffix: String,
    /// Label shown in report headers, e.g. `Rust`.
    pub language: String,
    pub rules: ExclusionRules,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            threshold: DEFAULT_THRESHOLD,
            suffix: DEFAULT_SUFFIX.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
            rules: ExclusionRules::for_suffix(DEFAULT_SUFFIX),
        }
    }
}

impl ScanConfig {
    /// Default configuration anchored at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Run a scan and build the report.
///
/// Only an unusable root is an error. Unlistable sub-directories and
/// unreadable files are counted in [`ScanStats`] and otherwise ignored.
pub fn scan(config: &ScanConfig) -> Result<LargeFileReport, ScanError> {
    let start = Instant::now();

    let root = fs::canonicalize(&config.root).map_err(|source| ScanError::RootUnavailable {
        path: config.root.clone(),
        source,
    })?;
    if !root.is_dir() {
        return Err(ScanError::NotADirectory { path: root });
    }

    info!("Scanning {} for .{} files", root.display(), config.suffix);

    let walk = walk::collect_candidates(&root, &config.suffix)?;
    let mut stats = ScanStats {
        candidates: walk.candidates.len() as u64,
        skipped_dirs: walk.skipped_dirs,
        ..ScanStats::default()
    };

    let mut measured: Vec<SourceFile> = Vec::new();
    for path in walk.candidates {
        if let Some(rule) = config.rules.check(&path) {
            trace!("excluded ({}): {}", rule.label(), path.display());
            stats.excluded += 1;
            continue;
        }

        // Any read or decode failure drops the file without a trace.
        let Some(lines) = measure(&path) else {
            stats.unreadable += 1;
            continue;
        };

        if lines < config.threshold {
            stats.below_threshold += 1;
            continue;
        }

        measured.push(SourceFile::new(relative_to(&path, &root), lines));
    }

    let files = select_large_files(measured, config.threshold);
    stats.reported = files.len() as u64;

    debug!(
        "Scan complete in {:?}: {} candidates, {} excluded, {} unreadable, {} below {}, {} reported, {} dirs skipped",
        start.elapsed(),
        stats.candidates,
        stats.excluded,
        stats.unreadable,
        stats.below_threshold,
        config.threshold,
        stats.reported,
        stats.skipped_dirs
    );

    Ok(LargeFileReport {
        language: config.language.clone(),
        suffix: config.suffix.clone(),
        threshold: config.threshold,
        files,
        stats,
        generated_at: chrono::Local::now(),
    })
}

/// `path` relative to `root`; the walk only yields paths under `root`, so
/// the fallback to the full path is never taken in practice.
fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
