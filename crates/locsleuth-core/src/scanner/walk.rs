//! Serial directory walk using `jwalk`. It enumerates candidate files and
//! nothing else; filtering and measurement happen in the caller.
//!
//! The walk runs with `Parallelism::Serial`, so no thread pool is created.
//! Hidden entries are visited and symlinks are not followed. A symlink that
//! carries the suffix is still a candidate; reading it follows the link.

use crate::error::ScanError;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Outcome of one walk.
#[derive(Debug, Default)]
pub struct Walk {
    /// Matching paths, sorted by their full path bytes.
    pub candidates: Vec<PathBuf>,
    /// Sub-directories whose entries could not be listed.
    pub skipped_dirs: u64,
}

/// Collect every non-directory entry under `root` whose name ends in
/// `.{suffix}`, then sort them so the output order is reproducible.
///
/// A failure to list `root` itself is fatal. Failures deeper in the tree only
/// bump [`Walk::skipped_dirs`].
pub fn collect_candidates(root: &Path, suffix: &str) -> Result<Walk, ScanError> {
    let dotted = format!(".{suffix}");
    let mut walk = Walk::default();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let mut entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let at_root = err.depth() == 0 || err.path().is_some_and(|p| p == root);
                if at_root {
                    return Err(ScanError::RootUnreadable {
                        path: root.to_path_buf(),
                        source: err,
                    });
                }
                trace!("skipping unlistable directory: {err}");
                walk.skipped_dirs += 1;
                continue;
            }
        };

        // jwalk reports a failed `read_dir` on the directory entry itself,
        // not as an `Err` item.
        if let Some(err) = entry.read_children_error.take() {
            if entry.depth == 0 {
                return Err(ScanError::RootUnreadable {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            trace!("skipping unlistable directory {}: {err}", entry.path().display());
            walk.skipped_dirs += 1;
            continue;
        }

        if entry.depth == 0 || entry.file_type().is_dir() {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(&dotted) {
            walk.candidates.push(entry.path());
        }
    }

    walk.candidates.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    Ok(walk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x\n").unwrap();
    }

    fn relative(walk: &Walk, root: &Path) -> Vec<String> {
        walk.candidates
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn finds_suffix_recursively_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        touch(&root.join("src/main.rs"));
        touch(&root.join("src/a/deep/mod.rs"));
        touch(&root.join("build.rs"));
        touch(&root.join("README.md"));
        touch(&root.join("src/notes.rs.txt"));

        let walk = collect_candidates(root, "rs").unwrap();
        assert_eq!(
            relative(&walk, root),
            ["build.rs", "src/a/deep/mod.rs", "src/main.rs"]
        );
        assert_eq!(walk.skipped_dirs, 0);
    }

    #[test]
    fn sort_is_by_full_path_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        touch(&root.join("a/b.rs"));
        touch(&root.join("a-b/x.rs"));

        let walk = collect_candidates(root, "rs").unwrap();
        // '-' (0x2d) sorts before '/' (0x2f).
        assert_eq!(relative(&walk, root), ["a-b/x.rs", "a/b.rs"]);
    }

    #[test]
    fn hidden_entries_are_visited() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        touch(&root.join(".cargo/gen.rs"));
        touch(&root.join(".hidden.rs"));

        let walk = collect_candidates(root, "rs").unwrap();
        assert_eq!(relative(&walk, root), [".cargo/gen.rs", ".hidden.rs"]);
    }

    #[test]
    fn directories_with_suffix_are_not_candidates() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("odd.rs")).unwrap();
        touch(&root.join("odd.rs/inner.rs"));

        let walk = collect_candidates(root, "rs").unwrap();
        assert_eq!(relative(&walk, root), ["odd.rs/inner.rs"]);
    }

    #[test]
    fn empty_root_yields_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let walk = collect_candidates(tmp.path(), "rs").unwrap();
        assert!(walk.candidates.is_empty());
    }
}
