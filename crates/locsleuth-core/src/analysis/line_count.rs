//! Line counting.
//!
//! A line is a newline-separated segment: an empty file has no lines, an
//! unterminated last line still counts, and `\r\n` is a single break.

use std::fs;
use std::path::Path;

/// Count the lines in `text`.
#[inline]
pub fn count_lines(text: &str) -> usize {
    text.lines().count()
}

/// Read `path` as UTF-8 and count its lines.
///
/// Returns `None` on *any* failure — missing file, permission denied,
/// invalid UTF-8, a directory that happens to carry the suffix. Callers treat
/// that as "skip this file"; the error itself is intentionally discarded.
pub fn measure(path: &Path) -> Option<usize> {
    fs::read_to_string(path).ok().map(|text| count_lines(&text))
}
