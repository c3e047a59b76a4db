//! Threshold selection — keeps the files at or above the threshold and
//! orders them largest first.

use crate::model::SourceFile;
use std::cmp::Reverse;

/// Keep entries with `lines >= threshold`, sorted by line count descending.
///
/// The sort is stable: entries with equal counts keep their input order,
/// which the scanner guarantees is lexicographic path order.
pub fn select_large_files(measured: Vec<SourceFile>, threshold: usize) -> Vec<SourceFile> {
    let mut large: Vec<SourceFile> = measured
        .into_iter()
        .filter(|f| f.lines >= threshold)
        .collect();
    large.sort_by_key(|f| Reverse(f.lines));
    large
}
