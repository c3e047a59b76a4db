/// Analysis modules — per-file measurement and result selection.

pub mod large_files;
pub mod line_count;

pub use large_files::select_large_files;
pub use line_count::{count_lines, measure};
