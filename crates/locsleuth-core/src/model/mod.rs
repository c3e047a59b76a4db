/// Data model — measured source files and the report built from them.
pub mod report;
pub mod source_file;

pub use report::{LargeFileReport, ScanStats};
pub use source_file::SourceFile;
