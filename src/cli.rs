//! Command-line arguments.

use clap::{Parser, ValueEnum};
use locsleuth_core::report::OutputFormat;
use locsleuth_core::scanner::DEFAULT_THRESHOLD;
use locsleuth_core::ScanConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "locsleuth",
    version,
    about = "Report Rust source files with at least N lines, largest first"
)]
pub struct Args {
    /// Directory to scan (defaults to the project root this binary was built from)
    ///
    /// The default is fixed at compile time. An installed binary no longer
    /// sits next to its sources, so pass ROOT explicitly when running one.
    pub root: Option<PathBuf>,

    /// Minimum line count for a file to be reported
    #[arg(short = 'n', long, default_value_t = DEFAULT_THRESHOLD)]
    pub min_lines: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::Csv => OutputFormat::Csv,
        }
    }
}

/// The project root baked in at compile time. The binary package sits at the
/// workspace root, so this is the tree the tool ships in.
pub fn default_anchor() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

impl Args {
    pub fn scan_config(&self) -> ScanConfig {
        let root = self.root.clone().unwrap_or_else(default_anchor);
        ScanConfig::new(root).with_threshold(self.min_lines)
    }
}
