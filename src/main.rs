//! LocSleuth — report the Rust files in a project that have grown too long.
//!
//! Thin binary entry point. All logic lives in the `locsleuth-core` crate.

mod cli;

use anyhow::Context;
use clap::Parser;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    // Diagnostics go to stderr so stdout carries only the report.
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = args.scan_config();
    let report = locsleuth_core::scan(&config)
        .with_context(|| format!("failed to scan {}", config.root.display()))?;

    locsleuth_core::report::render(&report, args.format.into(), io::stdout().lock())
        .context("failed to write report")?;

    Ok(())
}
