#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! CLI entrypoint for the GroveUI preset export tool.
//!
//! # Design
//! Installs logging, then delegates to the library and surfaces errors via `anyhow`.

use anyhow::{Context, Result};
use clap::Parser;
use grove_telemetry::{LogFormat, LoggingConfig, init_logging};
use preset_export::{Cli, export, load_theme_config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        build_sha: option_env!("GROVE_BUILD_SHA").unwrap_or("dev"),
    })?;

    let config = load_theme_config(cli.theme_config.as_deref())
        .context("failed to load theme configuration")?;
    let report = export(&cli.out_dir, &config)
        .with_context(|| format!("failed to export preset to {}", cli.out_dir.display()))?;
    for file in &report.files {
        tracing::info!(file = file.name, sha256 = %file.sha256, bytes = file.bytes, "wrote output");
    }
    Ok(())
}
