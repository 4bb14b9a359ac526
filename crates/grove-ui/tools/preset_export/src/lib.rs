#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Export the GroveUI Tailwind preset and design tokens for JS tooling.
//!
//! # Design
//! - The preset and token table are owned by `grove-ui`; this tool only
//!   serializes them so a Tailwind build can `require` the JSON.
//! - The preset is checked against the theme store configuration before
//!   anything is written.
//! - Each output is parsed back after writing, then a deterministic
//!   `PRESET_LOCK.txt` records its sha256 and size.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use grove_telemetry::{DEFAULT_LOG_LEVEL, LogFormat};
use grove_ui::tokens::{SPACING, color_map};
use grove_ui::{ConfigError, TOKENS_VERSION, TailwindPreset, ThemeConfig};
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::info;

/// File name of the serialized preset.
pub const PRESET_FILE: &str = "tailwind.preset.json";
/// File name of the serialized token table.
pub const TOKENS_FILE: &str = "tokens.json";
/// File name of the lock file.
pub const LOCK_FILE: &str = "PRESET_LOCK.txt";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "preset_export",
    about = "Write the GroveUI Tailwind preset and token table as JSON"
)]
pub struct Cli {
    /// Directory receiving the generated files.
    #[arg(long, env = "GROVE_PRESET_OUT_DIR", default_value = "dist")]
    pub out_dir: PathBuf,
    /// Theme store configuration (JSON) the preset must agree with.
    #[arg(long, env = "GROVE_THEME_CONFIG")]
    pub theme_config: Option<PathBuf>,
    /// Log level used when `RUST_LOG` is unset.
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
    /// Log output format (`json` or `pretty`); inferred from the build when omitted.
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

/// Errors returned by the export tool.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A filesystem operation failed.
    #[error("io error")]
    Io {
        /// Path involved in the failing operation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Serializing an output document failed.
    #[error("failed to encode output")]
    Encode {
        /// Output file being produced.
        file: &'static str,
        /// Serializer error.
        #[source]
        source: serde_json::Error,
    },
    /// A written output did not parse back as JSON.
    #[error("written output failed validation")]
    InvalidOutput {
        /// Output that failed the check.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// The theme configuration is invalid or disagrees with the preset.
    #[error("theme configuration rejected")]
    Config {
        /// Configuration failure.
        #[source]
        source: ConfigError,
    },
}

/// One file produced by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// File name inside the output directory.
    pub name: &'static str,
    /// Lowercase hex sha256 of the contents.
    pub sha256: String,
    /// Size in bytes.
    pub bytes: usize,
}

/// Summary of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Directory the files were written to.
    pub out_dir: PathBuf,
    /// Generated JSON documents, in lock-file order.
    pub files: Vec<ExportedFile>,
}

#[derive(Serialize)]
struct TokenDocument {
    version: &'static str,
    colors: BTreeMap<&'static str, BTreeMap<&'static str, &'static str>>,
    spacing: BTreeMap<&'static str, &'static str>,
}

impl TokenDocument {
    fn current() -> Self {
        Self {
            version: TOKENS_VERSION,
            colors: color_map(),
            spacing: SPACING
                .iter()
                .map(|token| (token.name, token.value))
                .collect(),
        }
    }
}

/// Load the theme configuration named on the command line, or the defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or fails validation.
pub fn load_theme_config(path: Option<&Path>) -> Result<ThemeConfig, ExportError> {
    let Some(path) = path else {
        return Ok(ThemeConfig::default());
    };
    let document = fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ThemeConfig::from_json(&document).map_err(|source| ExportError::Config { source })
}

/// Validate the preset against `config` and write every output into `out_dir`.
///
/// # Errors
/// Returns an error if the preset disagrees with `config`, an output cannot be
/// written, or a written output fails to parse back.
pub fn export(out_dir: &Path, config: &ThemeConfig) -> Result<ExportReport, ExportError> {
    let preset = TailwindPreset::grove();
    preset
        .validate_against(config)
        .map_err(|source| ExportError::Config { source })?;

    fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let preset_json = preset.to_json().map_err(|source| ExportError::Encode {
        file: PRESET_FILE,
        source,
    })?;
    let tokens_json =
        serde_json::to_string_pretty(&TokenDocument::current()).map_err(|source| {
            ExportError::Encode {
                file: TOKENS_FILE,
                source,
            }
        })?;

    let files = vec![
        write_json(out_dir, PRESET_FILE, &preset_json)?,
        write_json(out_dir, TOKENS_FILE, &tokens_json)?,
    ];
    write_lock(out_dir, &files)?;

    info!(
        out_dir = %out_dir.display(),
        files = files.len(),
        "preset exported"
    );
    Ok(ExportReport {
        out_dir: out_dir.to_path_buf(),
        files,
    })
}

fn write_json(
    out_dir: &Path,
    name: &'static str,
    contents: &str,
) -> Result<ExportedFile, ExportError> {
    let path = out_dir.join(name);
    let mut payload = contents.to_string();
    payload.push('\n');
    fs::write(&path, &payload).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    let written = fs::read(&path).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_slice::<serde_json::Value>(&written)
        .map_err(|source| ExportError::InvalidOutput {
            path: path.clone(),
            source,
        })?;

    Ok(ExportedFile {
        name,
        sha256: sha256_hex(&written),
        bytes: written.len(),
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn write_lock(out_dir: &Path, files: &[ExportedFile]) -> Result<(), ExportError> {
    let lock_path = out_dir.join(LOCK_FILE);
    let contents: String = files
        .iter()
        .map(|file| format!("{} sha256 {} bytes {}\n", file.name, file.sha256, file.bytes))
        .collect();
    fs::write(&lock_path, contents).map_err(|source| ExportError::Io {
        path: lock_path,
        source,
    })
}
