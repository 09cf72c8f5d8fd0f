//! Shared helper functions for CLI commands

use std::path::PathBuf;

use clap::ValueEnum;
use miette::{miette, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::flatfile;
use crate::core::{Config, Roster};

/// Resolve the roster data file: `--file` / `ROSTER_FILE` first, then the
/// config layer's `roster_file`.
pub fn resolve_roster_file(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(ref path) = global.file {
        return Ok(path.clone());
    }
    Config::load()
        .roster_file
        .ok_or_else(|| miette!("no roster file given; pass --file or set roster_file in config"))
}

/// Resolve the output format: `--format` first, then the config layer's
/// `default_format`, then the table default.
pub fn resolve_format(global: &GlobalOpts) -> OutputFormat {
    if let Some(format) = global.format {
        return format;
    }
    Config::load()
        .default_format
        .and_then(|s| OutputFormat::from_str(&s, true).ok())
        .unwrap_or_default()
}

/// Load the roster the current command operates on.
pub fn load_roster(global: &GlobalOpts) -> Result<Roster> {
    let path = resolve_roster_file(global)?;
    flatfile::load_path(&path)
        .map_err(|e| miette!("failed to load roster from '{}': {}", path.display(), e))
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
