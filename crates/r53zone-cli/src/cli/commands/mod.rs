//! Command implementations.

pub mod config;
pub mod convert;
pub mod count;
pub mod inspect;
pub mod origin;

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::io::Read;
use std::path::Path;

use r53zone::Diagnostic;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Verbosity level (-v count)
    pub verbose: u8,

    /// Disable colors
    pub no_color: bool,

    /// Loaded configuration file
    pub config: Config,
}

/// Read a whole input file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Print diagnostics to stderr, warnings highlighted.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        let line = diagnostic.to_string();
        if diagnostic.is_warning() {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{}", line.dimmed());
        }
    }
}
