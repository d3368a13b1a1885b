//! Output formatting for different formats.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Zonefile text / tables for humans
    #[default]
    Text,
    /// JSON report
    Json,
    /// YAML report
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" | "zone" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: text, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Print a serializable report in a machine-readable format.
///
/// Returns `false` for [`OutputFormat::Text`], which each command renders
/// itself.
pub fn print_report<T: Serialize>(format: OutputFormat, report: &T) -> anyhow::Result<bool> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(report)?),
        OutputFormat::Text => return Ok(false),
    }
    Ok(true)
}
