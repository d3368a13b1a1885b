//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use r53zone::GeneratorOptions;

use crate::output::OutputFormat;

/// Environment variable that points at an alternate config file.
pub const CONFIG_ENV: &str = "R53ZONE_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// TTL used for record sets without a positive TTL.
    pub default_ttl: Option<u32>,

    /// Provider named in the zonefile header.
    pub target_provider: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Directory that `convert --save` writes into.
    pub output_dir: Option<PathBuf>,

    /// Always show explanations (as if --explain was passed).
    #[serde(default)]
    pub explain_by_default: bool,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("io", "r53zone", "r53zone")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Generator options from this config, with command-line overrides on top.
    pub fn generator_options(&self, ttl: Option<u32>, target: Option<&str>) -> GeneratorOptions {
        let mut options = GeneratorOptions::new();

        if let Some(ttl) = ttl.or(self.default_ttl) {
            options = options.default_ttl(ttl);
        }
        if let Some(target) = target.or(self.target_provider.as_deref()) {
            options = options.target_provider(target);
        }

        options
    }

    /// Directory for saved zonefiles; the working directory when unset.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
