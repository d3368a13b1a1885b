//! `r53zone config` - CLI configuration management.

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::PathBuf;

use r53zone::config::DEFAULT_TARGET_PROVIDER;
use r53zone::DEFAULT_TTL;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::print_report;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if print_report(ctx.output_format, config)? {
        return Ok(());
    }

    let unset = || "(not set)".dimmed().to_string();

    println!("{}", "Current Configuration:".bold());
    println!();
    println!(
        "  {} {}",
        "default_ttl:".bold(),
        config
            .default_ttl
            .map_or_else(|| format!("{} {}", DEFAULT_TTL, "(default)".dimmed()), |ttl| ttl.to_string())
    );
    println!(
        "  {} {}",
        "target_provider:".bold(),
        config.target_provider.clone().unwrap_or_else(|| {
            format!("{} {}", DEFAULT_TARGET_PROVIDER, "(default)".dimmed())
        })
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.map_or_else(unset, |format| format.to_string())
    );
    println!(
        "  {} {}",
        "output_dir:".bold(),
        config
            .output_dir
            .as_ref()
            .map_or_else(unset, |dir| dir.display().to_string())
    );
    println!("  {} {}", "explain_by_default:".bold(), config.explain_by_default);

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "default_ttl" | "ttl" => {
            let ttl: u32 = value
                .parse()
                .with_context(|| format!("Invalid TTL: {}", value))?;
            anyhow::ensure!(ttl > 0, "default_ttl must be greater than zero");
            config.default_ttl = Some(ttl);
            println!("{} default_ttl set to {}.", "Success:".green().bold(), ttl);
        }
        "target_provider" | "target" => {
            anyhow::ensure!(!value.trim().is_empty(), "target_provider cannot be blank");
            config.target_provider = Some(value.trim().to_string());
            println!("{} Target provider set to {}.", "Success:".green().bold(), value.cyan());
        }
        "output_format" | "output" | "format" => {
            config.output_format = Some(value.parse()?);
            println!("{} Output format set to {}.", "Success:".green().bold(), value.cyan());
        }
        "output_dir" | "dir" => {
            config.output_dir = Some(PathBuf::from(value));
            println!("{} Output directory set to {}.", "Success:".green().bold(), value.cyan());
        }
        "explain_by_default" | "explain" => {
            config.explain_by_default = value
                .parse()
                .with_context(|| format!("Expected true or false, got {}", value))?;
            println!("{} explain_by_default set to {}.", "Success:".green().bold(), value);
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 default_ttl        - TTL for record sets without one (seconds)\n  \
                 target_provider    - Provider named in the zonefile header\n  \
                 output_format      - Default output format (text/json/yaml)\n  \
                 output_dir         - Directory used by convert --save\n  \
                 explain_by_default - Always explain commands (true/false)",
                key
            );
        }
    }

    config.save()?;

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
