//! Command-line argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Convert Route 53 hosted-zone exports into zonefiles.
///
/// Reads the JSON printed by `aws route53 list-resource-record-sets` and
/// writes a zonefile ready for review and import into another provider.
/// Use --explain on any command to learn what it does.
#[derive(Parser, Debug)]
#[command(name = "r53zone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a JSON export into a zonefile
    Convert(ConvertArgs),

    /// Print the origin inferred from an export's record names
    Origin(OriginArgs),

    /// Show what the conversion does with each record set
    Inspect(InspectArgs),

    /// Count entries in an export or active records in a zonefile
    Count(CountArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Convert command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Route 53 JSON export ("-" reads stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Zone origin (e.g. example.com); inferred from the records when omitted
    #[arg(short = 'O', long, env = "R53ZONE_ORIGIN")]
    pub origin: Option<String>,

    /// Write the zonefile to this file instead of stdout
    #[arg(short, long, conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write the zonefile to <origin>.db in the output directory
    #[arg(long)]
    pub save: bool,

    /// Directory used by --save (defaults to config output_dir, then cwd)
    #[arg(long, requires = "save")]
    pub out_dir: Option<PathBuf>,

    /// TTL for record sets without one
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub default_ttl: Option<u32>,

    /// Provider named in the zonefile header
    #[arg(long, env = "R53ZONE_TARGET")]
    pub target: Option<String>,
}

// ============================================================================
// Origin command
// ============================================================================

#[derive(Args, Debug)]
pub struct OriginArgs {
    /// Route 53 JSON export ("-" reads stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

// ============================================================================
// Inspect command
// ============================================================================

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Route 53 JSON export ("-" reads stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Zone origin; inferred from the records when omitted
    #[arg(short = 'O', long, env = "R53ZONE_ORIGIN")]
    pub origin: Option<String>,
}

// ============================================================================
// Count command
// ============================================================================

#[derive(Args, Debug)]
pub struct CountArgs {
    /// JSON export or zonefile ("-" reads stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., default_ttl, target_provider)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
