//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli
        .format
        .or(config.output_format)
        .unwrap_or(OutputFormat::Text);

    // Create context for commands
    let ctx = commands::Context {
        output_format,
        explain: cli.explain || config.explain_by_default,
        verbose: cli.verbose,
        no_color: cli.no_color,
        config,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Convert(args) => commands::convert::execute(&ctx, args),
        Commands::Origin(args) => commands::origin::execute(&ctx, args),
        Commands::Inspect(args) => commands::inspect::execute(&ctx, args),
        Commands::Count(args) => commands::count::execute(&ctx, args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Log level used when `RUST_LOG` is not set.
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
