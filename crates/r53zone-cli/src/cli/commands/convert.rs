//! `r53zone convert` - JSON export to zonefile.

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use super::{print_diagnostics, read_input, Context};
use crate::cli::args::ConvertArgs;
use crate::education::Explain;
use crate::output::print_report;

pub fn execute(ctx: &Context, args: ConvertArgs) -> Result<()> {
    if ctx.explain {
        Explain::convert().print();
    }

    let json = read_input(&args.input)?;
    let options = ctx
        .config
        .generator_options(args.default_ttl, args.target.as_deref());
    debug!(ttl = options.default_ttl, target = %options.target_provider, "generator options");

    let conversion = r53zone::convert_str(&json, args.origin.as_deref(), &options)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    if print_report(ctx.output_format, &conversion)? {
        return Ok(());
    }

    let destination: Option<PathBuf> = if let Some(path) = args.output {
        Some(path)
    } else if args.save {
        let dir = args.out_dir.unwrap_or_else(|| ctx.config.output_dir());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        Some(dir.join(conversion.file_name()))
    } else {
        None
    };

    match &destination {
        Some(path) => {
            let mut text = conversion.text.clone();
            text.push('\n');
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => println!("{}", conversion.text),
    }

    print_diagnostics(&conversion.diagnostics);

    if let Some(path) = &destination {
        eprintln!(
            "{} Saved {} ({} active records)",
            "Success:".green().bold(),
            path.display().to_string().cyan(),
            conversion.stats.active_lines
        );
    }

    if !conversion.has_active_records() {
        eprintln!(
            "{} No active records were produced for {}; everything is commented out.",
            "Note:".yellow().bold(),
            conversion.origin
        );
    }

    Ok(())
}
