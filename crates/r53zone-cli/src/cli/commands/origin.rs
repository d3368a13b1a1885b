//! `r53zone origin` - infer the zone origin from record names.

use anyhow::{Context as _, Result};
use serde::Serialize;

use r53zone::{infer_origin, ExportDocument};

use super::{read_input, Context};
use crate::cli::args::OriginArgs;
use crate::education::Explain;
use crate::output::print_report;

#[derive(Debug, Serialize)]
struct OriginReport {
    origin: String,
    entries: usize,
}

pub fn execute(ctx: &Context, args: OriginArgs) -> Result<()> {
    if ctx.explain {
        Explain::origin().print();
    }

    let json = read_input(&args.input)?;
    let document = ExportDocument::from_json_str(&json)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let origin = infer_origin(document.names()).ok_or_else(|| {
        anyhow::anyhow!(
            "Could not infer origin from {}.\n\n\
             Check that the export has named record sets, or pass --origin to convert.",
            args.input.display()
        )
    })?;

    let report = OriginReport {
        origin,
        entries: document.entry_count(),
    };

    if !print_report(ctx.output_format, &report)? {
        println!("{}", report.origin);
    }

    Ok(())
}
