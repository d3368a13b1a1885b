//! `r53zone count` - entry and active-record counters.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use r53zone::{count_active_lines, ExportDocument};

use super::{read_input, Context};
use crate::cli::args::CountArgs;
use crate::education::Explain;
use crate::output::print_report;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum InputKind {
    Export,
    Zonefile,
}

#[derive(Debug, Serialize)]
struct CountReport {
    kind: InputKind,
    entries: usize,
}

/// JSON exports count record-set entries; anything else counts as a zonefile.
fn count(text: &str) -> CountReport {
    match ExportDocument::from_json_str(text) {
        Ok(document) => CountReport {
            kind: InputKind::Export,
            entries: document.entry_count(),
        },
        Err(_) => CountReport {
            kind: InputKind::Zonefile,
            entries: count_active_lines(text),
        },
    }
}

pub fn execute(ctx: &Context, args: CountArgs) -> Result<()> {
    if ctx.explain {
        Explain::count().print();
    }

    let text = read_input(&args.input)?;
    let report = count(&text);

    if !print_report(ctx.output_format, &report)? {
        let label = match report.kind {
            InputKind::Export => "JSON export",
            InputKind::Zonefile => "zonefile",
        };
        println!("{} {} ({})", "Entries:".bold(), report.entries, label.dimmed());
    }

    Ok(())
}
