//! `r53zone inspect` - per-record-set view of a conversion.

use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use r53zone::{infer_origin, ExportDocument, RecordOutcome, Zone, ZoneError, ZoneGenerator};

use super::{read_input, Context};
use crate::cli::args::InspectArgs;
use crate::education::Explain;
use crate::output::print_report;

#[derive(Debug, Tabled, Serialize)]
struct RecordRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    record_type: String,
    #[tabled(rename = "TTL")]
    ttl: u64,
    #[tabled(rename = "Values")]
    values: usize,
    #[tabled(rename = "Alias")]
    alias: String,
    #[tabled(rename = "Disposition")]
    disposition: &'static str,
}

#[derive(Debug, Serialize)]
struct InspectReport {
    origin: String,
    entries: usize,
    active_lines: usize,
    records: Vec<RecordRow>,
}

const fn disposition(outcome: &RecordOutcome) -> &'static str {
    match outcome {
        RecordOutcome::Emitted { .. } => "emitted",
        RecordOutcome::CommentOnly { .. } => "comment",
        RecordOutcome::Skipped { .. } => "skipped",
    }
}

fn resolve_origin(explicit: Option<&str>, document: &ExportDocument) -> Result<String, ZoneError> {
    match explicit.map(str::trim).filter(|origin| !origin.is_empty()) {
        Some(origin) => Ok(origin.to_string()),
        None => infer_origin(document.names()).ok_or_else(ZoneError::uninferable_origin),
    }
}

fn build_report(ctx: &Context, document: ExportDocument, origin: &str) -> Result<InspectReport> {
    let entries = document.entry_count();
    let zone = Zone::new(origin, document.resource_record_sets)?;
    let options = ctx.config.generator_options(None, None);
    let generator = ZoneGenerator::new(&options);

    let mut active_lines = 0;
    let records = zone
        .records()
        .iter()
        .enumerate()
        .map(|(index, rrset)| {
            let outcome = generator.render_record(&zone, rrset);
            active_lines += outcome.active_lines();
            RecordRow {
                index,
                name: rrset.name().to_string(),
                record_type: rrset.type_tag().to_string(),
                ttl: rrset.effective_ttl(options.default_ttl),
                values: rrset.value_count(),
                alias: rrset
                    .alias_target
                    .as_ref()
                    .map(|alias| alias.target().to_string())
                    .unwrap_or_default(),
                disposition: disposition(&outcome),
            }
        })
        .collect();

    Ok(InspectReport {
        origin: zone.origin().to_string(),
        entries,
        active_lines,
        records,
    })
}

pub fn execute(ctx: &Context, args: InspectArgs) -> Result<()> {
    if ctx.explain {
        Explain::inspect().print();
    }

    let json = read_input(&args.input)?;
    let document = ExportDocument::from_json_str(&json)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    let origin = resolve_origin(args.origin.as_deref(), &document)?;
    let report = build_report(ctx, document, &origin)?;

    if print_report(ctx.output_format, &report)? {
        return Ok(());
    }

    println!("{} {}", "Origin:".bold(), report.origin.cyan());
    println!();

    if report.records.is_empty() {
        println!("{}", "No record sets in this export.".dimmed());
    } else {
        let table = Table::new(&report.records)
            .with(Style::rounded())
            .to_string();
        println!("{}", table);
    }

    println!();
    println!("{} {}", "Entries:".bold(), report.entries);
    println!("{} {}", "Active records:".bold(), report.active_lines);

    Ok(())
}
