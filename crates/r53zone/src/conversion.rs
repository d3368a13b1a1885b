//! End-to-end conversion: document in, zonefile text and diagnostics out.

use r53zone_core::{Diagnostic, ExportDocument, Result, Zone, ZoneError};
use serde::Serialize;
use serde_json::Value;

use crate::config::GeneratorOptions;
use crate::generator::ZoneGenerator;
use crate::origin::infer_origin;
use crate::stats::{suggested_file_name, ConversionStats};

/// Where the origin of a conversion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginSource {
    /// Supplied by the caller
    Supplied,
    /// Inferred from the record names
    Inferred,
}

/// Output of a successful conversion
///
/// The caller owns any retention of the result; nothing is cached here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Fully-qualified origin used
    pub origin: String,

    /// Where the origin came from
    pub origin_source: OriginSource,

    /// Zonefile text, lines joined by `\n`
    pub text: String,

    /// Advisory messages for a human reviewer
    pub diagnostics: Vec<Diagnostic>,

    /// Per-record tallies
    pub stats: ConversionStats,
}

impl Conversion {
    /// Returns true if the zonefile contains any active record line
    #[must_use]
    pub const fn has_active_records(&self) -> bool {
        self.stats.active_lines > 0
    }

    /// File name to save the zonefile under
    #[must_use]
    pub fn file_name(&self) -> String {
        suggested_file_name(&self.origin)
    }

    /// Number of warnings among the diagnostics
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }
}

/// Convert export JSON text into a zonefile.
///
/// A non-blank `origin` is used as given; otherwise it is inferred from the
/// record names.
pub fn convert_str(
    json: &str,
    origin: Option<&str>,
    options: &GeneratorOptions,
) -> Result<Conversion> {
    let doc = ExportDocument::from_json_str(json)?;
    convert_document(doc, origin, options)
}

/// Convert an already-parsed export into a zonefile.
pub fn convert_value(
    value: &Value,
    origin: Option<&str>,
    options: &GeneratorOptions,
) -> Result<Conversion> {
    convert_document(ExportDocument::from_value(value), origin, options)
}

/// Convert an export document into a zonefile.
pub fn convert_document(
    doc: ExportDocument,
    origin: Option<&str>,
    options: &GeneratorOptions,
) -> Result<Conversion> {
    let supplied = origin.map(str::trim).filter(|o| !o.is_empty());
    let (origin, source) = match supplied {
        Some(origin) => (origin.to_string(), OriginSource::Supplied),
        None => {
            let inferred = infer_origin(doc.names()).ok_or_else(ZoneError::uninferable_origin)?;
            (inferred, OriginSource::Inferred)
        }
    };

    let mut notes = Vec::new();
    if source == OriginSource::Inferred {
        notes.push(Diagnostic::note(format!(
            "origin {origin} inferred from record names; pass an origin explicitly if this is wrong"
        )));
    }
    if doc.is_truncated {
        notes.push(Diagnostic::warning(
            "export is truncated (IsTruncated); record sets from later pages are missing",
        ));
    }
    for &index in &doc.malformed_entries {
        notes.push(
            Diagnostic::warning("record-set entry is not a JSON object; skipped").for_record(index, ""),
        );
    }

    let zone = Zone::new(&origin, doc.resource_record_sets)?;
    let mut conversion = ZoneGenerator::new(options).generate(&zone);
    conversion.origin_source = source;
    notes.append(&mut conversion.diagnostics);
    conversion.diagnostics = notes;
    Ok(conversion)
}
