//! Counters over a conversion and its output text.

use serde::Serialize;

use crate::generator::RecordOutcome;

/// File name used when no origin is known.
pub const FALLBACK_FILE_NAME: &str = "zonefile.db";

/// Tally of per-record outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Record sets in the export
    pub record_sets: usize,
    /// Record sets that produced active lines
    pub emitted: usize,
    /// Record sets preserved as comments only
    pub comment_only: usize,
    /// Record sets skipped
    pub skipped: usize,
    /// Active record lines written
    pub active_lines: usize,
}

impl ConversionStats {
    /// Count one record outcome
    pub fn tally(&mut self, outcome: &RecordOutcome) {
        self.record_sets += 1;
        self.active_lines += outcome.active_lines();
        match outcome {
            RecordOutcome::Emitted { .. } => self.emitted += 1,
            RecordOutcome::CommentOnly { .. } => self.comment_only += 1,
            RecordOutcome::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Count active record lines in zonefile text.
///
/// A line is active when it is not blank and starts with neither `;`
/// (comment) nor `$` (directive) once leading whitespace is removed.
#[must_use]
pub fn count_active_lines(text: &str) -> usize {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';') && !line.starts_with('$'))
        .count()
}

/// File name to save a zonefile under: `<origin>.db`.
#[must_use]
pub fn suggested_file_name(origin: &str) -> String {
    let base = origin.trim().trim_end_matches('.');
    if base.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        format!("{base}.db")
    }
}
