//! Educational features: explanations of what each command does.
//!
//! Explanations go to stderr so they never mix with zonefile output.

use colored::Colorize;

/// Command explanation builder.
#[derive(Debug, Clone)]
pub struct Explain {
    title: String,
    description: String,
    what_happens: Vec<String>,
    caveats: Vec<String>,
}

impl Explain {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            what_happens: Vec::new(),
            caveats: Vec::new(),
        }
    }

    fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn caveat(mut self, caveat: &str) -> Self {
        self.caveats.push(caveat.to_string());
        self
    }

    /// Render the explanation without colors.
    pub fn render(&self) -> String {
        let mut out = format!("=== {} ===\n{}\n", self.title, self.description);
        if !self.what_happens.is_empty() {
            out.push_str("How it works:\n");
            for (i, step) in self.what_happens.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, step));
            }
        }
        for caveat in &self.caveats {
            out.push_str(&format!("Watch out: {}\n", caveat));
        }
        out
    }

    /// Print the explanation to stderr.
    pub fn print(&self) {
        eprintln!();
        eprintln!("{}", format!("=== {} ===", self.title).bold().cyan());
        eprintln!("{}", self.description);
        eprintln!();

        if !self.what_happens.is_empty() {
            eprintln!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, step);
            }
            eprintln!();
        }

        for caveat in &self.caveats {
            eprintln!("{} {}", "Watch out:".yellow().bold(), caveat);
        }
        if !self.caveats.is_empty() {
            eprintln!();
        }
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn convert() -> Self {
        Self::new("Convert")
            .description("Turns a Route 53 hosted-zone JSON export into a zonefile.")
            .step("Reads the ResourceRecordSets array from the export")
            .step("Uses the given origin, or infers it from the common suffix of the record names")
            .step("Writes one zonefile line per record value, names relative to the origin")
            .step("Keeps SOA and NS as comments so the new provider's own records stay in charge")
            .step("Turns non-apex aliases into CNAMEs and comments out apex aliases")
            .caveat("Alias targets such as load balancers are AWS-only; check them after import")
            .caveat("Routing policies (weighted, failover, geo) are kept only as META comments")
    }

    pub fn origin() -> Self {
        Self::new("Origin")
            .description("Infers the zone origin from the record names in an export.")
            .step("Strips the trailing dot from every record name")
            .step("Finds the longest label suffix shared by all names")
            .step("Falls back to the last two labels of the first name when only a TLD is shared")
            .caveat("Zones under multi-label suffixes (example.co.uk) may need an explicit origin")
    }

    pub fn inspect() -> Self {
        Self::new("Inspect")
            .description("Shows what the conversion will do with each record set.")
            .step("emitted - written as one or more active zonefile records")
            .step("comment - kept only as a comment (SOA, NS, apex alias)")
            .step("skipped - nothing to convert (no values and no alias target)")
    }

    pub fn count() -> Self {
        Self::new("Count")
            .description("Counts record-set entries in an export, or active records in a zonefile.")
            .step("JSON input: counts the entries of ResourceRecordSets")
            .step("Zonefile input: counts lines that are not blank, comments or $ directives")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numbers_steps() {
        let text = Explain::origin().render();
        assert!(text.starts_with("=== Origin ==="));
        assert!(text.contains("  1. Strips the trailing dot"));
        assert!(text.contains("  3. Falls back"));
        assert!(text.contains("Watch out: Zones under multi-label suffixes"));
    }

    #[test]
    fn test_every_command_has_description() {
        for explain in [Explain::convert(), Explain::origin(), Explain::inspect(), Explain::count()] {
            assert!(!explain.description.is_empty());
            assert!(!explain.what_happens.is_empty());
        }
    }
}
