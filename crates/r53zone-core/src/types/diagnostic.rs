use serde::Serialize;
use std::fmt;

/// How much attention a diagnostic needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Note,
    /// Needs a human to look at the output before importing it
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note => write!(f, "note"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Advisory message surfaced beside the zonefile text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity
    pub severity: Severity,

    /// Index of the record set in the export, if record-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<usize>,

    /// Name of the record set, if record-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a zone-wide note
    #[must_use]
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            record: None,
            name: None,
            message: message.into(),
        }
    }

    /// Create a zone-wide warning
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::note(message)
        }
    }

    /// Attach the record set this diagnostic is about
    #[must_use]
    pub fn for_record(mut self, index: usize, name: &str) -> Self {
        self.record = Some(index);
        self.name = (!name.is_empty()).then(|| name.to_string());
        self
    }

    /// Returns true for warnings
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.severity)?;
        match (self.record, &self.name) {
            (Some(index), Some(name)) => write!(f, "[#{index} {name}] ")?,
            (Some(index), None) => write!(f, "[#{index}] ")?,
            _ => {}
        }
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Diagnostic::note("done").to_string(), "note: done");
        assert_eq!(
            Diagnostic::warning("apex alias")
                .for_record(3, "example.com.")
                .to_string(),
            "warning: [#3 example.com.] apex alias"
        );
        assert_eq!(
            Diagnostic::warning("skipped").for_record(0, "").to_string(),
            "warning: [#0] skipped"
        );
    }
}
