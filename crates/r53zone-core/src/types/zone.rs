use super::ResourceRecordSet;
use crate::error::{Result, ZoneError};
use crate::fqdn;

/// Zonefile rendering of the apex name.
pub const APEX: &str = "@";

/// The conversion unit: a fully-qualified origin and its record sets
///
/// Built fresh for each conversion and never mutated by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    origin: String,
    records: Vec<ResourceRecordSet>,
}

impl Zone {
    /// Create a zone, normalizing the origin to fully-qualified form
    ///
    /// Fails with [`ZoneError::MissingOrigin`] when the origin is blank.
    pub fn new(origin: &str, records: Vec<ResourceRecordSet>) -> Result<Self> {
        let origin = origin.trim();
        if origin.is_empty() {
            return Err(ZoneError::blank_origin());
        }
        Ok(Self {
            origin: fqdn::to_fqdn(origin),
            records,
        })
    }

    /// Fully-qualified origin
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Record sets in export order
    #[must_use]
    pub fn records(&self) -> &[ResourceRecordSet] {
        &self.records
    }

    /// Returns true if `name` is this zone's apex
    #[must_use]
    pub fn is_apex(&self, name: &str) -> bool {
        fqdn::is_apex(name, &self.origin)
    }

    /// Owner name as written in the zonefile: `@` for the apex, otherwise
    /// the name exactly as exported
    #[must_use]
    pub fn render_name<'a>(&self, name: &'a str) -> &'a str {
        if self.is_apex(name) {
            APEX
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_qualified_and_trimmed() {
        let zone = Zone::new("  example.com ", Vec::new()).unwrap();
        assert_eq!(zone.origin(), "example.com.");
        let zone = Zone::new("example.com.", Vec::new()).unwrap();
        assert_eq!(zone.origin(), "example.com.");
    }

    #[test]
    fn test_blank_origin_is_rejected() {
        for origin in ["", "   ", "\t\n"] {
            let err = Zone::new(origin, Vec::new()).unwrap_err();
            assert!(err.is_origin_error());
        }
    }

    #[test]
    fn test_render_name() {
        let zone = Zone::new("example.com", Vec::new()).unwrap();
        assert_eq!(zone.render_name("example.com."), "@");
        assert_eq!(zone.render_name("example.com"), "@");
        assert_eq!(zone.render_name("www.example.com."), "www.example.com.");
        assert_eq!(zone.render_name("www.example.com"), "www.example.com");
    }
}
