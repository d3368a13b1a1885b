//! Core types for converting Route 53 hosted-zone exports into zonefiles.
//!
//! This crate provides the foundational types used across r53zone:
//!
//! - **Types**: The export document, record sets, alias targets and routing
//!   metadata, plus the [`Zone`] conversion unit
//! - **Names**: Fully-qualified name helpers in [`fqdn`]
//! - **Errors**: The fatal error kinds in [`ZoneError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use r53zone_core::{ExportDocument, Zone, Result};
//!
//! fn load(json: &str) -> Result<Zone> {
//!     let doc = ExportDocument::from_json_str(json)?;
//!     Zone::new("example.com", doc.resource_record_sets)
//! }
//! ```

mod error;
pub mod fqdn;
pub mod types;

pub use error::{Result, ZoneError};
pub use types::*;
