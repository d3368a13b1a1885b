//! Convert Route 53 hosted-zone exports into `named`-compatible zonefiles.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use r53zone::{convert_str, GeneratorOptions};
//!
//! fn main() -> r53zone::Result<()> {
//!     let json = std::fs::read_to_string("example.com.json").unwrap();
//!
//!     // Infer the origin from the record names
//!     let conversion = convert_str(&json, None, &GeneratorOptions::default())?;
//!     println!("{}", conversion.text);
//!
//!     for diagnostic in &conversion.diagnostics {
//!         eprintln!("{diagnostic}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # What gets converted
//!
//! - Plain record sets become one zonefile line per value
//! - `SOA` and `NS` are kept as comments for auditing
//! - Alias records below the apex become `CNAME`s; apex aliases are kept as
//!   comments to be recreated by hand
//! - Routing policy metadata (weight, failover, geo...) is kept as a comment

pub mod config;
pub mod conversion;
pub mod generator;
pub mod meta;
pub mod origin;
pub mod stats;
pub mod txt;

// Re-export core types
pub use r53zone_core::*;

pub use config::GeneratorOptions;
pub use conversion::{convert_document, convert_str, convert_value, Conversion, OriginSource};
pub use generator::{generate_zone_text, RecordOutcome, ZoneGenerator};
pub use origin::infer_origin;
pub use stats::{count_active_lines, suggested_file_name, ConversionStats};
