//! # r53zone-cli
//!
//! Command-line interface for converting Route 53 hosted-zone exports into
//! zonefiles.
//!
//! ## Features
//!
//! - **Convert**: JSON export in, zonefile out, with review diagnostics
//! - **Origin inference**: finds the zone apex from the record names
//! - **Inspect**: per-record-set table of what the conversion will do
//! - **Educational mode**: `--explain` describes what each command does
//! - **Multiple output formats**: Text, JSON, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod output;

pub use cli::run;
