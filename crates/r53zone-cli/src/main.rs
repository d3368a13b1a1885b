//! r53zone - Route 53 export to zonefile converter
//!
//! Turns a hosted-zone JSON export into a zonefile for another provider.

use anyhow::Result;

fn main() -> Result<()> {
    r53zone_cli::run()
}
