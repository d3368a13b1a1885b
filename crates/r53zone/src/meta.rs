//! Routing-metadata annotation.

use r53zone_core::RoutingMeta;

/// Prefix of every routing-metadata annotation.
pub const META_MARKER: &str = "; META: ";

/// Render routing attributes as a single annotation comment.
///
/// Produces `; META: SetIdentifier:blue | Weight:10` for whichever
/// attributes are set, or an empty string when none are.
#[must_use]
pub fn routing_annotation(meta: &RoutingMeta) -> String {
    let entries = meta.entries();
    if entries.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = entries
        .into_iter()
        .map(|(label, value)| format!("{label}:{value}"))
        .collect();
    format!("{META_MARKER}{}", pairs.join(" | "))
}
