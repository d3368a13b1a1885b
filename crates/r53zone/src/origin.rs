//! Origin inference.
//!
//! Route 53 exports do not name their zone, but every record name ends in
//! it. The origin is the longest label suffix shared by all names.

use r53zone_core::fqdn;
use tracing::debug;

/// Infer the zone apex from record names.
///
/// Names are compared label by label from the right after stripping one
/// trailing dot. When the shared suffix is a single label (or nothing), the
/// last two labels of the first name are used instead. Returns `None` for
/// an empty input or when the first name has fewer than two labels.
///
/// The result never carries a trailing dot.
pub fn infer_origin<'a, I>(names: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names = names.into_iter().map(fqdn::strip_qualifier);
    let first: Vec<&str> = names.next()?.split('.').collect();

    let common = names.fold(first.as_slice(), |suffix, name| {
        let shared = suffix
            .iter()
            .rev()
            .zip(name.rsplit('.'))
            .take_while(|(a, b)| **a == *b)
            .count();
        &suffix[suffix.len() - shared..]
    });

    let labels = if common.len() > 1 {
        common
    } else if first.len() >= 2 {
        &first[first.len() - 2..]
    } else {
        return None;
    };

    let origin = labels.join(".");
    debug!(origin = %origin, labels = labels.len(), "inferred zone origin");
    Some(origin)
}
