//! Fully-qualified domain name helpers.
//!
//! Route 53 hands out absolute names (`www.example.com.`) but tools and
//! humans frequently drop the trailing dot. Everything that compares names
//! against the zone origin goes through [`to_fqdn`] first.

use std::borrow::Cow;

/// Trailing separator that marks a name as absolute.
pub const QUALIFIER: char = '.';

/// Returns true if the name already ends in the qualifier.
#[must_use]
pub fn is_fully_qualified(name: &str) -> bool {
    name.ends_with(QUALIFIER)
}

/// Append the qualifier to a name unless it is already present.
///
/// Empty names stay empty rather than becoming the root.
#[must_use]
pub fn to_fqdn(name: &str) -> String {
    if name.is_empty() || is_fully_qualified(name) {
        name.to_string()
    } else {
        format!("{name}{QUALIFIER}")
    }
}

/// Strip a single trailing qualifier, if present.
#[must_use]
pub fn strip_qualifier(name: &str) -> &str {
    name.strip_suffix(QUALIFIER).unwrap_or(name)
}

/// Returns true if `name` is the zone apex for `origin`.
///
/// Both sides are normalized to fully-qualified form before comparing.
#[must_use]
pub fn is_apex(name: &str, origin: &str) -> bool {
    !name.is_empty() && to_fqdn(name) == to_fqdn(origin)
}

/// Returns true for a dotted-quad IPv4 literal (`1.2.3.4`).
///
/// Octet ranges are not checked, only the shape.
#[must_use]
pub fn is_ipv4_literal(value: &str) -> bool {
    let mut octets = 0;
    for octet in value.split('.') {
        if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

/// Returns true for values that are addresses rather than names.
///
/// Anything containing a colon counts as IPv6-like.
#[must_use]
pub fn is_address_literal(value: &str) -> bool {
    is_ipv4_literal(value) || value.contains(':')
}

/// Returns true for a bare domain-like token: letters, digits, hyphens and
/// dots only, with at least one dot.
#[must_use]
pub fn looks_like_domain(value: &str) -> bool {
    !value.is_empty()
        && value.contains('.')
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.')
}

/// Qualify a record value if it looks like a domain name.
///
/// Address literals and already-qualified names are returned unchanged, as
/// is anything that does not look like a domain.
#[must_use]
pub fn ensure_fqdn(value: &str) -> Cow<'_, str> {
    if is_address_literal(value) || is_fully_qualified(value) {
        return Cow::Borrowed(value);
    }
    if looks_like_domain(value) {
        return Cow::Owned(format!("{value}{QUALIFIER}"));
    }
    Cow::Borrowed(value)
}
