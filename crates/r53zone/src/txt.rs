//! TXT/SPF character-string quoting.

/// Quote a TXT or SPF value for the zonefile.
///
/// A value already wrapped in double quotes is unwrapped first, then
/// backslashes and double quotes are escaped and the result re-wrapped.
#[must_use]
pub fn quote_txt(value: &str) -> String {
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);

    let mut out = String::with_capacity(inner.len() + 2);
    out.push('"');
    for c in inner.chars() {
        if matches!(c, '\\' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Reverse [`quote_txt`]: strip the outer quotes and resolve backslash
/// escapes. Returns `None` if `quoted` is not a quoted string.
#[must_use]
pub fn unquote_txt(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next()?);
        } else {
            out.push(c);
        }
    }
    Some(out)
}
