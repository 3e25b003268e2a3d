//! Per-segment percent decoding.

use std::borrow::Cow;

/// Percent-decodes one path segment.
///
/// `%2F` (either case) is escaped to `%252F` first so it decodes back to the
/// literal text `%2F` rather than a `/`. If the decoded bytes are not valid
/// UTF-8 the raw segment is returned unchanged.
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    if !segment.contains('%') {
        return Cow::Borrowed(segment);
    }
    let preserved = escape_encoded_slash(segment);
    match urlencoding::decode(&preserved) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => Cow::Borrowed(segment),
    }
}

fn escape_encoded_slash(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut rest = segment;
    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        if tail.len() >= 3 && tail.as_bytes()[1..3].eq_ignore_ascii_case(b"2f") {
            out.push_str("%252F");
            rest = &tail[3..];
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
