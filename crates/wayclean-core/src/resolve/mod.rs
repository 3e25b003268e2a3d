//! Local reference resolution.
//!
//! Turns a raw `href`/`src`/`url(...)` value found in a mirrored document into
//! the absolute (or root-joined) filesystem path it points at. Pure string and
//! path arithmetic: nothing here touches the filesystem.

mod decode;
mod normalize;

pub use decode::decode_segment;
pub use normalize::normalize_lexically;

use std::path::{Path, PathBuf};

/// Non-filesystem schemes that never resolve to a local file.
const NON_FILE_SCHEMES: [&str; 4] = ["mailto:", "tel:", "javascript:", "data:"];

/// True when `raw` refers to something inside the mirror rather than the network
/// or a non-file scheme (`mailto:`, `tel:`, `javascript:`, `data:`).
pub fn is_local_reference(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("//") || lower.starts_with("http://") || lower.starts_with("https://") {
        return false;
    }
    !NON_FILE_SCHEMES.iter().any(|s| lower.starts_with(s))
}

/// Drops everything from the first `#`.
pub fn strip_fragment(raw: &str) -> &str {
    raw.split('#').next().unwrap_or("")
}

/// Drops the fragment and then the query string.
pub fn strip_fragment_and_query(raw: &str) -> &str {
    strip_fragment(raw).split('?').next().unwrap_or("")
}

/// Resolves `reference` against the directory containing `from_document`.
///
/// Each `/`-separated segment is percent-decoded on its own, so an encoded
/// slash (`%2F`) stays a literal `%2F` inside one path component instead of
/// becoming a separator. Segments that fail to decode are used verbatim.
/// Empty segments are skipped, which means a root-relative reference
/// (`/x/y.html`) lands under the page's own directory.
pub fn resolve_reference(from_document: &Path, reference: &str) -> PathBuf {
    let clean = strip_fragment(reference);
    let from_dir = from_document.parent().unwrap_or_else(|| Path::new(""));

    let mut joined = from_dir.to_path_buf();
    for segment in clean.split('/') {
        if segment.is_empty() {
            continue;
        }
        joined.push(decode_segment(segment).as_ref());
    }
    normalize_lexically(&joined)
}
