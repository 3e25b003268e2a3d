//! Mapping-key normalization shared by the mapper and the rewriter.

use url::Url;

/// Normalizes an original-site path into a mapping key: a single trailing
/// slash is dropped (unless the path is exactly `/`) and the result is
/// lower-cased. An empty path becomes `/`.
pub fn normalize_key(path: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    let trimmed = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    trimmed.to_lowercase()
}

/// Mapping key for a full URL (its path component only).
pub fn key_for_url(url: &Url) -> String {
    normalize_key(url.path())
}

/// Mapping key for a root-relative path found on a page of `site_host`.
///
/// The path is parsed against the site origin so query, fragment and dot
/// segments are handled the same way as for provenance URLs. If parsing fails
/// the raw path is normalized instead.
pub fn key_for_site_path(site_host: &str, path: &str) -> String {
    match Url::parse(&format!("https://{site_host}{path}")) {
        Ok(url) => key_for_url(&url),
        Err(_) => normalize_key(path),
    }
}
