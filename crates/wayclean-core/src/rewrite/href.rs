//! Relative href arithmetic between mirrored files.

use std::path::{Component, Path};

/// Percent-encodes each `/`-separated segment, keeping the slashes.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is escaped, including `!'()*`.
/// Browsers decode those the same way, so the href still resolves.
pub fn encode_path_for_href(path: &str) -> String {
    path.split('/')
        .map(|seg| urlencoding::encode(seg).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Href from the page at `from_document` to `target`, both relative to the
/// mirror root in forward-slash form. `None` if no relative path exists.
pub fn relative_href(from_document: &str, target: &str) -> Option<String> {
    let from_dir = Path::new(from_document)
        .parent()
        .unwrap_or_else(|| Path::new(""));
    let rel = pathdiff::diff_paths(Path::new(target), from_dir)?;
    let joined = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        return None;
    }
    Some(encode_path_for_href(&joined))
}
