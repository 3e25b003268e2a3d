//! Referenced-file collection over pages and stylesheets.
//!
//! Produces the set of local files something in the mirror points at. Pruning
//! uses it to decide which asset-bundle files are dead.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::config::MirrorConfig;
use crate::resolve::{is_local_reference, resolve_reference, strip_fragment_and_query};
use crate::walk::list_files;

// `href`/`src` with either quote style; the value is group 2 or 3.
static ATTR_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(href|src)=(?:"([^"']+)"|'([^"']+)')"#)
        .expect("ATTR_REF_RE: hardcoded regex is valid")
});

const QUOTES: &[char] = &['"', '\''];

static CSS_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)url\(([^)]+)\)").expect("CSS_URL_RE: hardcoded regex is valid")
});

/// Raw `href`/`src` attribute values in document order.
pub fn attribute_references(html: &str) -> impl Iterator<Item = &str> {
    ATTR_REF_RE.captures_iter(html).filter_map(|caps| {
        caps.get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
    })
}

/// Raw `url(...)` targets in a stylesheet, surrounding whitespace and quotes removed.
pub fn stylesheet_references(css: &str) -> impl Iterator<Item = &str> {
    CSS_URL_RE.captures_iter(css).filter_map(|caps| {
        let raw = caps.get(1)?.as_str().trim();
        let raw = raw.strip_prefix(QUOTES).unwrap_or(raw);
        let raw = raw.strip_suffix(QUOTES).unwrap_or(raw);
        Some(raw)
    })
}

/// Resolves a raw reference found in `document` to a local path, or `None`
/// for external, non-file, or pure-fragment references.
pub fn resolve_local(document: &Path, raw: &str) -> Option<PathBuf> {
    if !is_local_reference(raw) {
        return None;
    }
    let clean = strip_fragment_and_query(raw);
    if clean.is_empty() {
        return None;
    }
    Some(resolve_reference(document, clean))
}

/// Every local file referenced from a page attribute or a stylesheet `url(...)`
/// under `root`. Paths are absolute (based on the canonicalized root).
pub fn collect_references(root: &Path, cfg: &MirrorConfig) -> Result<BTreeSet<PathBuf>> {
    let root = fs::canonicalize(root).with_context(|| format!("canonicalize {}", root.display()))?;
    let files = list_files(&root, |p| cfg.is_page(p) || cfg.is_stylesheet(p))?;

    let mut refs = BTreeSet::new();
    for file in &files {
        let bytes = fs::read(file).with_context(|| format!("read {}", file.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        let before = refs.len();
        if cfg.is_page(file) {
            refs.extend(attribute_references(&text).filter_map(|r| resolve_local(file, r)));
        } else {
            refs.extend(stylesheet_references(&text).filter_map(|r| resolve_local(file, r)));
        }
        tracing::trace!(file = %file.display(), new = refs.len() - before, "collected references");
    }
    tracing::debug!(files = files.len(), referenced = refs.len(), "reference scan done");
    Ok(refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_in_both_quote_styles() {
        let html = r#"<a href="a.html">a</a><img SRC='b_files/x.png'><a href="">e</a>"#;
        let refs: Vec<&str> = attribute_references(html).collect();
        assert_eq!(refs, vec!["a.html", "b_files/x.png"]);
    }

    #[test]
    fn stylesheet_urls_trimmed() {
        let css = r#"a{background:url( "img/a.png" )} b{background:url('img/b.png')} c{background:url(img/c.png)}"#;
        let refs: Vec<&str> = stylesheet_references(css).collect();
        assert_eq!(refs, vec!["img/a.png", "img/b.png", "img/c.png"]);
    }

    #[test]
    fn resolve_local_skips_external_and_fragments() {
        let doc = Path::new("/m/docs/guide.html");
        assert_eq!(resolve_local(doc, "https://x.org/a.png"), None);
        assert_eq!(resolve_local(doc, "mailto:a@b.c"), None);
        assert_eq!(resolve_local(doc, "#top"), None);
        assert_eq!(
            resolve_local(doc, "guide_files/site.css?v=3"),
            Some(PathBuf::from("/m/docs/guide_files/site.css"))
        );
    }

    #[test]
    fn collects_from_pages_and_stylesheets() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("guide_files")).unwrap();
        fs::write(
            root.join("guide.html"),
            r##"<link href="guide_files/site.css"><a href="https://x.org/">x</a><a href="#top">t</a>"##,
        )
        .unwrap();
        fs::write(
            root.join("guide_files/site.css"),
            "body{background:url('bg%20image.png')}",
        )
        .unwrap();

        let refs = collect_references(root, &MirrorConfig::default()).unwrap();
        let canon = fs::canonicalize(root).unwrap();
        let expected: BTreeSet<PathBuf> = [
            canon.join("guide_files/site.css"),
            canon.join("guide_files/bg image.png"),
        ]
        .into_iter()
        .collect();
        assert_eq!(refs, expected);
    }
}
