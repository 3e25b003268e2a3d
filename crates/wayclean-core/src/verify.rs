//! Broken local page link detection.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::MirrorConfig;
use crate::references::attribute_references;
use crate::resolve::{is_local_reference, resolve_reference, strip_fragment_and_query};
use crate::walk::{list_files, relative_posix};

/// A local page link whose target does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    /// Page containing the link, relative to the root.
    pub page: String,
    /// The attribute value as written.
    pub reference: String,
    /// Absolute path the reference resolved to.
    pub resolved: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub pages_checked: usize,
    pub broken: Vec<BrokenLink>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }
}

/// Local target of `reference` if it is a link to a page that needs checking:
/// not external, not fragment-only, and ending in the page extension once the
/// fragment and query are removed.
fn page_link_target(page: &Path, reference: &str, page_extension: &str) -> Option<PathBuf> {
    if !is_local_reference(reference) || reference.starts_with('#') {
        return None;
    }
    let clean = strip_fragment_and_query(reference);
    let ext_ok = clean
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(page_extension));
    if !ext_ok {
        return None;
    }
    Some(resolve_reference(page, clean))
}

/// Checks every local page link under `root`; each broken link is reported once
/// per occurrence, in walk order.
pub fn verify_links(root: &Path, cfg: &MirrorConfig) -> Result<VerifyReport> {
    let root = fs::canonicalize(root).with_context(|| format!("canonicalize {}", root.display()))?;
    let pages = list_files(&root, |p| cfg.is_page(p))?;

    let mut report = VerifyReport {
        pages_checked: pages.len(),
        ..VerifyReport::default()
    };
    for page in &pages {
        let bytes = fs::read(page).with_context(|| format!("read {}", page.display()))?;
        let html = String::from_utf8_lossy(&bytes);
        for reference in attribute_references(&html) {
            let Some(resolved) = page_link_target(page, reference, &cfg.page_extension) else {
                continue;
            };
            if resolved.exists() {
                continue;
            }
            let page_rel = relative_posix(&root, page);
            tracing::debug!(page = %page_rel, %reference, resolved = %resolved.display(), "broken link");
            report.broken.push(BrokenLink {
                page: page_rel,
                reference: reference.to_string(),
                resolved,
            });
        }
    }
    tracing::info!(pages = report.pages_checked, broken = report.broken.len(), "verify finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_page_links_are_checked() {
        let page = Path::new("/m/docs/guide.html");
        assert_eq!(
            page_link_target(page, "../faq.html#q1", "html"),
            Some(PathBuf::from("/m/faq.html"))
        );
        assert_eq!(
            page_link_target(page, "Intro.HTML?x=1", "html"),
            Some(PathBuf::from("/m/docs/Intro.HTML"))
        );
        assert_eq!(page_link_target(page, "guide_files/a.css", "html"), None);
        assert_eq!(page_link_target(page, "#top", "html"), None);
        assert_eq!(page_link_target(page, "https://x.org/a.html", "html"), None);
        assert_eq!(page_link_target(page, "mailto:x@y.html", "html"), None);
    }
}
