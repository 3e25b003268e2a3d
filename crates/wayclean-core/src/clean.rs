//! The rewrite pass: build the mapping over the whole mirror, then sanitize and
//! rewrite every page in place.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::MirrorConfig;
use crate::error::MirrorError;
use crate::provenance::{build_mapping, PathMapping, ProvenanceMatcher};
use crate::rewrite::LinkRewriter;
use crate::sanitize::sanitize;
use crate::walk::{list_files, relative_posix};

/// Counts reported after a clean run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanSummary {
    /// Pages found under the root.
    pub scanned: usize,
    /// Pages whose content changed (written back unless dry run).
    pub modified: usize,
    /// Entries in the provenance mapping.
    pub mapped: usize,
    /// Pages left alone because they are not valid UTF-8.
    pub skipped: usize,
    pub dry_run: bool,
}

/// All pages of a mirror plus the mapping built from their provenance comments.
#[derive(Debug, Clone)]
pub struct MirrorScan {
    pub pages: Vec<PathBuf>,
    pub mapping: PathMapping,
}

/// Lists pages and builds the mapping. Fails with [`MirrorError::NoPages`] when
/// the root holds no page at all.
pub fn scan_mirror(root: &Path, cfg: &MirrorConfig) -> Result<MirrorScan> {
    let pages = list_files(root, |p| cfg.is_page(p))?;
    if pages.is_empty() {
        return Err(MirrorError::NoPages {
            root: root.to_path_buf(),
            extension: cfg.page_extension.clone(),
        }
        .into());
    }
    let matcher = ProvenanceMatcher::new(&cfg.site_host)?;
    let mapping = build_mapping(root, &pages, &matcher)?;
    tracing::info!(pages = pages.len(), mapped = mapping.len(), "mirror scanned");
    Ok(MirrorScan { pages, mapping })
}

/// Sanitizes then rewrites one page's text.
pub fn clean_page(
    html: &str,
    from_document: &str,
    rewriter: &LinkRewriter,
    mapping: &PathMapping,
) -> String {
    let sanitized = sanitize(html);
    rewriter.rewrite(&sanitized, from_document, mapping)
}

/// Runs the whole pass over `root`. Each page is written at most once, and
/// only when its content changed. With `dry_run` nothing is written.
pub fn clean_mirror(root: &Path, cfg: &MirrorConfig, dry_run: bool) -> Result<CleanSummary> {
    let MirrorScan { pages, mapping } = scan_mirror(root, cfg)?;
    if mapping.is_empty() {
        tracing::warn!(root = %root.display(), "no mapping could be built from provenance comments");
    }
    let rewriter = LinkRewriter::from_config(cfg)?;

    let mut summary = CleanSummary {
        scanned: pages.len(),
        mapped: mapping.len(),
        dry_run,
        ..CleanSummary::default()
    };

    for page in &pages {
        let bytes = fs::read(page).with_context(|| format!("read {}", page.display()))?;
        let raw = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(_) => {
                tracing::warn!(page = %page.display(), "not valid UTF-8; left unchanged");
                summary.skipped += 1;
                continue;
            }
        };

        let from_document = relative_posix(root, page);
        let cleaned = clean_page(&raw, &from_document, &rewriter, &mapping);
        if cleaned == raw {
            continue;
        }
        summary.modified += 1;
        if dry_run {
            tracing::debug!(page = %from_document, "would modify");
            continue;
        }
        fs::write(page, cleaned).with_context(|| format!("write {}", page.display()))?;
        tracing::debug!(page = %from_document, "modified");
    }

    tracing::info!(
        scanned = summary.scanned,
        modified = summary.modified,
        skipped = summary.skipped,
        dry_run,
        "clean finished"
    );
    Ok(summary)
}
