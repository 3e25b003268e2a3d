//! Provenance mapping: original site path → local mirrored file.
//!
//! Browsers and archiving tools stamp saved pages with a
//! `<!-- saved from url=(NNNN)https://... -->` comment. Collecting those over
//! the whole mirror reconstructs which local file stands for which original
//! URL, which is what the link rewriter needs.

mod extract;
mod key;
mod mapping;

pub use extract::{ProvenanceMatcher, ProvenanceRecord};
pub use key::{key_for_site_path, key_for_url, normalize_key};
pub use mapping::PathMapping;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::walk::relative_posix;

/// Builds the mapping from every page that carries a provenance comment.
///
/// Must run over unsanitized content: sanitizing removes the comment. Pages
/// without a comment (or with an unparseable URL) are skipped.
pub fn build_mapping(
    root: &Path,
    pages: &[PathBuf],
    matcher: &ProvenanceMatcher,
) -> Result<PathMapping> {
    let mut mapping = PathMapping::new();
    for page in pages {
        let bytes = fs::read(page).with_context(|| format!("read {}", page.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        let Some(record) = matcher.find_record(&text) else {
            tracing::debug!(page = %page.display(), "no provenance comment");
            continue;
        };
        let local = relative_posix(root, page);
        let key = record.key();
        if let Some(previous) = mapping.insert(key.clone(), local.clone()) {
            tracing::debug!(%key, %previous, replaced_by = %local, "duplicate provenance key");
        }
    }
    Ok(mapping)
}
