//! Dead asset pruning.
//!
//! Only files inside asset-bundle directories (name ends in the configured
//! suffix, `_files` by default) are ever candidates. A candidate no page or
//! stylesheet references is unreferenced; deleting it requires an explicit
//! apply step.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::MirrorConfig;
use crate::references::collect_references;
use crate::walk::list_files;

/// What a prune run would delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrunePlan {
    /// Files found under asset-bundle directories.
    pub candidates: usize,
    /// Candidates nothing references, sorted.
    pub unreferenced: Vec<PathBuf>,
}

impl PrunePlan {
    pub fn referenced(&self) -> usize {
        self.candidates - self.unreferenced.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PruneFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneOutcome {
    pub deleted: usize,
    pub failures: Vec<PruneFailure>,
}

/// True if some directory between `root` and `path` is named `<something><suffix>`.
pub fn is_in_asset_bundle(root: &Path, path: &Path, suffix: &str) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let Some(dirs) = rel.parent() else {
        return false;
    };
    dirs.components().any(|c| match c {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|n| n.len() > suffix.len() && n.ends_with(suffix)),
        _ => false,
    })
}

/// Finds unreferenced asset-bundle files. Read-only.
pub fn plan_prune(root: &Path, cfg: &MirrorConfig) -> Result<PrunePlan> {
    let root = fs::canonicalize(root).with_context(|| format!("canonicalize {}", root.display()))?;
    let candidates = list_files(&root, |p| is_in_asset_bundle(&root, p, &cfg.asset_dir_suffix))?;
    let referenced = collect_references(&root, cfg)?;

    let unreferenced: Vec<PathBuf> = candidates
        .iter()
        .filter(|p| !referenced.contains(*p))
        .cloned()
        .collect();
    tracing::info!(
        candidates = candidates.len(),
        unreferenced = unreferenced.len(),
        "prune plan ready"
    );
    Ok(PrunePlan {
        candidates: candidates.len(),
        unreferenced,
    })
}

/// Deletes every unreferenced file in `plan`. A failed deletion is logged and
/// recorded; the remaining deletions still run.
pub fn apply_prune(plan: &PrunePlan) -> PruneOutcome {
    let mut outcome = PruneOutcome::default();
    for path in &plan.unreferenced {
        match fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "deleted");
                outcome.deleted += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to delete");
                outcome.failures.push(PruneFailure {
                    path: path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }
    outcome
}
