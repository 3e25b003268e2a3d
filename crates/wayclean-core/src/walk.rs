//! Mirror tree traversal.

use anyhow::{Context, Result};
use jwalk::{Parallelism, WalkDir};
use std::path::{Component, Path, PathBuf};

use crate::error::MirrorError;

/// Lists every regular file under `root` accepted by `filter`, sorted by path.
///
/// Hidden files are included and symlinks are not followed. The walk is
/// serial so output order is stable across runs.
pub fn list_files<F>(root: &Path, filter: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    if !root.is_dir() {
        return Err(MirrorError::NotADirectory(root.to_path_buf()).into());
    }
    let mut out = Vec::new();
    let walker = WalkDir::new(root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::Serial);
    for entry in walker {
        let entry = entry.with_context(|| format!("walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if filter(&path) {
            out.push(path);
        }
    }
    Ok(out)
}

/// `path` relative to `root`, joined with `/` whatever the platform separator.
/// Falls back to the whole path when `path` is not under `root`.
pub fn relative_posix(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
