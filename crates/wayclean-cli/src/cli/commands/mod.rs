//! CLI command handlers. Each command is in its own file.

mod clean;
mod completions;
mod map;
mod prune;
mod verify;

pub use clean::run_clean;
pub use completions::run_completions;
pub use map::run_map;
pub use prune::run_prune;
pub use verify::run_verify;

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Prints `value` as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `path` relative to `root` for display, or the full path if it lies elsewhere.
fn display_relative(root: &Path, path: &Path) -> String {
    let root = std::fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    path.strip_prefix(&root)
        .unwrap_or(path)
        .display()
        .to_string()
}
