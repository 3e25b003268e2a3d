//! Typed errors for conditions the CLI maps to distinct exit statuses.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    /// The mirror root contains no pages at all; nothing can be rewritten.
    #[error("no .{extension} files found under {}", root.display())]
    NoPages { root: PathBuf, extension: String },

    /// The mirror root does not exist or is not a directory.
    #[error("mirror root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A configuration value is unusable (empty host, empty extension, ...).
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
