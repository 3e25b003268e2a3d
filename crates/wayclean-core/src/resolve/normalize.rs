//! Lexical `.` / `..` resolution (no filesystem access, no symlink following).

use std::path::{Component, Path, PathBuf};

/// Resolves `.` and `..` components lexically.
///
/// A `..` that would climb above an absolute root is dropped; on a relative
/// path with nothing left to pop it is kept, so `../x` stays `../x`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
