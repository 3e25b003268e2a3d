//! Inline scripts that drive the archive replay runtime (`__wm.*`).

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Marker for calls into the replay runtime (`__wm.init`, `__wm.wombat`, `__wm.bt`, ...).
const RUNTIME_MARKER: &str = "__wm.";

// One script element at a time; the body is checked separately so a match
// never runs from one script into the next.
static SCRIPT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>(.*?)</script>\s*")
        .expect("SCRIPT_BLOCK_RE: hardcoded regex is valid")
});

/// Removes every script block whose body references the replay runtime.
pub fn strip_runtime_scripts(html: &str) -> String {
    SCRIPT_BLOCK_RE
        .replace_all(html, |caps: &Captures<'_>| {
            if caps[1].contains(RUNTIME_MARKER) {
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
