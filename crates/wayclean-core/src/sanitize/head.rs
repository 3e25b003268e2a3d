//! Removal of archive-injected `<head>` material: loader block, toolbar
//! assets, the provenance comment and the toolbar-height style.

use regex::Regex;
use std::sync::LazyLock;

// The loader script through its closing marker comment, shortest match.
static LOADER_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]+athena\.js[^>]*>.*?<!--\s*End Wayback Rewrite JS Include\s*-->\s*")
        .expect("LOADER_BLOCK_RE: hardcoded regex is valid")
});

static TOOLBAR_STYLESHEET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<link[^>]+(?:banner-styles|iconochive)\.css[^>]*>\s*")
        .expect("TOOLBAR_STYLESHEET_RE: hardcoded regex is valid")
});

static PLAYBACK_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<script[^>]+(?:bundle-playback|wombat|ruffle|athena)\.js[^>]*></script>\s*")
        .expect("PLAYBACK_SCRIPT_RE: hardcoded regex is valid")
});

static PROVENANCE_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--\s*saved from url=\(\d+\).*?-->\s*")
        .expect("PROVENANCE_COMMENT_RE: hardcoded regex is valid")
});

// Captures the `<html ...` prefix so only the style attribute is dropped.
static TOOLBAR_HEIGHT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(<html\b[^>]*?)\sstyle="[^"]*--wm-toolbar-height:[^"]*""#)
        .expect("TOOLBAR_HEIGHT_STYLE_RE: hardcoded regex is valid")
});

/// Removes the loader block that starts at the `athena.js` script tag and ends
/// at `<!-- End Wayback Rewrite JS Include -->`.
pub fn strip_loader_block(html: &str) -> String {
    LOADER_BLOCK_RE.replace_all(html, "").into_owned()
}

/// Removes toolbar stylesheets and playback scripts wherever they appear.
pub fn strip_injected_assets(html: &str) -> String {
    let html = TOOLBAR_STYLESHEET_RE.replace_all(html, "");
    PLAYBACK_SCRIPT_RE.replace_all(&html, "").into_owned()
}

/// Removes `<!-- saved from url=(NNNN)... -->`.
pub fn strip_provenance_comment(html: &str) -> String {
    PROVENANCE_COMMENT_RE.replace_all(html, "").into_owned()
}

/// Drops a `style` attribute carrying `--wm-toolbar-height` from the `<html>`
/// start tag and keeps the rest of the tag.
pub fn strip_toolbar_height(html: &str) -> String {
    TOOLBAR_HEIGHT_STYLE_RE.replace_all(html, "${1}").into_owned()
}
