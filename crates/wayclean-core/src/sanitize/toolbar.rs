//! Wayback toolbar removal.
//!
//! Saved replay pages carry the toolbar either inside an explicit
//! `BEGIN/END WAYBACK TOOLBAR INSERT` comment pair or as a bare
//! `<div id="wm-ipp-base">` container. The comment pair is removed first;
//! any container still present afterwards is cut by [`strip_toolbar_container`].

use regex::Regex;
use std::sync::LazyLock;

const CONTAINER_MARKER: &str = r#"id="wm-ipp-base""#;
const PRINT_MARKER: &str = r#"id="wm-ipp-print""#;
const DIV_OPEN: &str = "<div";
const DIV_CLOSE: &str = "</div>";

static TOOLBAR_INSERT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--\s*BEGIN WAYBACK TOOLBAR INSERT\s*-->.*?<!--\s*END WAYBACK TOOLBAR INSERT\s*-->\s*",
    )
    .expect("TOOLBAR_INSERT_RE: hardcoded regex is valid")
});

/// Removes the comment-delimited toolbar insert, then any leftover container.
pub fn strip_toolbar(html: &str) -> String {
    let html = TOOLBAR_INSERT_RE.replace_all(html, "");
    strip_toolbar_container(&html)
}

/// Cuts from the `<div` that opens the `wm-ipp-base` container through the
/// first `</div>` following the `wm-ipp-print` element.
///
/// Nested `<div>`s are not balanced: the cut ends at the first closing tag
/// after the print marker, so whatever closing tags of the container remain
/// after that point are left in the document. Nothing is removed unless all
/// three anchors are found.
pub fn strip_toolbar_container(html: &str) -> String {
    let mut out = html.to_string();
    while let Some((start, end)) = toolbar_container_span(&out) {
        out.replace_range(start..end, "");
    }
    out
}

fn toolbar_container_span(html: &str) -> Option<(usize, usize)> {
    let marker = html.find(CONTAINER_MARKER)?;
    let open = html[..marker].rfind(DIV_OPEN)?;
    let print = marker + html[marker..].find(PRINT_MARKER)?;
    let close = print + html[print..].find(DIV_CLOSE)?;
    Some((open, close + DIV_CLOSE.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_comment_delimited_insert() {
        let html = concat!(
            "<body>\n",
            "<!-- BEGIN WAYBACK TOOLBAR INSERT -->\n",
            "<div id=\"wm-ipp-base\" lang=\"en\"><div id=\"wm-ipp-print\">x</div></div>\n",
            "<!-- END WAYBACK TOOLBAR INSERT -->\n",
            "<main>docs</main></body>"
        );
        let out = strip_toolbar(html);
        assert_eq!(out, "<body>\n<main>docs</main></body>");
        assert!(!out.contains("WAYBACK TOOLBAR INSERT"));
    }

    #[test]
    fn removes_bare_container_through_next_close_after_print() {
        let html = concat!(
            "<body><div id=\"wm-ipp-base\" style=\"height:67px\">",
            "<div id=\"wm-ipp-print\">The Wayback Machine</div>",
            "<div class=\"content\">kept</div></body>"
        );
        assert_eq!(
            strip_toolbar(html),
            "<body><div class=\"content\">kept</div></body>"
        );
    }

    #[test]
    fn nested_container_leaves_trailing_close_tags() {
        let html = concat!(
            "<div id=\"wm-ipp-base\"><div id=\"wm-ipp\">",
            "<div id=\"wm-ipp-print\">p</div>",
            "</div></div><p>after</p>"
        );
        assert_eq!(strip_toolbar(html), "</div></div><p>after</p>");
    }

    #[test]
    fn container_without_print_marker_is_kept() {
        let html = "<div id=\"wm-ipp-base\">toolbar</div><p>x</p>";
        assert_eq!(strip_toolbar(html), html);
    }

    #[test]
    fn no_toolbar_is_noop() {
        let html = "<body><p>plain</p></body>";
        assert_eq!(strip_toolbar(html), html);
    }
}
