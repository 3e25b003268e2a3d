//! A small on-disk replay mirror used by the integration tests.

use std::fs;
use std::path::Path;

use wayclean_core::config::MirrorConfig;

pub const SITE: &str = "help.example.app";

pub fn config() -> MirrorConfig {
    MirrorConfig {
        site_host: SITE.to_string(),
        ..MirrorConfig::default()
    }
}

pub fn write(root: &Path, rel: &str, body: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, body).unwrap();
}

pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn replay_page(original_url: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<!-- saved from url=(0042){url} -->\n",
            "<html lang=\"en\" style=\"--wm-toolbar-height: 67px;\"><head>",
            "<script src=\"//archive.org/includes/athena.js\" type=\"text/javascript\"></script>\n",
            "<script type=\"text/javascript\">\n  __wm.init(\"https://web.archive.org/web\");\n</script>\n",
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"https://web.archive.org/_static/css/banner-styles.css?v=1\" />\n",
            "<!-- End Wayback Rewrite JS Include -->\n",
            "<title>page</title>\n",
            "</head><body>\n",
            "<!-- BEGIN WAYBACK TOOLBAR INSERT -->\n",
            "<div id=\"wm-ipp-base\" lang=\"en\"><div id=\"wm-ipp-print\">The Wayback Machine</div></div>\n",
            "<!-- END WAYBACK TOOLBAR INSERT -->\n",
            "{body}\n",
            "</body></html>"
        ),
        url = original_url,
        body = body
    )
}

/// Writes:
/// - `index.html`            saved from `/`
/// - `docs/guide.html`       saved from `/Docs/Guide/`
/// - `docs/guide_files/`     one referenced stylesheet, one referenced image
///                            (via the stylesheet), one orphan script
/// - `a/b.html`              saved from `/A/B`, links to guide, faq (unmapped),
///                            an external replay link and a fragment
pub fn build(root: &Path) {
    write(
        root,
        "index.html",
        &replay_page(
            "https://help.example.app/",
            r#"<a href="https://web.archive.org/web/20230115000000/https://help.example.app/Docs/Guide/">Guide</a>"#,
        ),
    );
    write(
        root,
        "docs/guide.html",
        &replay_page(
            "https://help.example.app/Docs/Guide/",
            concat!(
                r#"<link rel="stylesheet" href="guide_files/site.css">"#,
                r#"<a href="/">Home</a>"#
            ),
        ),
    );
    write(
        root,
        "docs/guide_files/site.css",
        "body{background:url(\"bg.png\")}",
    );
    write(root, "docs/guide_files/bg.png", "png");
    write(root, "docs/guide_files/unused.js", "js");
    write(
        root,
        "a/b.html",
        &replay_page(
            "https://help.example.app/A/B",
            concat!(
                r#"<a href="https://help.example.app/Docs/Guide/">Guide</a>"#,
                r#"<a href="https://help.example.app/faq">FAQ</a>"#,
                r#"<a href="https://web.archive.org/web/20230115000000/https://github.com/org">GH</a>"#,
                r##"<a href="#section">Section</a>"##
            ),
        ),
    );
}
