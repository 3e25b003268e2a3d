//! Exit statuses returned by command handlers on small temp mirrors.

use crate::cli::commands::{run_clean, run_map, run_prune, run_verify};
use crate::cli::{EXIT_BROKEN_LINKS, EXIT_OK};
use std::fs;
use std::path::Path;
use wayclean_core::config::MirrorConfig;
use wayclean_core::error::MirrorError;

fn write(root: &Path, rel: &str, body: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, body).unwrap();
}

#[test]
fn verify_reports_broken_links_status() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "index.html", r#"<a href="docs/missing.html">m</a>"#);
    let code = run_verify(dir.path(), &MirrorConfig::default(), false).unwrap();
    assert_eq!(code, EXIT_BROKEN_LINKS);

    let code = run_verify(dir.path(), &MirrorConfig::default(), true).unwrap();
    assert_eq!(code, EXIT_BROKEN_LINKS);
}

#[test]
fn verify_ok_when_targets_exist() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "index.html", r#"<a href="docs/guide.html">g</a>"#);
    write(dir.path(), "docs/guide.html", "<p>guide</p>");
    let code = run_verify(dir.path(), &MirrorConfig::default(), false).unwrap();
    assert_eq!(code, EXIT_OK);
}

#[test]
fn clean_without_pages_is_no_pages_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "notes.txt", "x");
    let err = run_clean(dir.path(), &MirrorConfig::default(), false, false).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MirrorError>(),
        Some(MirrorError::NoPages { .. })
    ));
}

#[test]
fn prune_dry_run_and_map_succeed() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "index.html", r#"<link href="index_files/site.css">"#);
    write(dir.path(), "index_files/site.css", "body{}");
    write(dir.path(), "index_files/unused.js", "x");

    let cfg = MirrorConfig::default();
    assert_eq!(run_prune(dir.path(), &cfg, false, false).unwrap(), EXIT_OK);
    assert!(dir.path().join("index_files/unused.js").exists());
    assert_eq!(run_map(dir.path(), &cfg, true).unwrap(), EXIT_OK);
}

#[test]
fn clean_json_with_empty_mapping_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "index.html", "<p>no provenance</p>");
    let code = run_clean(dir.path(), &MirrorConfig::default(), false, true).unwrap();
    assert_eq!(code, EXIT_OK);
}
