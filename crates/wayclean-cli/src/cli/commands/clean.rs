//! `wayclean clean` – sanitize and rewrite every page in place.

use anyhow::Result;
use std::path::Path;
use wayclean_core::clean;
use wayclean_core::config::MirrorConfig;

use super::print_json;
use crate::cli::EXIT_OK;

pub fn run_clean(root: &Path, cfg: &MirrorConfig, dry_run: bool, json: bool) -> Result<i32> {
    let summary = clean::clean_mirror(root, cfg, dry_run)?;
    if summary.mapped == 0 {
        eprintln!("warning: no mapping could be built from saved-from comments; no links rewritten.");
    }
    if json {
        print_json(&summary)?;
        return Ok(EXIT_OK);
    }

    if summary.skipped > 0 {
        eprintln!(
            "warning: {} page(s) are not valid UTF-8 and were left unchanged.",
            summary.skipped
        );
    }
    let ext = cfg.page_extension.to_uppercase();
    if dry_run {
        println!(
            "Processed {} {ext} files. Would modify {} (dry run).",
            summary.scanned, summary.modified
        );
    } else {
        println!(
            "Processed {} {ext} files. Modified {}.",
            summary.scanned, summary.modified
        );
    }
    Ok(EXIT_OK)
}
