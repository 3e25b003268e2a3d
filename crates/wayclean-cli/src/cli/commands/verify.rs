//! `wayclean verify` – report broken local page links.

use anyhow::Result;
use std::path::Path;
use wayclean_core::config::MirrorConfig;
use wayclean_core::verify;

use super::{display_relative, print_json};
use crate::cli::{EXIT_BROKEN_LINKS, EXIT_OK};

pub fn run_verify(root: &Path, cfg: &MirrorConfig, json: bool) -> Result<i32> {
    let report = verify::verify_links(root, cfg)?;
    let code = if report.is_clean() {
        EXIT_OK
    } else {
        EXIT_BROKEN_LINKS
    };

    if json {
        print_json(&report)?;
        return Ok(code);
    }

    if report.is_clean() {
        println!("No broken local links detected.");
    } else {
        println!("Broken local links found: {}", report.broken.len());
        for b in &report.broken {
            println!(
                " - {} -> {} (resolved: {})",
                b.page,
                b.reference,
                display_relative(root, &b.resolved)
            );
        }
    }
    Ok(code)
}
