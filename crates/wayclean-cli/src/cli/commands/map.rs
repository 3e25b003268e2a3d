//! `wayclean map` – show the provenance mapping.

use anyhow::Result;
use std::path::Path;
use wayclean_core::clean;
use wayclean_core::config::MirrorConfig;

use super::print_json;
use crate::cli::EXIT_OK;

pub fn run_map(root: &Path, cfg: &MirrorConfig, json: bool) -> Result<i32> {
    let scan = clean::scan_mirror(root, cfg)?;
    if json {
        print_json(&scan.mapping)?;
        return Ok(EXIT_OK);
    }

    if scan.mapping.is_empty() {
        println!("No saved-from comments found in {} pages.", scan.pages.len());
        return Ok(EXIT_OK);
    }
    let width = scan.mapping.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, local) in scan.mapping.iter() {
        println!("{key:<width$}  {local}");
    }
    println!(
        "{} of {} pages mapped.",
        scan.mapping.len(),
        scan.pages.len()
    );
    Ok(EXIT_OK)
}
