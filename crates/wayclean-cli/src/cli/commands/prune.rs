//! `wayclean prune` – list or delete unreferenced asset-bundle files.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use wayclean_core::config::MirrorConfig;
use wayclean_core::prune::{self, PruneOutcome, PrunePlan};

use super::{display_relative, print_json};
use crate::cli::EXIT_OK;

#[derive(Serialize)]
struct PruneJson<'a> {
    plan: &'a PrunePlan,
    applied: Option<&'a PruneOutcome>,
}

pub fn run_prune(root: &Path, cfg: &MirrorConfig, apply: bool, json: bool) -> Result<i32> {
    let plan = prune::plan_prune(root, cfg)?;
    let outcome = if apply && !plan.unreferenced.is_empty() {
        Some(prune::apply_prune(&plan))
    } else {
        None
    };

    if json {
        print_json(&PruneJson {
            plan: &plan,
            applied: outcome.as_ref(),
        })?;
        return Ok(EXIT_OK);
    }

    println!(
        "Found {} files under *{} folders.",
        plan.candidates, cfg.asset_dir_suffix
    );
    println!(
        "Referenced: {}. Unreferenced: {}.",
        plan.referenced(),
        plan.unreferenced.len()
    );
    if plan.unreferenced.is_empty() {
        return Ok(EXIT_OK);
    }

    match outcome {
        None => {
            println!("Dry run (no deletions). Pass --apply to delete. Sample:");
            for path in plan.unreferenced.iter().take(cfg.dry_run_sample) {
                println!(" - {}", display_relative(root, path));
            }
        }
        Some(outcome) => {
            for failure in &outcome.failures {
                eprintln!(
                    "warning: failed to delete {}: {}",
                    display_relative(root, &failure.path),
                    failure.error
                );
            }
            println!("Deleted {} unreferenced files.", outcome.deleted);
        }
    }
    Ok(EXIT_OK)
}
