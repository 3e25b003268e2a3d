//! CLI for wayclean.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use wayclean_core::config;

use commands::{run_clean, run_completions, run_map, run_prune, run_verify};

/// Exit status for success.
pub const EXIT_OK: i32 = 0;
/// Exit status for any unexpected error.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status when the mirror root contains no pages.
pub const EXIT_NO_PAGES: i32 = 2;
/// Exit status when `verify` finds broken links.
pub const EXIT_BROKEN_LINKS: i32 = 3;

/// Top-level CLI for wayclean.
#[derive(Debug, Parser)]
#[command(name = "wayclean")]
#[command(about = "wayclean: turn a Wayback Machine mirror into a clean, self-linked local copy", long_about = None)]
pub struct Cli {
    /// Mirror root directory (defaults to the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file to use instead of ~/.config/wayclean/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Strip archive markup and rewrite archived links in every page, in place.
    Clean {
        /// Report what would change without writing any file.
        #[arg(long)]
        dry_run: bool,
    },

    /// List (or delete with --apply) unreferenced files in asset-bundle directories.
    Prune {
        /// Actually delete the unreferenced files. Without it this is a dry run.
        #[arg(long)]
        apply: bool,
    },

    /// Report local page links whose target file does not exist.
    Verify,

    /// Print the original-path to local-file mapping built from provenance comments.
    Map,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    /// Parses arguments, runs the command and returns the process exit status.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell, &mut Cli::command());
            return Ok(EXIT_OK);
        }

        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let root = match cli.root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };

        match cli.command {
            CliCommand::Clean { dry_run } => run_clean(&root, &cfg, dry_run, cli.json),
            CliCommand::Prune { apply } => run_prune(&root, &cfg, apply, cli.json),
            CliCommand::Verify => run_verify(&root, &cfg, cli.json),
            CliCommand::Map => run_map(&root, &cfg, cli.json),
            CliCommand::Completions { .. } => Ok(EXIT_OK),
        }
    }
}

#[cfg(test)]
mod tests;
