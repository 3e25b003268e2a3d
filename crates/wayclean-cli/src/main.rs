use wayclean_core::error::MirrorError;
use wayclean_core::logging;

mod cli;

use crate::cli::{CliCommand, EXIT_FAILURE, EXIT_NO_PAGES};

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("wayclean error: {:#}", err);
            let code = match err.downcast_ref::<MirrorError>() {
                Some(MirrorError::NoPages { .. }) => EXIT_NO_PAGES,
                _ => EXIT_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
