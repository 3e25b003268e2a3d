pub mod config;
pub mod error;
pub mod logging;

// Rewriting core
pub mod provenance;
pub mod resolve;
pub mod rewrite;
pub mod sanitize;

// Batch passes over a mirror
pub mod clean;
pub mod prune;
pub mod references;
pub mod verify;
pub mod walk;
