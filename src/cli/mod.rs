//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. Each returns the process exit code
//! for its subcommand.

mod analyze;
mod metadata;
mod pages;
mod report;

pub use analyze::run_analyze;
pub use metadata::{gate_exit_code, run_metadata};
pub use pages::run_pages;
pub use report::run_report;

// Re-export config types used by handlers
pub use crate::config::AppConfig;
