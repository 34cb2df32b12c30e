//! Validate CLI command.

// CLI commands are allowed to use println! for output
#![allow(clippy::print_stdout)]

use crate::config::ConfguardConfig;
use crate::rendering::render_validation_report;
use crate::services::{TypedModelEngine, ValidationOrchestrator};
use std::path::PathBuf;

/// Runs the schema validation track and prints its report.
///
/// Returns whether every governed document passed.
pub fn cmd_validate(config: &ConfguardConfig, root: Option<PathBuf>, show_skipped: bool) -> bool {
    let root = root.unwrap_or_else(|| config.config_root.clone());
    let mut orchestrator = ValidationOrchestrator::new(root, TypedModelEngine::new());
    let report = orchestrator.run();

    print!("{}", render_validation_report(&report, show_skipped));
    report.is_success()
}
