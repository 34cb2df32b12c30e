//! Ownership CLI command.

// CLI commands are allowed to use println! for output
#![allow(clippy::print_stdout)]

use crate::config::{ConfguardConfig, RepoSpec};
use crate::rendering::render_ownership_report;
use crate::services::OwnershipValidator;

/// Runs the ownership validation track and prints its report.
///
/// `overrides` replaces the configured repository list when non-empty.
/// Returns whether every repository is valid.
pub fn cmd_ownership(config: &ConfguardConfig, overrides: &[RepoSpec]) -> bool {
    let specs = if overrides.is_empty() {
        config.repos.as_slice()
    } else {
        overrides
    };
    let report = OwnershipValidator::validate_all(specs);

    print!("{}", render_ownership_report(&report));
    report.all_valid()
}
