//! Check CLI command: both validation tracks in one run.

// CLI commands are allowed to use println! for output
#![allow(clippy::print_stdout)]

use crate::cli::{cmd_ownership, cmd_validate};
use crate::config::{ConfguardConfig, RepoSpec};
use std::path::PathBuf;

/// Runs the schema track followed by the ownership track.
///
/// Both tracks always run to completion; a failing document never hides
/// ownership problems. Returns whether both tracks succeeded.
pub fn cmd_check(
    config: &ConfguardConfig,
    root: Option<PathBuf>,
    overrides: &[RepoSpec],
    show_skipped: bool,
) -> bool {
    let schema_ok = cmd_validate(config, root, show_skipped);
    println!();
    let ownership_ok = cmd_ownership(config, overrides);

    schema_ok && ownership_ok
}
