//! Status CLI command.

// CLI commands are allowed to use println! for output
#![allow(clippy::print_stdout)]

use crate::config::ConfguardConfig;
use crate::models::CATEGORIES;
use crate::services::{OWNERSHIP_FILE, collect_category_files};

/// Shows which category roots exist and how many governed files each
/// holds, plus ownership declaration presence per repository.
pub fn cmd_status(config: &ConfguardConfig) {
    println!("Confguard Status");
    println!("================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Config root: {}", config.config_root.display());
    println!();
    println!("Categories:");
    for category in CATEGORIES {
        let root = config.config_root.join(category.root);
        if root.is_dir() {
            let count = collect_category_files(&config.config_root, category).len();
            println!("  {}/: {count} file(s)", category.name);
        } else {
            println!("  {}/: absent", category.name);
        }
    }

    println!();
    println!("Ownership declarations:");
    for repo in &config.repos {
        let ownership_path = repo.path.join(OWNERSHIP_FILE);
        let state = if ownership_path.exists() {
            "present"
        } else {
            "missing"
        };
        println!("  {} ({}): {state}", repo.name, repo.path.display());
    }

    println!();
    println!("Use 'confguard check' to run both validation tracks");
}
