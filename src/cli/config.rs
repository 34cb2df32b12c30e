//! Config CLI command.

// CLI commands are allowed to use println! for output
#![allow(clippy::print_stdout)]

use crate::config::ConfguardConfig;
use crate::observability::LogFormat;

/// Shows the resolved configuration.
pub fn cmd_config(config: &ConfguardConfig, show: bool) {
    if show {
        println!("Current Configuration");
        println!("=====================");
        println!();
        println!("Config Root: {}", config.config_root.display());
        println!();
        println!("Repositories:");
        for repo in &config.repos {
            println!("  {}: {}", repo.name, repo.path.display());
        }
        println!();
        println!("Logging:");
        let format = match config.logging.format {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        };
        println!("  Format: {format}");
        println!(
            "  Filter: {}",
            config.logging.filter.as_deref().unwrap_or("(default)")
        );
    } else {
        println!("Use --show to display configuration");
    }
}
