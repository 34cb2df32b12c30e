//! Binary entry point for confguard.
//!
//! This binary provides the CLI interface for the confguard governance
//! validator.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{CommandFactory, Parser, Subcommand};
use confguard::cli::{cmd_check, cmd_config, cmd_ownership, cmd_status, cmd_validate};
use confguard::config::{ConfguardConfig, RepoSpec};
use confguard::observability;
use std::path::PathBuf;
use std::process::ExitCode;

/// Confguard - configuration governance validator.
#[derive(Parser)]
#[command(name = "confguard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (shows skipped documents and debug logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "CONFGUARD_CONFIG_PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Validate governed config documents against their schemas.
    Validate {
        /// Root of the configuration repository (default: configured root).
        root: Option<PathBuf>,
    },

    /// Validate per-repository ownership declarations.
    Ownership {
        /// Repository override as NAME=PATH (repeatable).
        #[arg(long = "repo", value_name = "NAME=PATH")]
        repos: Vec<String>,
    },

    /// Run both validation tracks.
    Check {
        /// Root of the configuration repository (default: configured root).
        root: Option<PathBuf>,

        /// Repository override as NAME=PATH (repeatable).
        #[arg(long = "repo", value_name = "NAME=PATH")]
        repos: Vec<String>,
    },

    /// Show category roots and ownership declaration presence.
    Status,

    /// Manage configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command. The boolean is the validation verdict:
/// `false` means findings were recorded and the process exits non-zero.
fn run_command(cli: Cli, config: &ConfguardConfig) -> Result<bool, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Validate { root } => Ok(cmd_validate(config, root, cli.verbose)),

        Commands::Ownership { repos } => {
            let overrides = parse_repo_overrides(&repos)?;
            Ok(cmd_ownership(config, &overrides))
        },

        Commands::Check { root, repos } => {
            let overrides = parse_repo_overrides(&repos)?;
            Ok(cmd_check(config, root, &overrides, cli.verbose))
        },

        Commands::Status => {
            cmd_status(config);
            Ok(true)
        },

        Commands::Config { show } => {
            cmd_config(config, show);
            Ok(true)
        },

        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "confguard", &mut std::io::stdout());
            Ok(true)
        },
    }
}

/// Parses `--repo NAME=PATH` overrides.
fn parse_repo_overrides(pairs: &[String]) -> confguard::Result<Vec<RepoSpec>> {
    pairs.iter().map(|pair| RepoSpec::parse(pair)).collect()
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> confguard::Result<ConfguardConfig> {
    // If a path is provided (flag or CONFGUARD_CONFIG_PATH), load from that file
    if let Some(config_path) = path {
        if !config_path.trim().is_empty() {
            return ConfguardConfig::load_from_file(std::path::Path::new(config_path));
        }
    }

    // Otherwise, load from default location
    Ok(ConfguardConfig::load_default())
}
