//! # CLI Module
//!
//! This module defines the command-line interface for rulegate using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rules` | Show which rules are active, suppressed or disabled |
//! | `init` | Write a default configuration file |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//!
//! ## Examples
//!
//! ```bash
//! # Everything except G104
//! rulegate rules --exclude G104
//!
//! # Only the injection checks, keeping the rest visible as suppressed
//! rulegate rules --include G201,G202,G203,G204 --track-suppressions --format json
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{GenerateManArgs, InitArgs, RulesArgs};

/// rulegate - Select the security rules a scan runs
#[derive(Parser, Debug)]
#[command(name = "rulegate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "RULEGATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the rule selection for the given filters
    Rules(RulesArgs),

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Generate man page (hidden, for packaging)
    #[command(hide = true)]
    GenerateMan(GenerateManArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rules_filters() {
        let cli = Cli::try_parse_from([
            "rulegate",
            "-vv",
            "rules",
            "--include",
            "G101,G102",
            "--exclude",
            "G102",
            "--track-suppressions",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Rules(args) => {
                assert_eq!(args.include, vec!["G101", "G102"]);
                assert_eq!(args.exclude, vec!["G102"]);
                assert!(args.track_suppressions);
                assert_eq!(args.format, commands::OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["rulegate", "rules", "--format", "sarif"]).is_err());
    }
}
