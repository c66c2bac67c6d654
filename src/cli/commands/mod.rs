//! CLI commands module

pub mod generate_man;
pub mod init;
pub mod rules;

use clap::Args;
use std::path::PathBuf;

/// Arguments for the rules command
#[derive(Args, Debug, Default)]
pub struct RulesArgs {
    /// Run only these rule IDs (comma separated)
    #[arg(short, long, value_delimiter = ',', value_name = "IDS")]
    pub include: Vec<String>,

    /// Skip these rule IDs (comma separated)
    #[arg(short, long, value_delimiter = ',', value_name = "IDS")]
    pub exclude: Vec<String>,

    /// Keep suppressed rules in the list and flag them instead of dropping them
    #[arg(long)]
    pub track_suppressions: bool,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the generate-man command
#[derive(Args, Debug)]
pub struct GenerateManArgs {
    /// Output directory for the man page
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,
}

/// Output format for the rules command
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}
