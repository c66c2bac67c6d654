//! Init command - Initialize a new configuration file

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use super::InitArgs;
use crate::cli::exit_codes;
use crate::config::loader::CONFIG_FILENAME;
use crate::config::Config;

pub fn execute(args: InitArgs) -> Result<i32> {
    write_config(Path::new(CONFIG_FILENAME), args.force)
}

fn write_config(config_path: &Path, force: bool) -> Result<i32> {
    if config_path.exists() && !force {
        eprintln!(
            "{} Configuration file already exists. Use --force to overwrite.",
            "Error:".red().bold()
        );
        return Ok(exit_codes::ERROR);
    }

    let config_content = Config::default()
        .to_toml()
        .context("Failed to serialize default configuration")?;
    fs::write(config_path, &config_content).with_context(|| {
        format!(
            "Failed to write configuration file '{}'",
            config_path.display()
        )
    })?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        config_path.display().to_string().cyan()
    );

    println!("\nNext steps:");
    println!(
        "  1. List rule IDs to skip under {} in {}",
        "[rules] exclude".cyan(),
        CONFIG_FILENAME.cyan()
    );
    println!("  2. Run {} to review the selection", "rulegate rules".cyan());

    Ok(exit_codes::SUCCESS)
}
