//! rulegate - Select the security rules a static-analysis scan runs
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rulegate::cli::{self, exit_codes, Cli, Commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_codes::INVALID_ARGS
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result: anyhow::Result<i32> = match cli.command {
        Commands::Rules(args) => cli::commands::rules::execute(args, config).map_err(Into::into),
        Commands::Init(args) => cli::commands::init::execute(args),
        Commands::GenerateMan(args) => {
            cli::commands::generate_man::execute(args).map_err(Into::into)
        }
    };

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
