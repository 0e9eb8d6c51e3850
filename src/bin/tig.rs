//! Tig CLI Binary
//!
//! Command-line interface for the tig version control system.

use clap::Parser;
use std::process;
use tig::cli::{exit_code, map_error, Cli, RunContext};
use tig::logging::{init_logging, LoggingConfig};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("tig starting");

    let context = RunContext::new(cli.repo.clone(), cli.config.clone());
    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!(kind = ?e.kind(), "Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(exit_code(&e));
        }
    }
}

/// Build logging configuration from CLI args and the config files.
/// Logging stays off unless `--verbose` or `--log-level` asks for it;
/// CLI flags override the configured values.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let context = RunContext::new(cli.repo.clone(), cli.config.clone());
    let mut config = context
        .load_config()
        .map(|c| c.logging)
        .unwrap_or_default();

    config.enabled = cli.verbose || cli.log_level.is_some();
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
