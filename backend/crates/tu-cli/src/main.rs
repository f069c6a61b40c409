//! tu - token user inspector
//!
//! Builds a user from a decoded ID-token claim set and shows how profile
//! payloads populate it.
//!
//! # Examples
//!
//! ```bash
//! # Show a user with profile properties applied
//! tu show --claims claims.json --profile profile.json
//!
//! # Populate the profile lazily from a user-info document
//! tu show --claims claims.json --user-info userinfo.json
//!
//! # List the property table
//! tu properties
//! ```

use tu_cli::{Cli, logger, run};
use tu_config::{Config, LogLevel, LoggingConfig};

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let logging = LoggingConfig {
        level: cli
            .log_level
            .as_deref()
            .map(LogLevel::parse_lenient)
            .unwrap_or(config.logging.level),
        ..config.logging.clone()
    };
    if let Err(e) = logger::initialize(&logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    match run(cli.command, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
