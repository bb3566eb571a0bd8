//! spacer CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or unreadable config
//! - 3: Validation failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "spacer=debug"
    } else if cli.quiet {
        "spacer=warn"
    } else {
        "spacer=info"
    };

    // "spacer" also matches the spacer_core target
    let filter = EnvFilter::from_default_env()
        .add_directive(level.parse().unwrap())
        .add_directive("warn".parse().unwrap());

    // Logging may already be initialized when embedded; keep going either way.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::execute(args).await,
        Commands::Validate(args) => commands::validate::execute(args).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    use spacer_core::GeneratorError;

    match e.downcast_ref::<GeneratorError>() {
        Some(GeneratorError::Validation(_)) => ExitCodes::VALIDATION_FAILURE,
        Some(
            GeneratorError::ConfigNotFound(_)
            | GeneratorError::UnsupportedConfigFormat(_)
            | GeneratorError::Json(_)
            | GeneratorError::Yaml(_)
            | GeneratorError::Toml(_),
        ) => ExitCodes::INVALID_ARGS,
        _ => ExitCodes::GENERAL_ERROR,
    }
}
