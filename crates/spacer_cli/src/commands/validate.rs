//! Validate command - Check a config without generating anything.

use anyhow::Result;
use clap::Args;
use tracing::info;

use spacer_core::{ConfigLoader, ConfigValidator};

use super::{report_validation_error, ConfigArgs};
use crate::ExitCodes;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub async fn execute(args: ValidateArgs) -> Result<u8> {
    info!("Validating config: {}", args.config.config.display());
    let raw = ConfigLoader::load(&args.config.config)?;

    match ConfigValidator::validate(&raw) {
        Ok(config) => {
            println!("✅ Config is valid");
            println!(
                "   {} spacers, {} properties, {} options → {}",
                config.spacers.len(),
                config.properties.len(),
                config.options.len(),
                config
                    .file_types
                    .iter()
                    .map(|t| format!("{}.{}", config.filename, t.extension()))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            Ok(ExitCodes::SUCCESS)
        }
        Err(e) => {
            report_validation_error(&e);
            Ok(ExitCodes::VALIDATION_FAILURE)
        }
    }
}
