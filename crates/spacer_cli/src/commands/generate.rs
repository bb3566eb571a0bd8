//! Generate command - Write utility-class files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use spacer_core::{ClassGenerator, ConfigLoader};

use super::{report_validation_error, ConfigArgs};
use crate::ExitCodes;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Directory the files are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Output file stem, overriding `filename` from the config
    #[arg(short, long)]
    pub filename: Option<String>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn execute(args: GenerateArgs) -> Result<u8> {
    info!("Loading config from {}", args.config.config.display());
    let raw = ConfigLoader::load(&args.config.config)?;

    let mut generator = match ClassGenerator::from_raw(&raw) {
        Ok(generator) => generator,
        Err(e) => {
            report_validation_error(&e);
            return Ok(ExitCodes::VALIDATION_FAILURE);
        }
    };

    if let Some(filename) = args.filename {
        generator = generator.with_filename(filename);
    }

    if args.dry_run {
        for file in generator.generate()? {
            let path = generator.output_path(&args.out_dir, file.file_type);
            println!("==> {} <==", path.display());
            println!("{}", file.contents);
        }
        return Ok(ExitCodes::SUCCESS);
    }

    let written = generator
        .run(&args.out_dir)
        .await
        .with_context(|| format!("Failed to write class files to {}", args.out_dir.display()))?;

    info!(
        "Wrote {} file(s) to {}",
        written.len(),
        args.out_dir.display()
    );

    Ok(ExitCodes::SUCCESS)
}
