//! CLI command definitions.
//!
//! This module defines the command structure for the spacer CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod generate;
pub mod validate;

/// spacer - spacing utility-class generator
#[derive(Parser)]
#[command(name = "spacer")]
#[command(version, about = "spacer - spacing utility-class generator")]
#[command(long_about = r#"
spacer reads a config describing spacing scale values, margin/padding
properties, directional options and breakpoints, and writes utility-class
stylesheets for every requested output format.

COMMANDS:
  generate  → Validate the config and write {filename}.{css,scss,less,json}
  validate  → Only validate the config

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or unreadable config
  3 - Validation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate utility-class files from a config
    Generate(generate::GenerateArgs),

    /// Validate a config without writing anything
    Validate(validate::ValidateArgs),
}

/// Config file location shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the config file (.json, .yaml, .yml or .toml)
    #[arg(short, long, default_value = "spacers.json", env = "SPACER_CONFIG")]
    pub config: PathBuf,
}

/// Print a validation failure the way every command reports it.
pub fn report_validation_error(error: &spacer_core::ValidationError) {
    println!("\n ========= \n{} -> ", error.name());
    println!("{}\n =========", error);
}
