//! Error types for config validation and class generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// A configuration rule that failed.
///
/// Validation is fail-fast, so at most one of these is ever reported for a
/// given configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("properties in config is null or empty")]
    MissingProperties,

    #[error("properties in config must be 'margin' or 'padding', got '{0}'")]
    InvalidProperty(String),

    #[error("options must not be empty or missing from config")]
    MissingOptions,

    #[error("option '{option}' is not valid, must be one of {valid}")]
    InvalidOption { option: String, valid: String },

    #[error("spacers must not be empty or missing from config")]
    MissingSpacers,

    #[error("spacer '{0}' must be a map of breakpoints")]
    InvalidSpacer(String),

    #[error("spacer '{0}' must have a 'default' option")]
    MissingDefaultBreakpoint(String),

    #[error(
        "spacer breakpoint value for '{spacer}.{breakpoint}' must be a string with px at the end

valid example:
\"spacers\": {{
    \"L\": {{
        \"default\": \"22px\"
    }}
}}

invalid example:
\"spacers\": {{
    \"L\": {{
        \"default\": 22
    }}
}}"
    )]
    NonStringSpacerValue { spacer: String, breakpoint: String },

    #[error(
        "spacer breakpoint value '{value}' for '{spacer}.{breakpoint}' must have px at the end of the string

valid example:
\"spacers\": {{
    \"L\": {{
        \"default\": \"22px\"
    }}
}}"
    )]
    InvalidSpacerUnit {
        spacer: String,
        breakpoint: String,
        value: String,
    },

    #[error("file_types in config is null or empty")]
    MissingFileTypes,

    #[error("file_type '{file_type}' is not valid, must be one of {valid}")]
    InvalidFileType { file_type: String, valid: String },
}

impl ValidationError {
    /// Name reported alongside the message on the console.
    pub fn name(&self) -> &'static str {
        "ValidationError"
    }

    /// The configuration field whose rule failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingProperties | Self::InvalidProperty(_) => "properties",
            Self::MissingOptions | Self::InvalidOption { .. } => "options",
            Self::MissingSpacers
            | Self::InvalidSpacer(_)
            | Self::MissingDefaultBreakpoint(_)
            | Self::NonStringSpacerValue { .. }
            | Self::InvalidSpacerUnit { .. } => "spacers",
            Self::MissingFileTypes | Self::InvalidFileType { .. } => "file_types",
        }
    }
}

/// Errors that can occur while loading config or generating class files.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Config validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown spacer: {0}")]
    UnknownSpacer(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Unsupported config format for {0}, expected .json, .yaml, .yml or .toml")]
    UnsupportedConfigFormat(PathBuf),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
