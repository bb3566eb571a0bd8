//! Config file loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GeneratorError, GeneratorResult};
use crate::models::RawConfig;

/// Loader for spacer config documents.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read a config file, picking the parser from its extension.
    pub fn load(path: impl AsRef<Path>) -> GeneratorResult<RawConfig> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(GeneratorError::ConfigNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        debug!("Reading config from {:?}", path);
        let content = fs::read_to_string(path)?;

        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            "toml" => Self::from_toml_str(&content),
            _ => Err(GeneratorError::UnsupportedConfigFormat(path.to_path_buf())),
        }
    }

    pub fn from_json_str(content: &str) -> GeneratorResult<RawConfig> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> GeneratorResult<RawConfig> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> GeneratorResult<RawConfig> {
        Ok(toml::from_str(content)?)
    }
}
