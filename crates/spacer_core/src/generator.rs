//! Class file generation.
//!
//! A [`ClassGenerator`] only exists for a validated config, so an invalid
//! config can never reach the emitters or the filesystem.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::emitter::Emitter;
use crate::error::{GeneratorError, GeneratorResult, ValidationError};
use crate::models::{FileType, RawConfig, SpacerConfig};
use crate::validator::ConfigValidator;

/// One rendered output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_type: FileType,
    pub contents: String,
}

/// Generates utility-class files from a validated config.
#[derive(Debug, Clone)]
pub struct ClassGenerator {
    config: SpacerConfig,
}

impl ClassGenerator {
    pub fn new(config: SpacerConfig) -> Self {
        Self { config }
    }

    /// Validate a raw config and build a generator for it.
    pub fn from_raw(raw: &RawConfig) -> Result<Self, ValidationError> {
        ConfigValidator::validate(raw).map(Self::new)
    }

    /// Replace the output file stem.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.config.filename = filename.into();
        self
    }

    pub fn config(&self) -> &SpacerConfig {
        &self.config
    }

    /// Render one output format.
    pub fn generate_format(&self, file_type: FileType) -> GeneratorResult<String> {
        let mut emitter =
            Emitter::for_file_type(file_type, &self.config.spacers, &self.config.options);

        for key in self.config.spacers.keys() {
            for &property in &self.config.properties {
                emitter.create_classes(key, property)?;
            }
        }

        debug!("Rendered {} classes", file_type);
        emitter.render()
    }

    /// Render every requested format, in config order.
    pub fn generate(&self) -> GeneratorResult<Vec<GeneratedFile>> {
        self.config
            .file_types
            .iter()
            .map(|&file_type| {
                Ok(GeneratedFile {
                    file_type,
                    contents: self.generate_format(file_type)?,
                })
            })
            .collect()
    }

    /// Path a format is written to: `{out_dir}/{filename}.{extension}`.
    pub fn output_path(&self, out_dir: &Path, file_type: FileType) -> PathBuf {
        out_dir.join(format!("{}.{}", self.config.filename, file_type.extension()))
    }

    /// Render every format and write the files into `out_dir`.
    ///
    /// Writes run concurrently and complete in any order. Existing files are
    /// overwritten. Every write runs to completion before the first failure
    /// is returned, so files that could be written are on disk either way.
    pub async fn run(&self, out_dir: impl AsRef<Path>) -> GeneratorResult<Vec<PathBuf>> {
        let out_dir = out_dir.as_ref();
        let files = self.generate()?;
        let paths: Vec<PathBuf> = files
            .iter()
            .map(|file| self.output_path(out_dir, file.file_type))
            .collect();

        let mut writes = JoinSet::new();
        for (file, path) in files.into_iter().zip(paths.iter().cloned()) {
            writes.spawn(async move {
                tokio::fs::write(&path, file.contents)
                    .await
                    .map_err(|source| GeneratorError::Write {
                        path: path.clone(),
                        source,
                    })?;
                Ok::<_, GeneratorError>(file.file_type)
            });
        }

        // Drain the set: returning early would drop it and abort pending writes.
        let mut first_error = None;
        while let Some(joined) = writes.join_next().await {
            match joined.map_err(GeneratorError::from).and_then(|written| written) {
                Ok(file_type) => info!("Complete for {} file!", file_type),
                Err(e) => {
                    warn!("{}", e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(paths),
        }
    }
}
