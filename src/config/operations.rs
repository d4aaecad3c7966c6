//! Config loading and parsing.

use super::model::RawConfig;
use super::snapshot::{Config, LoadedConfig};
use super::types::{ConfigFormat, LogFile};
use crate::error::{MinamoError, Result};
use crate::{git, paths};
use chrono::Local;
use std::path::Path;

impl RawConfig {
    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| MinamoError::UserError(format!("failed to parse config JSON: {}", e)))
    }

    /// Parse a YAML config document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| MinamoError::UserError(format!("failed to parse config YAML: {}", e)))
    }

    /// Parse a document in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => Self::from_json(content),
            ConfigFormat::Yaml => Self::from_yaml(content),
        }
    }

    /// Read and parse a config file, picking the format from its extension.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MinamoError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content, ConfigFormat::from_path(path))
    }
}

impl Config {
    /// Load a config file and resolve it into a snapshot.
    ///
    /// Steps: read and parse the document, record the absolute file path and
    /// base name, capture the current time, then ask git for the project's
    /// revision.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadedConfig)` - The snapshot; `revision_error` is set when
    ///   `git rev-parse HEAD` failed (the revision is then empty)
    /// * `Err(MinamoError::UserError)` - The file could not be read or parsed
    pub fn load(config_path: &str, log_file: LogFile) -> Result<LoadedConfig> {
        let raw = RawConfig::read(config_path)?;
        let file_path = paths::resolve(config_path);
        let now = Local::now();

        let project_dir = paths::resolve(&raw.project_path);
        let (revision, revision_error) = match git::head_revision(&project_dir) {
            Ok(revision) => (revision, None),
            Err(e) => (String::new(), Some(e)),
        };

        log::debug!(
            "loaded config '{}' (project '{}', revision '{}')",
            file_path.display(),
            project_dir.display(),
            revision
        );

        Ok(LoadedConfig {
            config: Config::from_raw(raw, file_path, log_file, now, revision),
            revision_error,
        })
    }
}
