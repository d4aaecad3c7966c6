//! The resolved, immutable configuration snapshot.

use super::model::RawConfig;
use super::types::{LogFile, config_base_name};
use crate::error::MinamoError;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Fully loaded configuration.
///
/// Built exactly once from a [`RawConfig`] plus the values derived while
/// loading (config file location, timestamp, revision, log target). There
/// are no setters; everything downstream reads through `&Config`.
#[derive(Debug, Clone)]
pub struct Config {
    raw: RawConfig,
    file_path: PathBuf,
    file_name: String,
    now: DateTime<Local>,
    revision: String,
    log_file: LogFile,
}

impl Config {
    /// Attach the derived fields to a parsed document.
    ///
    /// `file_path` should already be absolute; the base name is taken from it.
    pub fn from_raw(
        raw: RawConfig,
        file_path: PathBuf,
        log_file: LogFile,
        now: DateTime<Local>,
        revision: String,
    ) -> Self {
        let file_name = config_base_name(&file_path);
        Self {
            raw,
            file_path,
            file_name,
            now,
            revision,
            log_file,
        }
    }

    /// The parsed document.
    pub fn raw(&self) -> &RawConfig {
        &self.raw
    }

    /// Absolute path of the config file this snapshot was loaded from.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Config file name without extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Timestamp captured at load time; all time tokens use it.
    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// Commit hash of the project, or empty if it could not be determined.
    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn log_file(&self) -> &LogFile {
        &self.log_file
    }

    pub fn unity_path(&self) -> &str {
        &self.raw.unity_path
    }

    pub fn project_path(&self) -> &str {
        &self.raw.project_path
    }

    pub fn build_base_path(&self) -> &str {
        &self.raw.build_base_path
    }

    /// The output path template (`buildPath` key).
    pub fn build_path_template(&self) -> &str {
        &self.raw.build_path
    }

    pub fn method(&self) -> &str {
        &self.raw.method
    }
}

/// Outcome of [`Config::load`].
///
/// A failed revision lookup does not prevent loading: the snapshot carries
/// an empty revision and the failure is reported here for the caller to
/// act on.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub revision_error: Option<MinamoError>,
}
