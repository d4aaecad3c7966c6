//! Build history log.
//!
//! Each editor run can be appended to an NDJSON file (one JSON object per
//! line) so CI jobs keep a record of what was built, from which revision,
//! and how long it took.
//!
//! # Record Format
//!
//! - `ts`: RFC3339 timestamp (UTC) when the record was written
//! - `action`: `build` or `exec`
//! - `actor`: `user@HOST`
//! - `config`: absolute config file path
//! - `method`: the `-executeMethod` target
//! - `output_path`: computed build output path
//! - `revision`: project commit (may be empty)
//! - `elapsed_ms`: editor wall-clock time
//! - `success`: whether the editor exited with code 0
//! - `error`: failure description, omitted on success

use crate::error::{MinamoError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How the editor was asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildAction {
    /// The configured method (`minamo build`).
    Build,
    /// An explicit method (`minamo exec`).
    Exec,
}

impl std::fmt::Display for BuildAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildAction::Build => write!(f, "build"),
            BuildAction::Exec => write!(f, "exec"),
        }
    }
}

/// One line of the build history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRecord {
    pub ts: DateTime<Utc>,
    pub action: BuildAction,
    pub actor: String,
    pub config: PathBuf,
    pub method: String,
    pub output_path: PathBuf,
    pub revision: String,
    pub elapsed_ms: u64,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BuildRecord {
    /// Create a record stamped with the current time and actor.
    pub fn new(action: BuildAction, method: impl Into<String>) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            config: PathBuf::new(),
            method: method.into(),
            output_path: PathBuf::new(),
            revision: String::new(),
            elapsed_ms: 0,
            success: false,
            error: None,
        }
    }

    /// Set the config file and the build path derived from it.
    pub fn with_paths(mut self, config: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        self.config = config.into();
        self.output_path = output_path.into();
        self
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    /// Record the outcome of the editor run.
    pub fn with_outcome(mut self, elapsed: Duration, error: Option<&MinamoError>) -> Self {
        self.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.success = error.is_none();
        self.error = error.map(ToString::to_string);
        self
    }

    /// Serialize the record to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            MinamoError::UserError(format!("failed to serialize build record to JSON: {}", e))
        })
    }
}

/// Get the actor string for record metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append a record to the history file at `path`.
///
/// The file and its parent directory are created if missing.
pub fn append_record(path: &Path, record: &BuildRecord) -> Result<()> {
    let json_line = record.to_ndjson_line()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            MinamoError::UserError(format!(
                "failed to create history directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            MinamoError::UserError(format!(
                "failed to open history file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        MinamoError::UserError(format!(
            "failed to write build record to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}
