//! Configuration types and constants used around the snapshot.

use crate::paths;
use std::path::Path;

/// Value of `--log-file` that means "let the editor pick its own log location".
pub const DEFAULT_LOG_FILE: &str = "default";

/// Where the editor should write its log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogFile {
    /// Omit `-logFile`; the editor uses its platform default location.
    #[default]
    EditorDefault,
    /// Pass `-logFile -` so the log is written to the editor's stdout.
    Stdout,
    /// Write the log to this path (resolved to absolute when used).
    Path(String),
}

impl LogFile {
    /// Interpret a `--log-file` value.
    ///
    /// `default` selects [`LogFile::EditorDefault`], an empty string (or `-`)
    /// selects [`LogFile::Stdout`], anything else is a path.
    pub fn parse(value: &str) -> Self {
        match value {
            DEFAULT_LOG_FILE => Self::EditorDefault,
            "" | "-" => Self::Stdout,
            path => Self::Path(path.to_string()),
        }
    }

    /// The value to pass after `-logFile`, or `None` to omit the flag.
    pub fn editor_value(&self) -> Option<String> {
        match self {
            Self::EditorDefault => None,
            Self::Stdout => Some("-".to_string()),
            Self::Path(path) => Some(paths::resolve(path).to_string_lossy().into_owned()),
        }
    }
}

/// Serialization format of a config document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml`/`.yml` are YAML; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Base name of a config file: the file name up to its first `.`.
///
/// `android.release.json` → `android`.
pub fn config_base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_string))
        .unwrap_or_default()
}
