//! Error types for the minamo CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for minamo operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinamoError {
    /// User provided invalid arguments, or the config could not be read or parsed.
    #[error("{0}")]
    UserError(String),

    /// The version-control revision could not be determined.
    #[error("Revision lookup failed: {0}")]
    RevisionError(String),

    /// The editor could not be spawned or exited unsuccessfully.
    ///
    /// `output` holds whatever the process wrote before failing (empty when
    /// it never started).
    #[error("Editor invocation failed: {message}")]
    InvocationError { message: String, output: String },
}

impl MinamoError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MinamoError::UserError(_) => exit_codes::USER_ERROR,
            MinamoError::RevisionError(_) => exit_codes::REVISION_FAILURE,
            MinamoError::InvocationError { .. } => exit_codes::INVOCATION_FAILURE,
        }
    }
}

/// Result type alias for minamo operations.
pub type Result<T> = std::result::Result<T, MinamoError>;
