//! Unity editor executable discovery.

use crate::paths;
use std::fmt;
use std::path::PathBuf;

/// File name of the editor binary, without platform extension.
pub const EDITOR_EXECUTABLE: &str = "Unity";

/// Operating system family, as far as editor layout is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// `<install>/Editor/Unity.exe`
    Windows,
    /// `<install>/Contents/MacOS/Unity`, where `<install>` is the `.app` bundle.
    MacOs,
    /// Any other OS; carries its name for diagnostics.
    Unsupported(String),
}

impl Platform {
    /// The platform this binary is running on.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            other => Self::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::MacOs => write!(f, "macos"),
            Platform::Unsupported(name) => write!(f, "{}", name),
        }
    }
}

/// Path of the editor executable inside `install_path` for `platform`.
///
/// # Panics
///
/// On [`Platform::Unsupported`]. There is no editor layout to fall back to
/// and any invocation would fail, so the run is aborted here.
pub fn locate_executable(install_path: &str, platform: &Platform) -> PathBuf {
    let dir = paths::resolve(install_path);

    match platform {
        Platform::Windows => dir
            .join("Editor")
            .join(format!("{}.exe", EDITOR_EXECUTABLE)),
        Platform::MacOs => dir.join("Contents").join("MacOS").join(EDITOR_EXECUTABLE),
        Platform::Unsupported(name) => {
            panic!(
                "unsupported platform: {} (the Unity editor can only be driven on windows or macos)",
                name
            )
        }
    }
}
