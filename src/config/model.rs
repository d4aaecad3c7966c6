//! Raw configuration document as written by the user.
//!
//! Every field is optional: missing keys fall back to `Default`, unknown keys
//! are ignored. Key names follow the camelCase spelling of the JSON files
//! the Unity-side modifiers read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsed configuration document, before any derived fields are attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConfig {
    /// Unity install location (a directory on Windows, an `.app` bundle on macOS).
    pub unity_path: String,
    /// Unity project root.
    pub project_path: String,
    /// Directory the expanded `build_path` template is joined onto.
    pub build_base_path: String,
    /// Output path template, e.g. `{platform}/{yyyy}{MM}{dd}/build`.
    pub build_path: String,
    /// Static editor method run by `-executeMethod`.
    pub method: String,

    pub build: BuildSection,
    pub identification: IdentificationSection,
    pub xr: XrSection,
    pub android_sdk: AndroidSdkSection,
    pub keystore: KeystoreSection,
    pub publishing: PublishingSection,
    pub scripting: ScriptingSection,
    pub resolution_and_presentation: ResolutionAndPresentationSection,
    pub editor_user_build: EditorUserBuildSection,
    /// Scripting define symbols.
    pub defines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildSection {
    pub target_group: String,
    pub target: String,
    pub options: BuildOptions,
}

/// Mirrors Unity's `BuildOptions` flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildOptions {
    pub development: bool,
    pub allow_debugging: bool,
    pub accept_external_modifications_to_player: bool,
    pub connect_with_profiler: bool,
    pub show_built_player: bool,
    pub auto_run_player: bool,
    pub symlink_libraries: bool,
    pub force_enable_assertions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentificationSection {
    pub package_name: String,
    pub version_name: String,
    /// Android bundle version code or iOS build number.
    pub version_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XrSection {
    pub enabled: bool,
    pub devices: Vec<String>,
    pub stereo_rendering_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidSdkSection {
    pub min: i32,
    pub target: i32,
}

/// Android signing settings.
///
/// The passwords are never exposed to output templates and are redacted
/// from `Debug` output.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeystoreSection {
    pub keystore_name: String,
    pub keystore_pass: String,
    pub keyalias_name: String,
    pub keyalias_pass: String,
}

impl fmt::Debug for KeystoreSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeystoreSection")
            .field("keystore_name", &self.keystore_name)
            .field("keystore_pass", &redacted(&self.keystore_pass))
            .field("keyalias_name", &self.keyalias_name)
            .field("keyalias_pass", &redacted(&self.keyalias_pass))
            .finish()
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "<redacted>" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublishingSection {
    pub use_apk_expansion: bool,
    pub uwp_capability: Vec<String>,
    #[serde(rename = "ps4AttribExclusiveVR")]
    pub ps4_attrib_exclusive_vr: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScriptingSection {
    pub api_compatibility_level: String,
    pub backend: String,
    #[serde(rename = "scriptingRuntimeVersion")]
    pub runtime_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolutionAndPresentationSection {
    pub run_in_background: bool,
}

/// Mirrors the WSA entries of Unity's `EditorUserBuildSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorUserBuildSection {
    #[serde(rename = "wsaSubtarget")]
    pub wsa_subtarget: String,
    #[serde(rename = "wsaUWPBuildType")]
    pub wsa_uwp_build_type: String,
    #[serde(rename = "wsaUWPSDK")]
    pub wsa_uwp_sdk: String,
    #[serde(rename = "wsaBuildAndRunDeployTarget")]
    pub wsa_build_and_run_deploy_target: String,
    #[serde(rename = "wsaGenerateReferenceProjects")]
    pub wsa_generate_reference_projects: bool,
}
