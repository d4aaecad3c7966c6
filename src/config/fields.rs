//! Dotted-path field accessors over [`RawConfig`].
//!
//! Output templates may reference configuration values by their JSON path,
//! e.g. `{build.target}` or `{identification.versionName}`. Instead of
//! reflecting over the struct at runtime, every honored path is registered
//! here with an extraction function. A path that is not in this table is
//! not a token.
//!
//! Rendering rules: strings verbatim, booleans as `true`/`false`, integers
//! in decimal, lists joined with `;`.
//!
//! Keystore passwords are intentionally absent.

use super::model::RawConfig;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Extracts one field of the configuration as a string.
pub type FieldExtractor = fn(&RawConfig) -> String;

static REGISTRY: LazyLock<FieldRegistry> = LazyLock::new(FieldRegistry::build);

/// Table of template-visible configuration fields.
#[derive(Debug)]
pub struct FieldRegistry {
    fields: BTreeMap<&'static str, FieldExtractor>,
}

impl FieldRegistry {
    /// The process-wide registry, built on first use.
    pub fn global() -> &'static FieldRegistry {
        &REGISTRY
    }

    /// Look up `path` and extract its value from `config`.
    ///
    /// Returns `None` if the path is not registered.
    pub fn lookup(&self, config: &RawConfig, path: &str) -> Option<String> {
        self.fields.get(path).map(|extract| extract(config))
    }

    /// Whether `path` is a registered field.
    pub fn contains(&self, path: &str) -> bool {
        self.fields.contains_key(path)
    }

    /// All registered paths, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    fn build() -> Self {
        let entries: [(&'static str, FieldExtractor); 38] = [
            ("unityPath", |c| c.unity_path.clone()),
            ("projectPath", |c| c.project_path.clone()),
            ("buildBasePath", |c| c.build_base_path.clone()),
            ("buildPath", |c| c.build_path.clone()),
            ("method", |c| c.method.clone()),
            ("build.targetGroup", |c| c.build.target_group.clone()),
            ("build.target", |c| c.build.target.clone()),
            ("build.options.development", |c| {
                c.build.options.development.to_string()
            }),
            ("build.options.allowDebugging", |c| {
                c.build.options.allow_debugging.to_string()
            }),
            ("build.options.acceptExternalModificationsToPlayer", |c| {
                c.build.options.accept_external_modifications_to_player.to_string()
            }),
            ("build.options.connectWithProfiler", |c| {
                c.build.options.connect_with_profiler.to_string()
            }),
            ("build.options.showBuiltPlayer", |c| {
                c.build.options.show_built_player.to_string()
            }),
            ("build.options.autoRunPlayer", |c| {
                c.build.options.auto_run_player.to_string()
            }),
            ("build.options.symlinkLibraries", |c| {
                c.build.options.symlink_libraries.to_string()
            }),
            ("build.options.forceEnableAssertions", |c| {
                c.build.options.force_enable_assertions.to_string()
            }),
            ("identification.packageName", |c| {
                c.identification.package_name.clone()
            }),
            ("identification.versionName", |c| {
                c.identification.version_name.clone()
            }),
            ("identification.versionCode", |c| {
                c.identification.version_code.clone()
            }),
            ("xr.enabled", |c| c.xr.enabled.to_string()),
            ("xr.devices", |c| c.xr.devices.join(";")),
            ("xr.stereoRenderingPath", |c| {
                c.xr.stereo_rendering_path.clone()
            }),
            ("androidSdk.min", |c| c.android_sdk.min.to_string()),
            ("androidSdk.target", |c| c.android_sdk.target.to_string()),
            ("keystore.keystoreName", |c| c.keystore.keystore_name.clone()),
            ("keystore.keyaliasName", |c| c.keystore.keyalias_name.clone()),
            ("publishing.useApkExpansion", |c| {
                c.publishing.use_apk_expansion.to_string()
            }),
            ("publishing.uwpCapability", |c| {
                c.publishing.uwp_capability.join(";")
            }),
            ("publishing.ps4AttribExclusiveVR", |c| {
                c.publishing.ps4_attrib_exclusive_vr.to_string()
            }),
            ("scripting.apiCompatibilityLevel", |c| {
                c.scripting.api_compatibility_level.clone()
            }),
            ("scripting.backend", |c| c.scripting.backend.clone()),
            ("scripting.scriptingRuntimeVersion", |c| {
                c.scripting.runtime_version.clone()
            }),
            ("resolutionAndPresentation.runInBackground", |c| {
                c.resolution_and_presentation.run_in_background.to_string()
            }),
            ("editorUserBuild.wsaSubtarget", |c| {
                c.editor_user_build.wsa_subtarget.clone()
            }),
            ("editorUserBuild.wsaUWPBuildType", |c| {
                c.editor_user_build.wsa_uwp_build_type.clone()
            }),
            ("editorUserBuild.wsaUWPSDK", |c| {
                c.editor_user_build.wsa_uwp_sdk.clone()
            }),
            ("editorUserBuild.wsaBuildAndRunDeployTarget", |c| {
                c.editor_user_build.wsa_build_and_run_deploy_target.clone()
            }),
            ("editorUserBuild.wsaGenerateReferenceProjects", |c| {
                c.editor_user_build
                    .wsa_generate_reference_projects
                    .to_string()
            }),
            ("defines", |c| c.defines.join(";")),
        ];

        Self {
            fields: entries.into_iter().collect(),
        }
    }
}
