//! Build output path computation.

use super::context::{BUILD_PATH_KEY, OutputContext};
use crate::config::Config;
use crate::paths;
use std::path::{Component, Path, PathBuf};

/// Absolute path the editor should write the build to.
///
/// `buildBasePath` is resolved against the current directory, the
/// `buildPath` template is expanded with the snapshot's own timestamp, and
/// the two are joined. The result always lies under the base; `..` in the
/// expanded template cannot climb out of it. Nothing is created on disk.
pub fn build_path(config: &Config) -> PathBuf {
    let base = paths::resolve(config.build_base_path());
    let ctx = OutputContext::new(config, config.now());
    let relative = ctx.expand(BUILD_PATH_KEY, config.build_path_template());

    base.join(confine(relative.trim_start_matches(['/', '\\'])))
}

/// Reduce an expanded template to plain relative components.
///
/// Roots and drive prefixes are dropped, `.` is skipped, and `..` only
/// cancels a component of the template itself, never one of the base.
fn confine(relative: &str) -> PathBuf {
    let mut out = PathBuf::new();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawConfig;
    use crate::test_support::{DirGuard, snapshot};
    use serial_test::serial;
    use tempfile::TempDir;

    fn raw(base: &str, template: &str, target: &str) -> RawConfig {
        let mut raw = RawConfig::default();
        raw.build_base_path = base.to_string();
        raw.build_path = template.to_string();
        raw.build.target = target.to_string();
        raw
    }

    #[cfg(not(windows))]
    #[test]
    fn test_platform_and_date_template() {
        let config = snapshot(raw("/out", "{platform}/{yyyy}{MM}{dd}/build", "android"));
        assert_eq!(build_path(&config), PathBuf::from("/out/android/20240305/build"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_config_name_and_revision_template() {
        let config = snapshot(raw("/out", "{configName}-{shortRevision}", "ios"));
        assert_eq!(build_path(&config), PathBuf::from("/out/android-0123456"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_empty_template_uses_platform_default() {
        let config = snapshot(raw("/out", "", "webgl"));
        assert_eq!(build_path(&config), PathBuf::from("/out/webgl"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_leading_separator_keeps_base() {
        let config = snapshot(raw("/out", "/{platform}", "android"));
        assert_eq!(build_path(&config), PathBuf::from("/out/android"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_parent_components_cannot_leave_base() {
        let config = snapshot(raw("/out", "{platform}/../../../etc", "android"));
        assert_eq!(build_path(&config), PathBuf::from("/out/etc"));

        let config = snapshot(raw("/out", "a/./../b", "android"));
        assert_eq!(build_path(&config), PathBuf::from("/out/b"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_field_value_cannot_leave_base() {
        let config = snapshot(raw("/out/builds", "{platform}/player", "../../../etc"));
        let path = build_path(&config);

        assert_eq!(path, PathBuf::from("/out/builds/etc/player"));
        assert!(path.starts_with("/out/builds"));
    }

    #[test]
    fn test_confine_drops_roots_and_dots() {
        assert_eq!(confine(""), PathBuf::new());
        assert_eq!(confine("./x/./y"), PathBuf::from("x").join("y"));
        assert_eq!(confine("../.."), PathBuf::new());
        assert_eq!(confine("x/../../y"), PathBuf::from("y"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unknown_token_survives_into_path() {
        let config = snapshot(raw("/out", "build-{unknownToken}", "android"));
        assert_eq!(build_path(&config), PathBuf::from("/out/build-{unknownToken}"));
    }

    #[test]
    #[serial]
    fn test_relative_base_is_resolved_against_cwd() {
        let temp_dir = TempDir::new().unwrap();
        let cwd = dunce::canonicalize(temp_dir.path()).unwrap();
        let _guard = DirGuard::new(&cwd);

        let config = snapshot(raw("Builds", "{platform}/{yyyy}", "android"));
        let path = build_path(&config);

        assert_eq!(path, cwd.join("Builds").join("android").join("2024"));
        assert!(!path.exists());
    }

    #[test]
    #[serial]
    fn test_result_is_always_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let absolute_base = temp_dir.path().to_string_lossy().into_owned();
        for base in ["", ".", "Builds", "../up", absolute_base.as_str()] {
            for template in ["", "{platform}", "a/../b", "/x", "{nope}/{dd}", "../../.."] {
                let config = snapshot(raw(base, template, "android"));
                let path = build_path(&config);
                assert!(
                    path.is_absolute(),
                    "'{}' + '{}' gave relative '{}'",
                    base,
                    template,
                    path.display()
                );
                assert!(
                    path.starts_with(paths::resolve(base)),
                    "'{}' + '{}' left the base: '{}'",
                    base,
                    template,
                    path.display()
                );
            }
        }
    }
}
