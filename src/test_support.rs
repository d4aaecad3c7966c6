use crate::config::{Config, LogFile, RawConfig};
use chrono::{DateTime, Local, TimeZone};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

pub(crate) const TEST_REVISION: &str = "0123456789abcdef0123456789abcdef01234567";

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create a git repository with a single commit, standing in for a Unity project.
pub(crate) fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::create_dir_all(path.join("Assets")).unwrap();
    std::fs::write(path.join("Assets").join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Write a config document into `dir` and return its path.
pub(crate) fn write_config(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// 2024-03-05 09:07:02 local time.
pub(crate) fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 2).unwrap()
}

/// Snapshot of `raw` as if loaded from `/configs/android.json` at [`fixed_now`].
pub(crate) fn snapshot(raw: RawConfig) -> Config {
    snapshot_with_log(raw, LogFile::EditorDefault)
}

pub(crate) fn snapshot_with_log(raw: RawConfig, log_file: LogFile) -> Config {
    Config::from_raw(
        raw,
        PathBuf::from("/configs/android.json"),
        log_file,
        fixed_now(),
        TEST_REVISION.to_string(),
    )
}

/// Lay out a fake `Unity.app` under `root` whose editor binary is a shell
/// script running `body`. Returns the bundle path.
#[cfg(unix)]
pub(crate) fn fake_editor(root: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let app = root.join("Unity.app");
    let bin_dir = app.join("Contents").join("MacOS");
    std::fs::create_dir_all(&bin_dir).unwrap();

    let exe = bin_dir.join("Unity");
    std::fs::write(&exe, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();
    app
}

/// Snapshot pointing at a fake editor (see [`fake_editor`]) and a `game`
/// project directory, both under `temp_dir`. Builds go to
/// `out/{platform}/{yyyy}{MM}{dd}/build` with platform `android`.
#[cfg(unix)]
pub(crate) fn fake_config(temp_dir: &TempDir, editor_body: &str, method: &str) -> Config {
    let root = dunce::canonicalize(temp_dir.path()).unwrap();
    let app = fake_editor(&root, editor_body);
    let project = root.join("game");
    std::fs::create_dir_all(&project).unwrap();

    let mut raw = RawConfig::default();
    raw.unity_path = app.to_string_lossy().into_owned();
    raw.project_path = project.to_string_lossy().into_owned();
    raw.build_base_path = root.join("out").to_string_lossy().into_owned();
    raw.build_path = "{platform}/{yyyy}{MM}{dd}/build".to_string();
    raw.build.target = "android".to_string();
    raw.method = method.to_string();
    snapshot(raw)
}
