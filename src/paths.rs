//! Path resolution for user-supplied paths.
//!
//! Every path that reaches the editor command line (install dir, project,
//! log file, build output) goes through [`resolve`] so the editor always
//! sees an absolute, normalized path regardless of where minamo was started.

use std::path::{Component, Path, PathBuf};

/// Resolve a path against the process current working directory.
///
/// Absolute input is kept as-is apart from normalization. Existence is never
/// checked. If the current directory cannot be determined the cleaned input
/// is returned unchanged.
pub fn resolve(path: &str) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => resolve_from(&cwd, path),
        Err(e) => {
            log::debug!("current directory unavailable ({}), using '{}' as-is", e, path);
            clean(Path::new(path))
        }
    }
}

/// Resolve a path against an explicit base directory.
pub fn resolve_from(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let cleaned = clean(&joined);
    dunce::simplified(&cleaned).to_path_buf()
}

/// Lexically normalize a path: drop `.`, fold `..` into its parent.
///
/// `..` never climbs above a root; leading `..` of a relative path are kept.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
