//! src/paths.rs
//! User-supplied path resolution.
//!
//! Turns raw path strings into absolute paths: a leading `~` is expanded
//! against the home directory, relative paths are resolved against the
//! current working directory. Existence is deliberately not checked here;
//! callers validate separately.

use std::env;
use std::path::PathBuf;

/// Resolve a raw user-supplied path string into an absolute path.
///
/// - `~` or `~/...` is expanded against `$HOME` (or `%USERPROFILE%`).
/// - Relative paths are joined onto the current working directory.
/// - No filesystem access beyond reading the CWD; never panics.
///
/// Best-effort by contract: when no home directory is available the `~`
/// is kept verbatim, and when the CWD is unavailable the (possibly
/// relative) path is returned as-is.
pub fn resolve(raw: &str) -> PathBuf {
    let expanded = expand_home(raw);
    if expanded.is_absolute() {
        return expanded;
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(expanded),
        Err(_) => expanded,
    }
}

#[inline]
fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

#[inline]
fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
