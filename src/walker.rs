//! src/walker.rs
//! Recursive directory enumeration with output-subtree exclusion.
//!
//! Yields regular files only, depth-first, in filesystem enumeration
//! order. A designated exclude subtree (the batch's own output directory,
//! which may be nested inside the input tree) is pruned entirely — this is
//! what keeps re-runs from re-processing or recursively growing their own
//! output.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PgpBatchError;

/// Recursively enumerate the regular files under `root`.
///
/// - Only plain regular files are yielded; directories are recursed into;
///   symbolic links, sockets and other entry kinds are silently skipped.
/// - Any entry that *is* `exclude` or lies beneath it is pruned: not
///   yielded, not recursed into.
/// - The walk is all-or-nothing: a single unreadable subdirectory fails
///   the entire invocation.
///
/// # Errors
///
/// [`PgpBatchError::NotADirectory`] when `root` does not exist or is not
/// a directory, before anything is yielded; [`PgpBatchError::Io`] on
/// mid-walk enumeration failures.
pub fn walk(root: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>, PgpBatchError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(PgpBatchError::NotADirectory(root.to_path_buf())),
    }

    // Canonical forms so that prefix comparison is meaningful even when
    // the exclude path was given relative to the CWD or does not exist yet.
    let root = root.canonicalize()?;
    let exclude = exclude.map(canonical_or_absolute);

    debug!(root = %root.display(), "walking directory tree");
    let files = walk_dir(&root, exclude.as_deref())?;
    debug!(root = %root.display(), count = files.len(), "walk complete");

    Ok(files)
}

/// One level of the recursion: returns the files found under `dir`.
///
/// Pure per call — each invocation returns its own list and the caller
/// concatenates, so no accumulator is shared across recursive branches.
fn walk_dir(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>, PgpBatchError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(excluded) = exclude {
            // starts_with also covers path == excluded
            if path.starts_with(excluded) {
                continue;
            }
        }

        let kind = entry.file_type()?;
        if kind.is_dir() {
            files.extend(walk_dir(&path, exclude)?);
        } else if kind.is_file() {
            files.push(path);
        }
        // symlinks, sockets, devices: skipped
    }

    Ok(files)
}

/// Canonicalize when possible, otherwise absolutize logically.
///
/// The exclude path usually exists (prior runs created it), but on a
/// first run it may not — it still must prune correctly once created
/// mid-walk by a concurrent mkdir, so fall back to joining the CWD.
fn canonical_or_absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}
