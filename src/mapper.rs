//! src/mapper.rs
//! Output path derivation.
//!
//! Encryption appends the format suffix; decryption strips a recognized
//! encrypted suffix or, failing that, appends a `.decrypted` marker so an
//! unrecognized input can never collapse onto an unrelated file's name.
//! The single-file and batch decrypt paths share one implementation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::consts::{DECRYPTED_SUFFIX, RECOGNIZED_ENCRYPTED_SUFFIXES};
use crate::error::PgpBatchError;
use crate::format::OutputFormat;

/// Derive the encryption output path for one input file.
///
/// `input_path` must lie under `input_root`; the relative part is
/// re-rooted under `output_root` with every intermediate directory
/// segment preserved, and the format suffix appended
/// (`sub/b.txt` → `output_root/sub/b.txt.asc` for armored).
pub fn map_encrypt(
    input_root: &Path,
    output_root: &Path,
    input_path: &Path,
    format: OutputFormat,
) -> Result<PathBuf, PgpBatchError> {
    let relative = relative_to_root(input_root, input_path)?;
    Ok(append_suffix(&output_root.join(relative), format.suffix()))
}

/// Derive the decryption output path for one input file.
///
/// The relative part is re-rooted under `output_root`, then the final
/// segment is stripped of a recognized encrypted suffix
/// (case-insensitive) or given the `.decrypted` fallback marker.
pub fn map_decrypt(
    input_root: &Path,
    output_root: &Path,
    input_path: &Path,
) -> Result<PathBuf, PgpBatchError> {
    let relative = relative_to_root(input_root, input_path)?;
    Ok(strip_or_mark(&output_root.join(relative)))
}

/// Suggest an output path for a one-off (non-batch) decrypt.
///
/// Applies the same strip-or-mark rule as [`map_decrypt`] directly to
/// `input_path`, with no relative-root computation.
pub fn suggest_single_output(input_path: &Path) -> PathBuf {
    strip_or_mark(input_path)
}

#[inline]
fn relative_to_root<'a>(root: &Path, path: &'a Path) -> Result<&'a Path, PgpBatchError> {
    path.strip_prefix(root).map_err(|_| {
        PgpBatchError::Mapping(format!(
            "{} is not under input root {}",
            path.display(),
            root.display()
        ))
    })
}

#[inline]
fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

/// Strip a recognized encrypted suffix from the final path segment, or
/// append the fallback marker when none matches.
fn strip_or_mark(path: &Path) -> PathBuf {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if let Some(stripped) = strip_known_suffix(name) {
            return path.with_file_name(stripped);
        }
    }
    append_suffix(path, DECRYPTED_SUFFIX)
}

/// The file name with its recognized encrypted suffix removed, if any.
///
/// Matching is ASCII case-insensitive; a name that *is* a suffix
/// (e.g. `.pgp` alone) is left untouched so stripping never produces an
/// empty name.
fn strip_known_suffix(name: &str) -> Option<&str> {
    for suffix in RECOGNIZED_ENCRYPTED_SUFFIXES {
        if name.len() > suffix.len() {
            let split = name.len() - suffix.len();
            if let Some(tail) = name.get(split..) {
                if tail.eq_ignore_ascii_case(suffix) {
                    return Some(&name[..split]);
                }
            }
        }
    }
    None
}
