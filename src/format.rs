//! src/format.rs
//! Output format policy and extension filter parsing.
//!
//! Decides whether a file is treated as text-armored or raw-binary for
//! the transform, and normalizes user-supplied extension filter lists
//! into the set-membership predicate used while planning a batch.

use std::collections::BTreeSet;
use std::path::Path;

use crate::consts::{ARMORED_SUFFIX, BINARY_SUFFIX};

/// Wire shape of a transform output: ASCII-armored text or raw binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// ASCII-armored text (`.asc`).
    Armored,
    /// Raw binary container (`.pgp`).
    Binary,
}

impl OutputFormat {
    /// The filename suffix appended to encryption outputs of this format.
    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            OutputFormat::Armored => ARMORED_SUFFIX,
            OutputFormat::Binary => BINARY_SUFFIX,
        }
    }
}

/// How per-file formats are chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Inspect each file's extension (see [`resolve_format`]).
    #[default]
    Auto,
    /// Treat every file as armored text.
    ForceArmored,
    /// Treat every file as raw binary.
    ForceBinary,
}

/// Resolve the format for one file under the given mode.
///
/// Forced modes win unconditionally. Under [`FormatMode::Auto`] an `.asc`
/// extension maps to [`OutputFormat::Armored`]; every other extension
/// (including none) maps to [`OutputFormat::Binary`] — binary is the safe
/// default since most encrypted containers are binary.
pub fn resolve_format(path: &Path, mode: FormatMode) -> OutputFormat {
    match mode {
        FormatMode::ForceArmored => OutputFormat::Armored,
        FormatMode::ForceBinary => OutputFormat::Binary,
        FormatMode::Auto => match extension_of(path) {
            Some(ext) if ext == ARMORED_SUFFIX => OutputFormat::Armored,
            _ => OutputFormat::Binary,
        },
    }
}

/// Parse a comma-separated extension filter into a normalized set.
///
/// Tokens are trimmed, empties dropped, lower-cased, and given a leading
/// dot when missing (`pdf` → `.pdf`). Returns `defaults` unchanged when
/// nothing survives parsing.
///
/// ```
/// use std::collections::BTreeSet;
/// use pgpbatch_rs::format::parse_extension_filter;
///
/// let defaults: BTreeSet<String> = [".pgp".to_string()].into();
/// let parsed = parse_extension_filter(" .PDF, txt ", &defaults);
/// let expected: BTreeSet<String> = [".pdf".to_string(), ".txt".to_string()].into();
/// assert_eq!(parsed, expected);
/// assert_eq!(parse_extension_filter("", &defaults), defaults);
/// ```
pub fn parse_extension_filter(input: &str, defaults: &BTreeSet<String>) -> BTreeSet<String> {
    let parsed: BTreeSet<String> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let token = token.to_lowercase();
            if token.starts_with('.') {
                token
            } else {
                format!(".{token}")
            }
        })
        .collect();

    if parsed.is_empty() {
        defaults.clone()
    } else {
        parsed
    }
}

/// Whether a path's extension is a member of the filter set.
#[inline]
pub fn matches_filter(path: &Path, filter: &BTreeSet<String>) -> bool {
    match extension_of(path) {
        Some(ext) => filter.contains(&ext),
        None => false,
    }
}

/// A path's extension as a lower-cased dotted token (`".pdf"`), if any.
#[inline]
pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}
