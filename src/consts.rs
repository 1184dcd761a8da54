//! # Constants
//!
//! This module defines constants used throughout the library for output
//! naming, extension filtering, and streaming limits.

/// Suffix appended to armored (text) encryption outputs.
///
/// `report.pdf` encrypted with [`OutputFormat::Armored`](crate::format::OutputFormat)
/// becomes `report.pdf.asc`.
pub const ARMORED_SUFFIX: &str = ".asc";

/// Suffix appended to binary encryption outputs.
///
/// `report.pdf` encrypted with [`OutputFormat::Binary`](crate::format::OutputFormat)
/// becomes `report.pdf.pgp`.
pub const BINARY_SUFFIX: &str = ".pgp";

/// Marker suffix appended when decrypting a file whose name carries none of
/// the [`RECOGNIZED_ENCRYPTED_SUFFIXES`].
///
/// Guarantees the decrypt mapping never collapses an unrecognized input
/// onto an identically-named unrelated file.
pub const DECRYPTED_SUFFIX: &str = ".decrypted";

/// Suffixes recognized (case-insensitively) as encrypted-container names
/// by the decrypt path mapping.
///
/// Doubles as the default extension filter when planning a decrypt batch.
pub const RECOGNIZED_ENCRYPTED_SUFFIXES: [&str; 3] = [".pgp", ".gpg", ".asc"];

/// Chunk buffer size for streamed artifact writes, in bytes.
///
/// Set to `64 KiB`: large enough to amortize syscall cost, small enough
/// that peak memory stays bounded regardless of artifact size.
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// Maximum number of failure entries included in a batch summary.
///
/// Keeps the user-visible summary bounded for very large batches; the
/// full failure list remains available on the returned
/// [`BatchResult`](crate::batch::BatchResult).
pub const FAILURE_PREVIEW_LIMIT: usize = 5;
