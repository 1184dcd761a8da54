//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All fallible operations return [`Result<T, PgpBatchError>`](PgpBatchError).
//!
//! Per-file failures inside a batch run are deliberately *not* propagated
//! as errors: they are captured into
//! [`BatchResult::failures`](crate::batch::BatchResult) so that one file's
//! error never halts the files after it.

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all batch pipeline operations.
///
/// This enum covers I/O errors, configuration errors detected before a
/// batch starts, and failures reported by the external collaborators
/// (crypto engine, key/note stores).
#[derive(Error, Debug)]
pub enum PgpBatchError {
    /// I/O error occurred during file operations.
    ///
    /// This variant wraps [`std::io::Error`] and is automatically created
    /// when I/O operations fail (e.g., file not found, read/write errors).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A walk root does not exist or is not a directory.
    ///
    /// Raised before any file is yielded; a batch never starts when its
    /// input root is invalid.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The external crypto engine reported a failure.
    ///
    /// The engine is opaque to this crate, so only its message is carried.
    #[error("engine error: {0}")]
    Engine(String),

    /// A key or note store could not be read, parsed, or written.
    #[error("store error: {0}")]
    Store(String),

    /// An input path could not be mapped onto the output root.
    ///
    /// Indicates an input path that does not live under the input root it
    /// was walked from.
    #[error("path mapping error: {0}")]
    Mapping(String),

    /// No files survived extension filtering.
    ///
    /// A configuration error: the batch never starts, nothing is written.
    #[error("no files matched the requested extension filter")]
    EmptySelection,
}

impl From<&'static str> for PgpBatchError {
    fn from(msg: &'static str) -> Self {
        PgpBatchError::Engine(msg.to_string())
    }
}
