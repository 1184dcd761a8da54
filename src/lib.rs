// src/lib.rs

//! # pgpbatch-rs
//!
//! Batch file/folder transform pipeline over a pluggable PGP engine.
//!
//! Recursively walks an input tree (excluding its own output subtree),
//! derives output paths, resolves per-file formats, drives one engine
//! call per file and persists the result with bounded memory — while one
//! failing file never halts the rest of the batch.
//!
//! The cryptography itself lives behind the [`CryptoEngine`] trait; this
//! crate knows nothing about wire or armor formats.

pub mod artifact;
pub mod batch;
pub mod consts;
pub mod engine;
pub mod error;
pub mod format;
pub mod mapper;
pub mod paths;
pub mod secrets;
pub mod sink;
pub mod stores;
pub mod walker;

// High-level API — this is what most users import
pub use batch::{
    decrypt_batch, encrypt_batch, plan_decrypt, plan_encrypt, run_batch, BatchPlan, BatchResult,
    CollisionPolicy, FailureEntry, FileTask,
};
pub use error::PgpBatchError;

// Boundary types — needed to implement or drive an engine
pub use artifact::Artifact;
pub use engine::{CryptoEngine, Decrypted, DecryptOptions, EncryptOptions};
pub use format::{parse_extension_filter, resolve_format, FormatMode, OutputFormat};
pub use secrets::{Passphrase, UnlockedKey};

// Lower-level pieces, public for one-off (non-batch) flows
pub use mapper::suggest_single_output;
pub use sink::write_artifact;
pub use walker::walk;
