//! src/sink.rs
//! Artifact persistence with bounded memory.
//!
//! Normalizes the four artifact shapes into one write loop against a
//! target file. Streamed shapes are pulled strictly one chunk at a time:
//! the next chunk is requested only after the previous write completed,
//! so peak memory stays at O(one chunk) no matter how large the artifact
//! is. Reader and writer handles are released on every exit path by drop
//! scoping.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::artifact::Artifact;
use crate::consts::STREAM_CHUNK_SIZE;
use crate::error::PgpBatchError;
use crate::format::OutputFormat;

/// Persist one artifact to `output_path`.
///
/// Every directory segment of `output_path` is created first (idempotent).
/// Buffered shapes are written in a single call; streamed shapes via the
/// sequential pull-write loop. The file is explicitly flushed before
/// return — a flush failure is reported like any other write failure,
/// since unflushed output cannot be trusted.
///
/// Text chunks are encoded as UTF-8 (engines only produce text shapes
/// for armored transforms). `format` is recorded for tracing.
///
/// # Errors
///
/// Any failure from directory creation, the source stream, the
/// destination writer, or the final flush. The failure is scoped to this
/// one file: both handles are dropped before the error is returned.
pub fn write_artifact(
    artifact: Artifact,
    output_path: &Path,
    format: OutputFormat,
) -> Result<(), PgpBatchError> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!(path = %output_path.display(), ?format, "writing artifact");

    match artifact {
        Artifact::Text(text) => {
            let mut file = File::create(output_path)?;
            file.write_all(text.as_bytes())?;
            file.flush()?;
        }
        Artifact::Bytes(bytes) => {
            let mut file = File::create(output_path)?;
            file.write_all(&bytes)?;
            file.flush()?;
        }
        Artifact::TextStream(chunks) => {
            let mut file = File::create(output_path)?;
            for chunk in chunks {
                // write completes before the next chunk is pulled
                let chunk = chunk?;
                file.write_all(chunk.as_bytes())?;
            }
            file.flush()?;
        }
        Artifact::ByteStream(mut source) => {
            let mut file = File::create(output_path)?;
            let mut buffer = vec![0u8; STREAM_CHUNK_SIZE];
            loop {
                let n = source.read(&mut buffer)?;
                if n == 0 {
                    break;
                }
                file.write_all(&buffer[..n])?;
            }
            file.flush()?;
        }
    }

    Ok(())
}
