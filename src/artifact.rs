//! src/artifact.rs
//! Transform output shapes.
//!
//! The crypto engine may hand back a fully-buffered blob or a lazy
//! stream, in text or byte form. Modeling the four shapes as one tagged
//! enum lets the sink dispatch exhaustively instead of inspecting types
//! at runtime.

use std::fmt;
use std::io::{self, Read};

/// Lazy sequence of text chunks produced by the engine.
///
/// Chunks are fallible: an engine may discover corruption mid-stream.
pub type TextChunks = Box<dyn Iterator<Item = io::Result<String>>>;

/// Lazy byte source produced by the engine.
pub type ByteSource = Box<dyn Read>;

/// The output of one cryptographic transform.
///
/// Read-once: consuming code takes the artifact by value and drains it.
/// `TextStream` only occurs for armored output; text chunks are encoded
/// as UTF-8 when persisted.
pub enum Artifact {
    /// Fully-buffered armored text.
    Text(String),
    /// Fully-buffered binary data.
    Bytes(Vec<u8>),
    /// Lazily produced armored text, pulled one chunk at a time.
    TextStream(TextChunks),
    /// Lazily produced binary data, pulled one chunk at a time.
    ByteStream(ByteSource),
}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Artifact::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Artifact::TextStream(_) => f.write_str("TextStream(..)"),
            Artifact::ByteStream(_) => f.write_str("ByteStream(..)"),
        }
    }
}
