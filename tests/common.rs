//! tests/common.rs
//! Shared helpers across integration test files: a temp-tree builder and
//! a mock crypto engine covering all four artifact shapes.

#![allow(dead_code)] // each test binary uses a different subset

use std::fs;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use pgpbatch_rs::{
    Artifact, CryptoEngine, Decrypted, DecryptOptions, EncryptOptions, PgpBatchError,
};

/// Prefix the mock engine stamps onto "encrypted" payloads.
pub const MOCK_PREFIX: &[u8] = b"MOCK:";

/// File contents that make the mock engine fail, for partial-failure tests.
pub const POISON: &[u8] = b"!!poison!!";

/// Which artifact shape the mock engine produces on encrypt.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Text,
    Bytes,
    TextStream,
    ByteStream,
}

/// Deterministic stand-in for a real PGP engine.
///
/// "Encryption" prepends [`MOCK_PREFIX`]; "decryption" strips it. Inputs
/// equal to [`POISON`] fail, so tests can poison individual files.
pub struct MockEngine {
    pub shape: Shape,
}

impl MockEngine {
    pub fn new(shape: Shape) -> Self {
        MockEngine { shape }
    }
}

impl CryptoEngine for MockEngine {
    fn encrypt(
        &self,
        input: &mut dyn Read,
        _options: &EncryptOptions,
    ) -> Result<Artifact, PgpBatchError> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;
        if data == POISON {
            return Err(PgpBatchError::Engine("poisoned input".to_string()));
        }

        let mut payload = MOCK_PREFIX.to_vec();
        payload.extend_from_slice(&data);

        Ok(match self.shape {
            Shape::Bytes => Artifact::Bytes(payload),
            Shape::ByteStream => Artifact::ByteStream(Box::new(Cursor::new(payload))),
            Shape::Text => Artifact::Text(
                String::from_utf8(payload).expect("test inputs are ASCII"),
            ),
            Shape::TextStream => {
                let text = String::from_utf8(payload).expect("test inputs are ASCII");
                let chunks: Vec<io::Result<String>> = text
                    .as_bytes()
                    .chunks(3)
                    .map(|c| Ok(String::from_utf8(c.to_vec()).expect("ASCII chunk")))
                    .collect();
                Artifact::TextStream(Box::new(chunks.into_iter()))
            }
        })
    }

    fn decrypt(
        &self,
        input: &mut dyn Read,
        options: &DecryptOptions,
    ) -> Result<Decrypted, PgpBatchError> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;
        if !data.starts_with(MOCK_PREFIX) {
            return Err(PgpBatchError::Engine("not a mock container".to_string()));
        }
        Ok(Decrypted {
            artifact: Artifact::Bytes(data[MOCK_PREFIX.len()..].to_vec()),
            verified: options.verify.then_some(true),
        })
    }
}

/// Default encrypt options for tests.
pub fn encrypt_options() -> EncryptOptions {
    EncryptOptions {
        recipients: vec!["-----BEGIN PGP PUBLIC KEY BLOCK----- test".to_string()],
        format: pgpbatch_rs::OutputFormat::Binary,
        signer: None,
    }
}

/// Default decrypt options for tests.
pub fn decrypt_options() -> DecryptOptions {
    DecryptOptions {
        key: pgpbatch_rs::UnlockedKey::new("test-key", b"unlocked material".to_vec()),
        verify: false,
    }
}

/// Create `root/rel` (and its parent directories) with the given contents.
pub fn write_tree_file(root: &Path, rel: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, contents).expect("write tree file");
    path
}
