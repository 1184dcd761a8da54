//! src/engine.rs
//! The crypto engine boundary.
//!
//! The batch pipeline treats encryption and decryption as an opaque
//! byte-stream-in, artifact-out transform. Key lifecycle, wire formats
//! and armor layout all live behind this trait; the pipeline never looks
//! inside an artifact.

use std::io::Read;

use crate::artifact::Artifact;
use crate::error::PgpBatchError;
use crate::format::OutputFormat;
use crate::secrets::UnlockedKey;

/// Options for one encryption call.
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    /// Armored public keys (or engine-defined key references) of the
    /// recipients, obtained from the key store before the run begins.
    pub recipients: Vec<String>,
    /// Output wire shape; varies per file within a run.
    pub format: OutputFormat,
    /// Signing key, when outputs should be signed.
    pub signer: Option<UnlockedKey>,
}

impl EncryptOptions {
    /// Copy of these options with a different per-file format.
    pub fn with_format(&self, format: OutputFormat) -> Self {
        EncryptOptions {
            format,
            ..self.clone()
        }
    }
}

/// Options for one decryption call.
#[derive(Debug, Clone)]
pub struct DecryptOptions {
    /// The private key, unlocked once per run and reused for every file.
    pub key: UnlockedKey,
    /// Whether signature verification should be attempted.
    pub verify: bool,
}

/// A decryption result: the plaintext artifact plus the signature
/// verdict, when verification was requested and a signature was present.
#[derive(Debug)]
pub struct Decrypted {
    pub artifact: Artifact,
    pub verified: Option<bool>,
}

/// External collaborator performing the actual cryptographic transform.
///
/// Implementations may buffer or stream their output; the pipeline
/// handles all four [`Artifact`] shapes. A failure aborts only the file
/// being transformed, never the batch.
pub trait CryptoEngine {
    /// Encrypt `input` for the recipients in `options`.
    fn encrypt(
        &self,
        input: &mut dyn Read,
        options: &EncryptOptions,
    ) -> Result<Artifact, PgpBatchError>;

    /// Decrypt `input` with the unlocked key in `options`.
    fn decrypt(
        &self,
        input: &mut dyn Read,
        options: &DecryptOptions,
    ) -> Result<Decrypted, PgpBatchError>;
}
