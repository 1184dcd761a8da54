//! src/secrets.rs
//! Secret material wrappers.
//!
//! The pipeline never performs cryptography itself, but it does carry an
//! unlocked private key across every file of a run (unlocked at most once
//! per run, shared read-only — never re-unlocked per file). These wrappers
//! zeroize on drop and require explicit exposure to read.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A user passphrase, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Passphrase(String);

impl Passphrase {
    pub fn new(value: String) -> Self {
        Passphrase(value)
    }

    /// Explicit access to the underlying string.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(<redacted>)")
    }
}

/// An unlocked (passphrase-validated) private key.
///
/// Produced by the caller before a batch run begins and shared immutably
/// across every file of that run. The key material is zeroized on drop;
/// the identifier is not secret and survives for logging.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct UnlockedKey {
    #[zeroize(skip)]
    id: String,
    material: Vec<u8>,
}

impl UnlockedKey {
    pub fn new(id: impl Into<String>, material: Vec<u8>) -> Self {
        UnlockedKey {
            id: id.into(),
            material,
        }
    }

    /// The key's store identifier (not secret).
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Explicit access to the unlocked key material.
    #[inline]
    pub fn expose_material(&self) -> &[u8] {
        &self.material
    }
}

impl fmt::Debug for UnlockedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnlockedKey({}, <redacted>)", self.id)
    }
}
