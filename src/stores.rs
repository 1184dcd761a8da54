//! src/stores.rs
//! Keyed JSON file stores for keys and notes.
//!
//! Simple persistence consumed before a batch run begins (recipient
//! lookup, choosing the key to unlock) and never touched mid-batch.
//! Missing files load as empty stores; saves create parent directories
//! and pretty-print.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PgpBatchError;

/// One stored key pair. The private half is armored/encrypted by the
/// engine's own format; this crate never parses either half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub id: String,
    pub label: String,
    pub public_key: String,
    #[serde(default)]
    pub private_key: Option<String>,
}

/// One stored note (body is engine-encrypted text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Keyed JSON file store of [`KeyRecord`]s.
#[derive(Debug)]
pub struct KeyStore {
    path: PathBuf,
    keys: Vec<KeyRecord>,
}

impl KeyStore {
    /// Load the store at `path`; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, PgpBatchError> {
        Ok(KeyStore {
            path: path.to_path_buf(),
            keys: load_records(path)?,
        })
    }

    /// Persist the store, creating parent directories as needed.
    pub fn save(&self) -> Result<(), PgpBatchError> {
        save_records(&self.path, &self.keys)
    }

    pub fn list_keys(&self) -> &[KeyRecord] {
        &self.keys
    }

    pub fn get_key(&self, id: &str) -> Option<&KeyRecord> {
        self.keys.iter().find(|key| key.id == id)
    }

    /// Insert or replace the record with the same `id`.
    pub fn upsert(&mut self, record: KeyRecord) {
        match self.keys.iter_mut().find(|key| key.id == record.id) {
            Some(existing) => *existing = record,
            None => self.keys.push(record),
        }
    }

    /// Remove the record with `id`; returns whether one existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|key| key.id != id);
        self.keys.len() != before
    }
}

/// Keyed JSON file store of [`NoteRecord`]s.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<NoteRecord>,
}

impl NoteStore {
    /// Load the store at `path`; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, PgpBatchError> {
        Ok(NoteStore {
            path: path.to_path_buf(),
            notes: load_records(path)?,
        })
    }

    /// Persist the store, creating parent directories as needed.
    pub fn save(&self) -> Result<(), PgpBatchError> {
        save_records(&self.path, &self.notes)
    }

    pub fn list_notes(&self) -> &[NoteRecord] {
        &self.notes
    }

    pub fn get_note(&self, id: &str) -> Option<&NoteRecord> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Insert or replace the record with the same `id`.
    pub fn upsert(&mut self, record: NoteRecord) {
        match self.notes.iter_mut().find(|note| note.id == record.id) {
            Some(existing) => *existing = record,
            None => self.notes.push(record),
        }
    }

    /// Remove the record with `id`; returns whether one existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }
}

fn load_records<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, PgpBatchError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| PgpBatchError::Store(e.to_string()))
}

fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), PgpBatchError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw =
        serde_json::to_string_pretty(records).map_err(|e| PgpBatchError::Store(e.to_string()))?;
    fs::write(path, raw)?;
    Ok(())
}
