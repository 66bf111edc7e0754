//! Single save slot: the career blob, stored as JSON.

use crate::models::{CareerError, SavedBlob};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const DEFAULT_SAVE_FILE: &str = "tennis_career_save.json";

/// Where the save blob lives. There is exactly one slot per store.
pub trait SaveStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<SavedBlob>, CareerError>;
    fn save(&self, blob: &SavedBlob) -> Result<(), CareerError>;
    fn clear(&self) -> Result<(), CareerError>;
}

/// Save slot backed by one JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Result<Option<SavedBlob>, CareerError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, blob: &SavedBlob) -> Result<(), CareerError> {
        let json = serde_json::to_string_pretty(blob)?;
        // Write then rename so a crash never leaves half a save behind.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        log::debug!("Saved career to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), CareerError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process slot, kept as serialized JSON so loads go through the same
/// decoding as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<Option<SavedBlob>, CareerError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| CareerError::Io("save slot lock poisoned".to_string()))?;
        match slot.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, blob: &SavedBlob) -> Result<(), CareerError> {
        let json = serde_json::to_string(blob)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| CareerError::Io("save slot lock poisoned".to_string()))?;
        *slot = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), CareerError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| CareerError::Io("save slot lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}
