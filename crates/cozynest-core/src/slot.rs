//! Cross-reload persistence of the diary user identifier.
//!
//! The slot holds exactly one string: the last authenticated user's id. It is
//! a hint to re-open a session on the next launch, never a source of truth for
//! entry data - the entry list always comes from the store.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Local persistence for the session identifier.
pub trait SessionSlot: Send + Sync {
    /// Read the saved identifier, if any.
    fn load(&self) -> Result<Option<String>, CoreError>;

    /// Save the identifier, replacing any previous value.
    fn save(&self, user_id: &str) -> Result<(), CoreError>;

    /// Remove the saved identifier. A no-op when empty.
    fn clear(&self) -> Result<(), CoreError>;
}

#[derive(Serialize, Deserialize)]
struct SlotFile {
    #[serde(rename = "diaryUserId")]
    diary_user_id: String,
}

/// File-backed slot: one JSON file under the data directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join("session.json"),
        }
    }
}

impl SessionSlot for FileSlot {
    fn load(&self) -> Result<Option<String>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<SlotFile>(&raw) {
            Ok(slot) if !slot.diary_user_id.is_empty() => Ok(Some(slot.diary_user_id)),
            Ok(_) => Ok(None),
            Err(e) => {
                // A corrupt slot file means "not logged in", not a crash
                tracing::warn!(path = %self.path.display(), "unreadable session slot: {e}");
                Ok(None)
            }
        }
    }

    fn save(&self, user_id: &str) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&SlotFile {
            diary_user_id: user_id.to_string(),
        })?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory slot, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionSlot for MemorySlot {
    fn load(&self) -> Result<Option<String>, CoreError> {
        Ok(self.value.lock().unwrap().clone())
    }

    fn save(&self, user_id: &str) -> Result<(), CoreError> {
        *self.value.lock().unwrap() = Some(user_id.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        *self.value.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_slot_round_trip() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path());

        assert_eq!(slot.load().unwrap(), None);

        slot.save("u1").unwrap();
        assert_eq!(slot.load().unwrap(), Some("u1".to_string()));

        slot.save("u2").unwrap();
        assert_eq!(slot.load().unwrap(), Some("u2".to_string()));

        slot.clear().unwrap();
        assert_eq!(slot.load().unwrap(), None);

        // Clearing an already-empty slot is fine
        slot.clear().unwrap();
    }

    #[test]
    fn file_slot_creates_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("nested").join("data"));
        slot.save("u1").unwrap();
        assert_eq!(slot.load().unwrap(), Some("u1".to_string()));
    }

    #[test]
    fn corrupt_slot_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path());
        std::fs::write(dir.path().join("session.json"), "not json {").unwrap();
        assert_eq!(slot.load().unwrap(), None);
    }

    #[test]
    fn memory_slot_round_trip() {
        let slot = MemorySlot::new();
        assert_eq!(slot.load().unwrap(), None);
        slot.save("u9").unwrap();
        assert_eq!(slot.load().unwrap(), Some("u9".to_string()));
        slot.clear().unwrap();
        assert_eq!(slot.load().unwrap(), None);
    }
}
