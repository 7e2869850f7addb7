//! Key-value persistence — one JSON document per slot.
//!
//! `FileStorage` keeps each slot as `<key>.json` under a directory and
//! replaces it via a temp file and rename. `MemoryStorage` backs tests
//! and shares its map across clones, so a "fresh process" load can be
//! simulated against the same backing store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;


/// Slot holding the settings record.
pub const SETTINGS_KEY: &str = "urboard-settings";

/// Slot holding the todo list.
pub const TODOS_KEY: &str = "urboard-todos";

/// Slot holding the notes list.
pub const NOTES_KEY: &str = "urboard-notes";


/// Synchronous key-value persistence for JSON documents.
pub trait Storage {
    /// Read a slot. `None` when the slot has never been written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a slot, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}


/// File-backed storage: one `<key>.json` file per slot under `dir`.
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> FileStorage {
        FileStorage { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create storage dir: {}", e))?;
        let path = self.slot_path(key);
        // Write to a sibling temp file first, then rename over the slot.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .map_err(|e| format!("Failed to write slot '{}': {}", key, e))?;
        fs::rename(&tmp, &path)
            .map_err(|e| format!("Failed to replace slot '{}': {}", key, e))?;
        Ok(())
    }
}


/// In-memory storage; clones share the same backing map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.slots.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("urboard-storage-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn file_storage_round_trip() {
        let dir = temp_dir("round-trip");
        let storage = FileStorage::new(dir.clone());
        storage.set("slot", "{\"a\":1}").unwrap();
        assert_eq!(storage.get("slot").as_deref(), Some("{\"a\":1}"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_storage_missing_slot_is_none() {
        let dir = temp_dir("missing");
        let storage = FileStorage::new(dir);
        assert!(storage.get("never-written").is_none());
    }

    #[test]
    fn file_storage_overwrites() {
        let dir = temp_dir("overwrite");
        let storage = FileStorage::new(dir.clone());
        storage.set("slot", "first").unwrap();
        storage.set("slot", "second").unwrap();
        assert_eq!(storage.get("slot").as_deref(), Some("second"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_storage_slots_are_independent() {
        let dir = temp_dir("independent");
        let storage = FileStorage::new(dir.clone());
        storage.set(SETTINGS_KEY, "{}").unwrap();
        storage.set(TODOS_KEY, "[]").unwrap();
        assert_eq!(storage.get(SETTINGS_KEY).as_deref(), Some("{}"));
        assert_eq!(storage.get(TODOS_KEY).as_deref(), Some("[]"));
        assert!(storage.get(NOTES_KEY).is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn memory_storage_clones_share_slots() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("slot", "shared").unwrap();
        assert_eq!(other.get("slot").as_deref(), Some("shared"));
    }

    #[test]
    fn memory_storage_starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.get(SETTINGS_KEY).is_none());
    }
}
