//! Notes store — the sticky-notes widget's persisted list.
//!
//! Same slot-per-widget pattern as the todo store. New notes are
//! prepended (newest first) and get a color from the fixed palette,
//! keyed off the creation timestamp.

use serde::{Deserialize, Serialize};

use crate::storage::{Storage, NOTES_KEY};


/// Gradient classes the front end styles notes with.
pub const COLORS: [&str; 5] = [
    "from-blue-500/20 to-cyan-500/20 shadow-blue-500/10",
    "from-purple-500/20 to-pink-500/20 shadow-purple-500/10",
    "from-emerald-500/20 to-teal-500/20 shadow-emerald-500/10",
    "from-orange-500/20 to-yellow-500/20 shadow-orange-500/10",
    "from-rose-500/20 to-red-500/20 shadow-rose-500/10",
];


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Epoch milliseconds at creation, as a string; doubles as the id.
    pub id: String,
    pub text: String,
    pub color: String,
}


/// Owner of the notes list; single writer of the notes slot.
pub struct NotesStore {
    storage: Box<dyn Storage>,
    notes: Vec<Note>,
}

impl NotesStore {
    pub fn new(storage: Box<dyn Storage>) -> NotesStore {
        NotesStore {
            storage,
            notes: Vec::new(),
        }
    }

    /// Load the list from storage; a missing or corrupt slot yields an
    /// empty list.
    pub fn load(&mut self) {
        self.notes = match self.storage.get(NOTES_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(notes) => notes,
                Err(e) => {
                    eprintln!("[urboard] notes parse error: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Prepend a note with the given creation timestamp. Blank text is
    /// ignored; returns whether anything was added.
    pub fn add(&mut self, text: &str, now_ms: u64) -> Result<bool, String> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        let color = COLORS[(now_ms % COLORS.len() as u64) as usize];
        self.notes.insert(
            0,
            Note {
                id: now_ms.to_string(),
                text: text.to_string(),
                color: color.to_string(),
            },
        );
        self.persist()?;
        Ok(true)
    }

    /// Remove a note. Returns whether the id was found.
    pub fn remove(&mut self, id: &str) -> Result<bool, String> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), String> {
        let raw = serde_json::to_string(&self.notes)
            .map_err(|e| format!("Failed to serialize notes: {}", e))?;
        self.storage.set(NOTES_KEY, &raw)
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
