//! Todo store — the todo widget's persisted list.
//!
//! Lives in its own storage slot beside the settings. Same write-through
//! discipline: every mutation serializes the whole list back. A corrupt
//! slot loads as an empty list, logged, never an error.

use serde::{Deserialize, Serialize};

use crate::storage::{Storage, TODOS_KEY};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Epoch milliseconds at creation; doubles as the id.
    pub id: u64,
    pub text: String,
    pub completed: bool,
}


/// Owner of the todo list; single writer of the todos slot.
pub struct TodoStore {
    storage: Box<dyn Storage>,
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new(storage: Box<dyn Storage>) -> TodoStore {
        TodoStore {
            storage,
            todos: Vec::new(),
        }
    }

    /// Load the list from storage; a missing or corrupt slot yields an
    /// empty list.
    pub fn load(&mut self) {
        self.todos = match self.storage.get(TODOS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(todos) => todos,
                Err(e) => {
                    eprintln!("[urboard] todos parse error: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Append a todo with the given creation timestamp. Blank text is
    /// ignored; returns whether anything was added.
    pub fn add(&mut self, text: &str, now_ms: u64) -> Result<bool, String> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        self.todos.push(Todo {
            id: now_ms,
            text: text.to_string(),
            completed: false,
        });
        self.persist()?;
        Ok(true)
    }

    /// Flip a todo's completed flag. Returns whether the id was found.
    pub fn toggle(&mut self, id: u64) -> Result<bool, String> {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a todo. Returns whether the id was found.
    pub fn remove(&mut self, id: u64) -> Result<bool, String> {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), String> {
        let raw = serde_json::to_string(&self.todos)
            .map_err(|e| format!("Failed to serialize todos: {}", e))?;
        self.storage.set(TODOS_KEY, &raw)
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
