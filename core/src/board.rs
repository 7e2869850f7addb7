//! Board — central runtime for UrBoard. Dispatches settings, widget,
//! todo, and note commands against the stores.
//!
//! All stores share one injected `Storage`; the board is the single
//! execution context touching them, so every command is a complete
//! synchronous read-modify-write cycle.

use crate::command::Command;
use crate::help;
use crate::response::Response;
use crate::storage::Storage;
use crate::store::SettingsStore;
use crate::types::settings::{Settings, SettingsPatch};
use crate::widgets::notes::NotesStore;
use crate::widgets::todo::TodoStore;
use crate::widgets::WidgetKind;


pub struct Board {
    settings: SettingsStore,
    todos: TodoStore,
    notes: NotesStore,
}


impl Board {
    pub fn new<S: Storage + Clone + 'static>(storage: S) -> Board {
        Board {
            settings: SettingsStore::new(Box::new(storage.clone())),
            todos: TodoStore::new(Box::new(storage.clone())),
            notes: NotesStore::new(Box::new(storage)),
        }
    }

    /// Load every store, detecting the first-run language from the
    /// process environment.
    pub fn load(&mut self) -> Result<(), String> {
        self.settings.load()?;
        self.todos.load();
        self.notes.load();
        Ok(())
    }

    /// Load every store with an explicit locale for first-run language
    /// detection.
    pub fn load_with_locale(&mut self, locale: Option<&str>) -> Result<(), String> {
        self.settings.load_with_locale(locale)?;
        self.todos.load();
        self.notes.load();
        Ok(())
    }

    /// Return a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        self.settings.settings()
    }

    /// The single dispatch method.
    pub fn execute(&mut self, cmd: Command) -> Response {
        match cmd {
            Command::Status => self.cmd_status(),
            Command::Help { topic } => self.cmd_help(topic),
            Command::SettingsShow => self.cmd_settings_show(),
            Command::SettingsUpdate { patch } => self.cmd_settings_update(patch),
            Command::Theme => self.cmd_theme(),
            Command::AccentSet { color } => self.cmd_accent_set(color),
            Command::Lock => self.cmd_set_locked(true),
            Command::Unlock => self.cmd_set_locked(false),
            Command::OnboardDone => self.cmd_onboard_done(),
            Command::WidgetList => self.cmd_widget_list(),
            Command::WidgetToggle { id } => self.cmd_widget_toggle(id),
            Command::TodoList => self.cmd_todo_list(),
            Command::TodoAdd { text } => self.cmd_todo_add(text),
            Command::TodoToggle { id } => self.cmd_todo_toggle(id),
            Command::TodoRemove { id } => self.cmd_todo_remove(id),
            Command::NoteList => self.cmd_note_list(),
            Command::NoteAdd { text } => self.cmd_note_add(text),
            Command::NoteRemove { id } => self.cmd_note_remove(id),
        }
    }

    // -----------------------------------------------------------------------
    // Status / Help
    // -----------------------------------------------------------------------

    fn cmd_status(&self) -> Response {
        let s = self.settings.settings();
        Response::ok(format!(
            "UrBoard status: {} widget(s) active, locked={}, onboarded={}, language={}",
            s.active_widgets.len(),
            s.is_locked,
            s.is_onboarded,
            s.language.code(),
        ))
    }

    fn cmd_help(&self, topic: Option<String>) -> Response {
        Response::ok(help::help_text(topic.as_deref()))
    }

    // -----------------------------------------------------------------------
    // Settings commands
    // -----------------------------------------------------------------------

    fn cmd_settings_show(&self) -> Response {
        match serde_json::to_string_pretty(self.settings.settings()) {
            Ok(json) => Response::ok(json),
            Err(e) => Response::error(format!("Failed to serialize settings: {}", e)),
        }
    }

    fn cmd_settings_update(&mut self, patch: SettingsPatch) -> Response {
        match self.settings.update(patch) {
            Ok(()) => Response::ok("Settings updated"),
            Err(e) => Response::error(e),
        }
    }

    fn cmd_theme(&self) -> Response {
        let theme = self.settings.accent_theme();
        let json = serde_json::json!({
            "accent": self.settings.settings().accent_color,
            "rgb": [theme.r, theme.g, theme.b],
            "contrast": theme.contrast,
        });
        Response::ok(json.to_string())
    }

    fn cmd_accent_set(&mut self, color: String) -> Response {
        let patch = SettingsPatch {
            accent_color: Some(color),
            ..SettingsPatch::default()
        };
        match self.settings.update(patch) {
            Ok(()) => self.cmd_theme(),
            Err(e) => Response::error(e),
        }
    }

    fn cmd_set_locked(&mut self, locked: bool) -> Response {
        let patch = SettingsPatch {
            is_locked: Some(locked),
            ..SettingsPatch::default()
        };
        match self.settings.update(patch) {
            Ok(()) if locked => Response::ok("Grid locked"),
            Ok(()) => Response::ok("Grid unlocked"),
            Err(e) => Response::error(e),
        }
    }

    fn cmd_onboard_done(&mut self) -> Response {
        let patch = SettingsPatch {
            is_onboarded: Some(true),
            ..SettingsPatch::default()
        };
        match self.settings.update(patch) {
            Ok(()) => Response::ok("Onboarding complete"),
            Err(e) => Response::error(e),
        }
    }

    // -----------------------------------------------------------------------
    // Widget commands
    // -----------------------------------------------------------------------

    fn cmd_widget_list(&self) -> Response {
        let active = &self.settings.settings().active_widgets;
        let entries: Vec<serde_json::Value> = WidgetKind::ALL
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "id": kind.id(),
                    "active": active.iter().any(|w| w == kind.id()),
                })
            })
            .collect();
        Response::ok(serde_json::Value::Array(entries).to_string())
    }

    fn cmd_widget_toggle(&mut self, id: String) -> Response {
        if let Err(e) = self.settings.toggle_widget(&id) {
            return Response::error(e);
        }
        let active = self
            .settings
            .settings()
            .active_widgets
            .iter()
            .any(|w| *w == id);
        if active {
            Response::ok(format!("Widget '{}' enabled", id))
        } else {
            Response::ok(format!("Widget '{}' disabled", id))
        }
    }

    // -----------------------------------------------------------------------
    // Todo commands
    // -----------------------------------------------------------------------

    fn cmd_todo_list(&self) -> Response {
        match serde_json::to_string(self.todos.todos()) {
            Ok(json) => Response::ok(json),
            Err(e) => Response::error(format!("Failed to serialize todos: {}", e)),
        }
    }

    fn cmd_todo_add(&mut self, text: String) -> Response {
        match self.todos.add(&text, now_ms()) {
            Ok(true) => Response::ok("Todo added"),
            Ok(false) => Response::error("Todo text is empty"),
            Err(e) => Response::error(e),
        }
    }

    fn cmd_todo_toggle(&mut self, id: u64) -> Response {
        match self.todos.toggle(id) {
            Ok(true) => Response::ok("Todo toggled"),
            Ok(false) => Response::error(format!("No todo with id {}", id)),
            Err(e) => Response::error(e),
        }
    }

    fn cmd_todo_remove(&mut self, id: u64) -> Response {
        match self.todos.remove(id) {
            Ok(true) => Response::ok("Todo removed"),
            Ok(false) => Response::error(format!("No todo with id {}", id)),
            Err(e) => Response::error(e),
        }
    }

    // -----------------------------------------------------------------------
    // Note commands
    // -----------------------------------------------------------------------

    fn cmd_note_list(&self) -> Response {
        match serde_json::to_string(self.notes.notes()) {
            Ok(json) => Response::ok(json),
            Err(e) => Response::error(format!("Failed to serialize notes: {}", e)),
        }
    }

    fn cmd_note_add(&mut self, text: String) -> Response {
        match self.notes.add(&text, now_ms()) {
            Ok(true) => Response::ok("Note added"),
            Ok(false) => Response::error("Note text is empty"),
            Err(e) => Response::error(e),
        }
    }

    fn cmd_note_remove(&mut self, id: String) -> Response {
        match self.notes.remove(&id) {
            Ok(true) => Response::ok("Note removed"),
            Ok(false) => Response::error(format!("No note with id {}", id)),
            Err(e) => Response::error(e),
        }
    }
}


fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::settings::Language;

    fn test_board() -> Board {
        let mut board = Board::new(MemoryStorage::new());
        board.load_with_locale(Some("en")).unwrap();
        board
    }

    fn output(r: &Response) -> &str {
        match r {
            Response::Ok { output } => output,
            Response::Error { message } => message,
        }
    }

    fn is_ok(r: &Response) -> bool {
        matches!(r, Response::Ok { .. })
    }

    #[test]
    fn status_reports_counts() {
        let mut board = test_board();
        let r = board.execute(Command::Status);
        assert!(is_ok(&r));
        assert!(output(&r).contains("0 widget(s) active"));
        assert!(output(&r).contains("locked=false"));
        assert!(output(&r).contains("language=en"));
    }

    #[test]
    fn settings_show_is_valid_json() {
        let mut board = test_board();
        let r = board.execute(Command::SettingsShow);
        assert!(is_ok(&r));
        let parsed: serde_json::Value = serde_json::from_str(output(&r)).unwrap();
        assert_eq!(parsed["accentColor"], "#ff0033");
        assert!(parsed["layouts"]["lg"].is_array());
    }

    #[test]
    fn settings_update_applies_patch() {
        let mut board = test_board();
        let r = board.execute(Command::SettingsUpdate {
            patch: SettingsPatch {
                language: Some(Language::Ru),
                ..SettingsPatch::default()
            },
        });
        assert!(is_ok(&r));
        assert_eq!(board.settings().language, Language::Ru);
    }

    #[test]
    fn theme_reports_derived_values() {
        let mut board = test_board();
        let r = board.execute(Command::Theme);
        let parsed: serde_json::Value = serde_json::from_str(output(&r)).unwrap();
        assert_eq!(parsed["accent"], "#ff0033");
        assert_eq!(parsed["rgb"][0], 255);
        assert_eq!(parsed["rgb"][1], 0);
        assert_eq!(parsed["rgb"][2], 51);
        assert_eq!(parsed["contrast"], "#ffffff");
    }

    #[test]
    fn accent_set_updates_and_reports() {
        let mut board = test_board();
        let r = board.execute(Command::AccentSet {
            color: "#ffffff".into(),
        });
        assert!(is_ok(&r));
        let parsed: serde_json::Value = serde_json::from_str(output(&r)).unwrap();
        assert_eq!(parsed["contrast"], "#000000");
        assert_eq!(board.settings().accent_color, "#ffffff");
    }

    #[test]
    fn lock_and_unlock() {
        let mut board = test_board();
        let r = board.execute(Command::Lock);
        assert!(output(&r).contains("locked"));
        assert!(board.settings().is_locked);
        let r = board.execute(Command::Unlock);
        assert!(output(&r).contains("unlocked"));
        assert!(!board.settings().is_locked);
    }

    #[test]
    fn onboard_done_sets_flag() {
        let mut board = test_board();
        board.execute(Command::OnboardDone);
        assert!(board.settings().is_onboarded);
    }

    #[test]
    fn widget_list_covers_registry() {
        let mut board = test_board();
        board.execute(Command::WidgetToggle { id: "clock".into() });
        let r = board.execute(Command::WidgetList);
        let parsed: serde_json::Value = serde_json::from_str(output(&r)).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), WidgetKind::ALL.len());
        let clock = entries.iter().find(|e| e["id"] == "clock").unwrap();
        assert_eq!(clock["active"], true);
        let todo = entries.iter().find(|e| e["id"] == "todo").unwrap();
        assert_eq!(todo["active"], false);
    }

    #[test]
    fn widget_toggle_reports_direction() {
        let mut board = test_board();
        let r = board.execute(Command::WidgetToggle { id: "notes".into() });
        assert!(output(&r).contains("enabled"));
        let r = board.execute(Command::WidgetToggle { id: "notes".into() });
        assert!(output(&r).contains("disabled"));
        assert!(board.settings().active_widgets.is_empty());
    }

    #[test]
    fn todo_lifecycle() {
        let mut board = test_board();
        let r = board.execute(Command::TodoAdd {
            text: "write tests".into(),
        });
        assert!(is_ok(&r));

        let r = board.execute(Command::TodoList);
        let parsed: serde_json::Value = serde_json::from_str(output(&r)).unwrap();
        let todos = parsed.as_array().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0]["text"], "write tests");
        let id = todos[0]["id"].as_u64().unwrap();

        let r = board.execute(Command::TodoToggle { id });
        assert!(is_ok(&r));
        let r = board.execute(Command::TodoRemove { id });
        assert!(is_ok(&r));

        let r = board.execute(Command::TodoList);
        assert_eq!(output(&r), "[]");
    }

    #[test]
    fn todo_add_blank_is_error() {
        let mut board = test_board();
        let r = board.execute(Command::TodoAdd { text: "  ".into() });
        assert!(!is_ok(&r));
    }

    #[test]
    fn todo_toggle_unknown_is_error() {
        let mut board = test_board();
        let r = board.execute(Command::TodoToggle { id: 404 });
        assert!(!is_ok(&r));
        assert!(output(&r).contains("404"));
    }

    #[test]
    fn note_lifecycle() {
        let mut board = test_board();
        let r = board.execute(Command::NoteAdd {
            text: "remember this".into(),
        });
        assert!(is_ok(&r));

        let r = board.execute(Command::NoteList);
        let parsed: serde_json::Value = serde_json::from_str(output(&r)).unwrap();
        let notes = parsed.as_array().unwrap();
        assert_eq!(notes.len(), 1);
        let id = notes[0]["id"].as_str().unwrap().to_string();

        let r = board.execute(Command::NoteRemove { id });
        assert!(is_ok(&r));
        let r = board.execute(Command::NoteList);
        assert_eq!(output(&r), "[]");
    }

    #[test]
    fn note_remove_unknown_is_error() {
        let mut board = test_board();
        let r = board.execute(Command::NoteRemove { id: "nope".into() });
        assert!(!is_ok(&r));
    }

    #[test]
    fn help_overview() {
        let mut board = test_board();
        let r = board.execute(Command::Help { topic: None });
        assert!(is_ok(&r));
        assert!(output(&r).contains("urboard"));
    }

    #[test]
    fn mutations_shared_across_stores() {
        // Settings and widget data live in the same backing storage.
        let backing = MemoryStorage::new();
        let mut board = Board::new(backing.clone());
        board.load_with_locale(Some("en")).unwrap();
        board.execute(Command::WidgetToggle { id: "todo".into() });
        board.execute(Command::TodoAdd {
            text: "carry over".into(),
        });

        let mut fresh = Board::new(backing);
        fresh.load_with_locale(Some("en")).unwrap();
        assert_eq!(fresh.settings().active_widgets, vec!["todo".to_string()]);
        let r = fresh.execute(Command::TodoList);
        assert!(output(&r).contains("carry over"));
    }
}
