//! Command — the typed interface for all UrBoard operations.
//!
//! Settings mutations flow through `settings.update` (a typed partial
//! patch) or the narrower convenience commands; todo and note commands
//! operate on the widget data stores.

use serde::{Deserialize, Serialize};

use crate::types::settings::SettingsPatch;


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    // -----------------------------------------------------------------
    // Top-level commands
    // -----------------------------------------------------------------

    #[serde(rename = "status")]
    Status,

    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },

    // -----------------------------------------------------------------
    // Settings commands
    // -----------------------------------------------------------------

    #[serde(rename = "settings.show")]
    SettingsShow,

    #[serde(rename = "settings.update")]
    SettingsUpdate {
        patch: SettingsPatch,
    },

    #[serde(rename = "theme")]
    Theme,

    #[serde(rename = "accent")]
    AccentSet {
        color: String,
    },

    #[serde(rename = "lock")]
    Lock,

    #[serde(rename = "unlock")]
    Unlock,

    #[serde(rename = "onboard.done")]
    OnboardDone,

    // -----------------------------------------------------------------
    // Widget commands
    // -----------------------------------------------------------------

    #[serde(rename = "widget.list")]
    WidgetList,

    #[serde(rename = "widget.toggle")]
    WidgetToggle {
        id: String,
    },

    // -----------------------------------------------------------------
    // Todo commands
    // -----------------------------------------------------------------

    #[serde(rename = "todo.list")]
    TodoList,

    #[serde(rename = "todo.add")]
    TodoAdd {
        text: String,
    },

    #[serde(rename = "todo.toggle")]
    TodoToggle {
        id: u64,
    },

    #[serde(rename = "todo.remove")]
    TodoRemove {
        id: u64,
    },

    // -----------------------------------------------------------------
    // Note commands
    // -----------------------------------------------------------------

    #[serde(rename = "note.list")]
    NoteList,

    #[serde(rename = "note.add")]
    NoteAdd {
        text: String,
    },

    #[serde(rename = "note.remove")]
    NoteRemove {
        id: String,
    },
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        let cmd = Command::Status;
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"status\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn settings_update_round_trip() {
        let cmd = Command::SettingsUpdate {
            patch: SettingsPatch {
                weather_city: Some("Izmir".into()),
                ..SettingsPatch::default()
            },
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"settings.update\""));
        assert!(json.contains("\"weatherCity\":\"Izmir\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn widget_toggle_round_trip() {
        let cmd = Command::WidgetToggle { id: "clock".into() };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"widget.toggle\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn accent_round_trip() {
        let cmd = Command::AccentSet {
            color: "#aabbcc".into(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"accent\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn todo_add_round_trip() {
        let cmd = Command::TodoAdd {
            text: "water the plants".into(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"todo.add\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn note_remove_round_trip() {
        let cmd = Command::NoteRemove { id: "123".into() };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"note.remove\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn help_topic_omitted_when_none() {
        let cmd = Command::Help { topic: None };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(!json.contains("topic"));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
