//! UrBoard CLI — the command-line entry point for the dashboard core.

use std::path::PathBuf;
use std::process;

use urboard_core::board::Board;
use urboard_core::command::Command;
use urboard_core::response::Response;
use urboard_core::storage::FileStorage;
use urboard_core::types::settings::SettingsPatch;


fn main() {
    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("urboard: {}", e);
            process::exit(1);
        }
    };

    let storage = FileStorage::new(resolve_config_dir());
    let mut board = Board::new(storage);
    if let Err(e) = board.load() {
        eprintln!("urboard: {}", e);
        process::exit(1);
    }

    match board.execute(cmd) {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => {
            eprintln!("urboard error: {}", message);
            process::exit(1);
        }
    }
}


fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("URBOARD_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(base) = dirs::config_dir() {
        return base.join("urboard");
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("urboard")
}


fn parse_args(args: &[&str]) -> Result<Command, String> {
    if args.is_empty() {
        return Err("No command specified. Run 'urboard help' for usage.".into());
    }

    match args[0] {
        "status" => Ok(Command::Status),
        "theme" => Ok(Command::Theme),
        "accent" => {
            if args.len() < 2 {
                return Err("Usage: urboard accent <#rrggbb>".into());
            }
            Ok(Command::AccentSet {
                color: args[1].into(),
            })
        }
        "lock" => Ok(Command::Lock),
        "unlock" => Ok(Command::Unlock),
        "onboard" => Ok(Command::OnboardDone),
        "help" => Ok(Command::Help {
            topic: args.get(1).map(|s| s.to_string()),
        }),
        "settings" => parse_settings(args),
        "widget" => parse_widget(args),
        "todo" => parse_todo(args),
        "note" => parse_note(args),
        _ => Err(format!(
            "Unknown command: '{}'. Run 'urboard help' for usage.",
            args[0]
        )),
    }
}


fn parse_settings(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: urboard settings <show|update> ...".into());
    }
    match args[1] {
        "show" => Ok(Command::SettingsShow),
        "update" => {
            if args.len() < 3 {
                return Err("Usage: urboard settings update <json>".into());
            }
            let patch: SettingsPatch = serde_json::from_str(args[2])
                .map_err(|e| format!("Invalid settings patch: {}", e))?;
            Ok(Command::SettingsUpdate { patch })
        }
        _ => Err(format!("Unknown settings subcommand: '{}'", args[1])),
    }
}


fn parse_widget(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: urboard widget <list|toggle> ...".into());
    }
    match args[1] {
        "list" => Ok(Command::WidgetList),
        "toggle" => {
            if args.len() < 3 {
                return Err("Usage: urboard widget toggle <id>".into());
            }
            Ok(Command::WidgetToggle {
                id: args[2].into(),
            })
        }
        _ => Err(format!("Unknown widget subcommand: '{}'", args[1])),
    }
}


fn parse_todo(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: urboard todo <list|add|toggle|remove> ...".into());
    }
    match args[1] {
        "list" => Ok(Command::TodoList),
        "add" => {
            if args.len() < 3 {
                return Err("Usage: urboard todo add <text>".into());
            }
            Ok(Command::TodoAdd {
                text: args[2..].join(" "),
            })
        }
        "toggle" => {
            let id = parse_id(args, "Usage: urboard todo toggle <id>")?;
            Ok(Command::TodoToggle { id })
        }
        "remove" => {
            let id = parse_id(args, "Usage: urboard todo remove <id>")?;
            Ok(Command::TodoRemove { id })
        }
        _ => Err(format!("Unknown todo subcommand: '{}'", args[1])),
    }
}


fn parse_note(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: urboard note <list|add|remove> ...".into());
    }
    match args[1] {
        "list" => Ok(Command::NoteList),
        "add" => {
            if args.len() < 3 {
                return Err("Usage: urboard note add <text>".into());
            }
            Ok(Command::NoteAdd {
                text: args[2..].join(" "),
            })
        }
        "remove" => {
            if args.len() < 3 {
                return Err("Usage: urboard note remove <id>".into());
            }
            Ok(Command::NoteRemove {
                id: args[2].into(),
            })
        }
        _ => Err(format!("Unknown note subcommand: '{}'", args[1])),
    }
}


fn parse_id(args: &[&str], usage: &str) -> Result<u64, String> {
    let raw = args.get(2).ok_or_else(|| usage.to_string())?;
    raw.parse::<u64>()
        .map_err(|_| format!("Invalid id '{}': expected a number", raw))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_error() {
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn status_parses() {
        assert_eq!(parse_args(&["status"]).unwrap(), Command::Status);
    }

    #[test]
    fn accent_requires_color() {
        assert!(parse_args(&["accent"]).is_err());
        assert_eq!(
            parse_args(&["accent", "#123456"]).unwrap(),
            Command::AccentSet {
                color: "#123456".into()
            }
        );
    }

    #[test]
    fn widget_toggle_parses() {
        assert_eq!(
            parse_args(&["widget", "toggle", "clock"]).unwrap(),
            Command::WidgetToggle { id: "clock".into() }
        );
    }

    #[test]
    fn settings_update_parses_patch() {
        let cmd = parse_args(&["settings", "update", r#"{"weatherCity":"Bursa"}"#]).unwrap();
        match cmd {
            Command::SettingsUpdate { patch } => {
                assert_eq!(patch.weather_city.as_deref(), Some("Bursa"));
            }
            other => panic!("expected SettingsUpdate, got {:?}", other),
        }
    }

    #[test]
    fn settings_update_rejects_bad_json() {
        assert!(parse_args(&["settings", "update", "{nope"]).is_err());
    }

    #[test]
    fn todo_add_joins_words() {
        assert_eq!(
            parse_args(&["todo", "add", "water", "the", "plants"]).unwrap(),
            Command::TodoAdd {
                text: "water the plants".into()
            }
        );
    }

    #[test]
    fn todo_toggle_wants_numeric_id() {
        assert!(parse_args(&["todo", "toggle", "abc"]).is_err());
        assert_eq!(
            parse_args(&["todo", "toggle", "42"]).unwrap(),
            Command::TodoToggle { id: 42 }
        );
    }

    #[test]
    fn note_remove_parses() {
        assert_eq!(
            parse_args(&["note", "remove", "123"]).unwrap(),
            Command::NoteRemove { id: "123".into() }
        );
    }

    #[test]
    fn unknown_command_is_error() {
        let err = parse_args(&["dance"]).unwrap_err();
        assert!(err.contains("Unknown command"));
    }
}
