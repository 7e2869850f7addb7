//! Help system for UrBoard commands.

pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => {
            if let Some(text) = command_help(t) {
                return text;
            }
            if let Some(text) = group_help(t) {
                return text;
            }
            format!(
                "Unknown help topic: '{}'. Run 'urboard help' for a list of commands.",
                t
            )
        }
    }
}


fn overview() -> String {
    "\
urboard — UrBoard command-line interface

Usage: urboard <command> [args...]

Commands:
  status                     Show dashboard status
  theme                      Show derived accent values
  accent <color>             Set the accent color (hex)
  lock / unlock              Toggle grid editing
  onboard                    Mark onboarding complete
  help [topic]               Show help

Settings commands:
  settings show              Print the full settings record
  settings update <json>     Apply a partial settings patch

Widget commands:
  widget list                List known widgets and their state
  widget toggle <id>         Enable or disable a widget

Todo commands:
  todo list                  List todos
  todo add <text>            Add a todo
  todo toggle <id>           Toggle a todo's completed flag
  todo remove <id>           Delete a todo

Note commands:
  note list                  List notes
  note add <text>            Add a note
  note remove <id>           Delete a note

Run 'urboard help <command>' for detailed help on a specific command."
        .into()
}


fn group_help(group: &str) -> Option<String> {
    let text = match group {
        "settings" => "\
Settings commands — read and mutate the persisted configuration

  settings show
    Print the full settings record as JSON.

  settings update <json>
    Apply a partial patch, e.g. '{\"weatherCity\":\"Istanbul\"}'.
    Known fields replace their current values; unknown keys are ignored.",

        "widget" => "\
Widget commands — manage the active widget set

  widget list
    List every known widget id with its active state.

  widget toggle <id>
    Enable a widget (appends to the active set) or disable it.
    Ids: clock, weather, links, spotify, todo, pomodoro, notes.",

        "todo" => "\
Todo commands — the todo widget's list

  todo list                  List todos as JSON
  todo add <text>            Add a todo (blank text is rejected)
  todo toggle <id>           Toggle completion by numeric id
  todo remove <id>           Delete by numeric id",

        "note" => "\
Note commands — the sticky-notes widget's list

  note list                  List notes as JSON (newest first)
  note add <text>            Add a note
  note remove <id>           Delete by id",

        _ => return None,
    };
    Some(text.into())
}


fn command_help(command: &str) -> Option<String> {
    let text = match command {
        "status" => "urboard status — show dashboard status\n\nUsage: urboard status",
        "theme" => "urboard theme — show derived accent values\n\nUsage: urboard theme",
        "accent" => "urboard accent — set the accent color\n\nUsage: urboard accent <#rrggbb>",
        "lock" => "urboard lock — make the grid read-only\n\nUsage: urboard lock",
        "unlock" => "urboard unlock — allow grid editing\n\nUsage: urboard unlock",
        "onboard" => "urboard onboard — mark onboarding complete\n\nUsage: urboard onboard",
        "help" => "urboard help — show help\n\nUsage: urboard help [topic]",
        "settings.show" => "urboard settings show — print the settings record\n\nUsage: urboard settings show",
        "settings.update" => "urboard settings update — apply a partial patch\n\nUsage: urboard settings update <json>",
        "widget.list" => "urboard widget list — list known widgets\n\nUsage: urboard widget list",
        "widget.toggle" => "urboard widget toggle — enable or disable a widget\n\nUsage: urboard widget toggle <id>",
        "todo.list" => "urboard todo list — list todos\n\nUsage: urboard todo list",
        "todo.add" => "urboard todo add — add a todo\n\nUsage: urboard todo add <text>",
        "todo.toggle" => "urboard todo toggle — toggle completion\n\nUsage: urboard todo toggle <id>",
        "todo.remove" => "urboard todo remove — delete a todo\n\nUsage: urboard todo remove <id>",
        "note.list" => "urboard note list — list notes\n\nUsage: urboard note list",
        "note.add" => "urboard note add — add a note\n\nUsage: urboard note add <text>",
        "note.remove" => "urboard note remove — delete a note\n\nUsage: urboard note remove <id>",
        _ => return None,
    };
    Some(text.into())
}
