//! Default grid configuration — one placement per widget per breakpoint.
//!
//! This is the authoritative baseline that saved layouts are reconciled
//! against on every load. It never mutates at runtime; shipping a new
//! widget means adding its row here, and reconciliation supplies it to
//! existing users on their next load.

use crate::types::layout::{Layouts, Placement};


fn p(id: &str, x: u32, y: u32, w: u32, h: u32) -> Placement {
    Placement::new(id, x, y, w, h)
}


/// The hardcoded default layout table.
pub fn default_layouts() -> Layouts {
    Layouts {
        lg: vec![
            p("clock", 0, 0, 4, 4),
            p("weather", 4, 0, 4, 4),
            p("links", 8, 0, 4, 4),
            p("spotify", 0, 4, 4, 4),
            p("todo", 4, 4, 4, 6),
            p("pomodoro", 8, 4, 4, 6),
            p("notes", 0, 8, 4, 6),
        ],
        md: vec![
            p("clock", 0, 0, 5, 4),
            p("weather", 5, 0, 5, 4),
            p("links", 0, 4, 5, 4),
            p("spotify", 5, 4, 5, 4),
            p("todo", 0, 8, 5, 6),
            p("pomodoro", 5, 8, 5, 6),
            p("notes", 0, 14, 5, 6),
        ],
        sm: vec![
            p("clock", 0, 0, 6, 4),
            p("weather", 0, 4, 3, 4),
            p("links", 3, 4, 3, 4),
            p("spotify", 0, 8, 3, 4),
            p("todo", 3, 8, 3, 6),
            p("pomodoro", 0, 12, 3, 6),
            p("notes", 3, 14, 3, 6),
        ],
        xs: vec![
            p("clock", 0, 0, 4, 4),
            p("weather", 0, 4, 2, 4),
            p("links", 2, 4, 2, 4),
            p("spotify", 0, 8, 2, 4),
            p("todo", 0, 12, 2, 6),
            p("pomodoro", 0, 18, 2, 6),
            p("notes", 0, 24, 2, 6),
        ],
        xxs: vec![
            p("clock", 0, 0, 2, 4),
            p("weather", 0, 4, 2, 4),
            p("links", 0, 8, 2, 4),
            p("spotify", 0, 12, 2, 4),
            p("todo", 0, 16, 2, 6),
            p("pomodoro", 0, 22, 2, 6),
            p("notes", 0, 28, 2, 6),
        ],
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
