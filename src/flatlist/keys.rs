//! Key bindings for scrolling a list.
//!
//! ## Default keys
//!
//! - **Lines**: `↑/k` (up), `↓/j` (down)
//! - **Pages**: `f/pgdn/space` (page down), `b/pgup` (page up)
//! - **Half pages**: `d/ctrl+d`, `u/ctrl+u`
//! - **Ends**: `g/home` (top), `G/end` (bottom)
//!
//! ```rust
//! use bubbletea_flatlist::flatlist::FlatListKeyMap;
//! use bubbletea_flatlist::key::KeyMap;
//!
//! let keymap = FlatListKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 4);
//! ```

use crate::key::{self, KeyMap};
use crossterm::event::KeyCode;

/// Key bindings used by the list's `handle_key`.
#[derive(Debug, Clone)]
pub struct FlatListKeyMap {
    /// Scroll up one line.
    pub line_up: key::Binding,
    /// Scroll down one line.
    pub line_down: key::Binding,
    /// Scroll up one viewport.
    pub page_up: key::Binding,
    /// Scroll down one viewport.
    pub page_down: key::Binding,
    /// Scroll up half a viewport.
    pub half_page_up: key::Binding,
    /// Scroll down half a viewport.
    pub half_page_down: key::Binding,
    /// Jump to the first row.
    pub go_to_top: key::Binding,
    /// Jump to the last row.
    pub go_to_bottom: key::Binding,
}

impl Default for FlatListKeyMap {
    fn default() -> Self {
        Self {
            line_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            line_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            page_up: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Char('b')])
                .with_help("b/pgup", "page up"),
            page_down: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Char(' '),
                KeyCode::Char('f'),
            ])
            .with_help("f/pgdn/space", "page down"),
            half_page_up: key::Binding::new(vec!["u", "ctrl+u"]).with_help("u/ctrl+u", "½ page up"),
            half_page_down: key::Binding::new(vec!["d", "ctrl+d"])
                .with_help("d/ctrl+d", "½ page down"),
            go_to_top: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to top"),
            go_to_bottom: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to bottom"),
        }
    }
}

impl KeyMap for FlatListKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.line_up, &self.line_down, &self.page_up, &self.page_down]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.line_up, &self.line_down],
            vec![&self.page_up, &self.page_down],
            vec![&self.half_page_up, &self.half_page_down],
            vec![&self.go_to_top, &self.go_to_bottom],
        ]
    }
}
