//! Type-safe key bindings with help text.
//!
//! A [`Binding`] groups one or more [`KeyPress`] values under a single action
//! and carries the short help shown to users. Components expose their bindings
//! through the [`KeyMap`] trait so help views can be generated from them.
//!
//! ```rust
//! use bubbletea_flatlist::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let down = Binding::new(vec![KeyCode::Down, KeyCode::Char('j')]).with_help("↓/j", "down");
//! let half = Binding::new(vec!["d", "ctrl+d"]).with_help("d/ctrl+d", "½ page down");
//!
//! let msg = KeyMsg { key: KeyCode::Char('d'), modifiers: KeyModifiers::CONTROL };
//! assert!(half.matches(&msg));
//! assert!(!down.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key together with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Returns true if `msg` is this key press.
    ///
    /// Shift is ignored for character keys because terminals report `G` as
    /// `Char('G')` with or without the shift flag.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if let KeyCode::Char(_) = self.code {
            self.modifiers.difference(KeyModifiers::SHIFT)
                == msg.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            self.modifiers == msg.modifiers
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl From<&str> for KeyPress {
    /// Parses strings such as `"j"`, `"pgdown"`, `"ctrl+u"` or `"shift+tab"`.
    ///
    /// Unknown names fall back to `KeyCode::Null`, which never matches input.
    fn from(s: &str) -> Self {
        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        // "+" alone or "ctrl++" name the plus key itself
        let name = if s.ends_with("++") || s == "+" {
            parts.retain(|p| !p.is_empty());
            "+"
        } else {
            parts.pop().unwrap_or_default()
        };

        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "option" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => {}
            }
        }

        Self {
            code: parse_key_name(name),
            modifiers,
        }
    }
}

fn parse_key_name(name: &str) -> KeyCode {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return KeyCode::Char(c);
    }
    match name.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pgdn" | "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        _ => KeyCode::Null,
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"↓/j"`.
    pub key: String,
    /// Action description, e.g. `"down"`.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding from anything convertible to [`KeyPress`].
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// The keys that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding currently responds to input.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the binding is enabled and any of its keys is `msg`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Exposes a component's bindings for help rendering.
pub trait KeyMap {
    /// Essential bindings, shown on one line.
    fn short_help(&self) -> Vec<&Binding>;
    /// All bindings grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders the short help of a key map as `"key desc • key desc"`.
///
/// Disabled bindings are skipped.
pub fn short_help_view<K: KeyMap + ?Sized>(keymap: &K) -> String {
    keymap
        .short_help()
        .into_iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
