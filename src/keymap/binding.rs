//! A key string from the config file bound to an [`Action`].
//!
//! Key strings are a key name optionally prefixed by modifiers joined with
//! `+`: `"q"`, `"?"`, `"esc"`, `"ctrl+c"`.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Modifier prefixes: config spelling, flag, display form
const MODIFIERS: [(&str, KeyModifiers, &str); 3] = [
    ("ctrl", KeyModifiers::CONTROL, "Ctrl"),
    ("alt", KeyModifiers::ALT, "Alt"),
    ("shift", KeyModifiers::SHIFT, "Shift"),
];

/// Keys written by name: config spelling, code, display form
const NAMED_KEYS: [(&str, KeyCode, &str); 7] = [
    ("esc", KeyCode::Esc, "Esc"),
    ("escape", KeyCode::Esc, "Esc"),
    ("backspace", KeyCode::Backspace, "Backspace"),
    ("enter", KeyCode::Enter, "Enter"),
    ("tab", KeyCode::Tab, "Tab"),
    ("space", KeyCode::Char(' '), "Space"),
    ("delete", KeyCode::Delete, "Del"),
];

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "q", "esc", "ctrl+c")
    pub key: String,
    pub action: Action,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Key code and modifiers, or `None` when the key string is not understood
    pub fn chord(&self) -> Option<(KeyCode, KeyModifiers)> {
        let key = self.key.trim().to_lowercase();
        let mut parts: Vec<&str> = key.split('+').map(str::trim).collect();
        let name = parts.pop()?;

        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            let (_, flag, _) = MODIFIERS.iter().find(|(spelling, _, _)| *spelling == part)?;
            modifiers |= *flag;
        }
        Some((key_code(name)?, modifiers))
    }

    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.chord() == Some((code, modifiers))
    }

    /// How the key is shown in hints and help (e.g., "Ctrl+C")
    pub fn display(&self) -> String {
        self.key
            .trim()
            .to_lowercase()
            .split('+')
            .map(|part| {
                let part = part.trim();
                MODIFIERS
                    .iter()
                    .find(|(spelling, _, _)| *spelling == part)
                    .map(|(_, _, shown)| *shown)
                    .or_else(|| {
                        NAMED_KEYS
                            .iter()
                            .find(|(spelling, _, _)| *spelling == part)
                            .map(|(_, _, shown)| *shown)
                    })
                    .map_or_else(|| part.to_uppercase(), str::to_string)
            })
            .collect::<Vec<_>>()
            .join("+")
    }
}

fn key_code(name: &str) -> Option<KeyCode> {
    if let Some((_, code, _)) = NAMED_KEYS.iter().find(|(spelling, _, _)| *spelling == name) {
        return Some(*code);
    }
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeyCode::Char(c)),
        _ => None,
    }
}
