//! Keymap configuration module
//!
//! Default key bindings plus user overrides from the config file.

mod actions;
mod binding;

pub use actions::Action;
pub use binding::KeyBinding;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration: user overrides on top of the default bindings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keymap {
    /// User-defined overrides (checked before defaults)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Built-in bindings
    pub fn defaults() -> Vec<KeyBinding> {
        vec![
            KeyBinding::new("q", Action::Quit),
            KeyBinding::new("ctrl+c", Action::Quit),
            KeyBinding::new("esc", Action::Back),
            KeyBinding::new("backspace", Action::Back),
            KeyBinding::new("?", Action::Help),
        ]
    }

    /// Get the action for a key event, checking overrides first then defaults.
    /// Shift is ignored for printable characters since terminals disagree on it.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let modifiers = match code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + defaults) for display in help.
    /// Valid overrides shadow default bindings for the same action.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        for binding in Self::defaults() {
            let is_overridden = self
                .overrides
                .iter()
                .any(|o| o.action == binding.action && o.chord().is_some());
            if !is_overridden {
                bindings.push(binding);
            }
        }
        bindings
    }

    /// Display string for every key bound to `action`, e.g. "Esc/Backspace"
    pub fn key_display_for_action(&self, action: Action) -> String {
        let keys: Vec<String> = self
            .all_bindings()
            .iter()
            .filter(|b| b.action == action)
            .map(KeyBinding::display)
            .collect();
        if keys.is_empty() {
            format!("{:?}", action)
        } else {
            keys.join("/")
        }
    }

    /// Overrides whose key string fails to parse
    pub fn invalid_overrides(&self) -> Vec<&KeyBinding> {
        self.overrides.iter().filter(|b| b.chord().is_none()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert!(keymap.overrides.is_empty());
        assert_eq!(keymap.all_bindings().len(), Keymap::defaults().len());
    }

    #[test]
    fn test_get_action_from_defaults() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Esc, KeyModifiers::NONE),
            Some(Action::Back)
        );
        assert_eq!(keymap.get_action(KeyCode::Char('z'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_shifted_question_mark_opens_help() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_override_shadows_default() {
        let keymap = Keymap {
            overrides: vec![KeyBinding::new("x", Action::Quit)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        // 'q' is no longer bound once Quit is overridden
        assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
        assert_eq!(keymap.key_display_for_action(Action::Quit), "X");
    }

    #[test]
    fn test_key_display_joins_multiple_keys() {
        let keymap = Keymap::default();
        assert_eq!(keymap.key_display_for_action(Action::Back), "Esc/Backspace");
    }

    #[test]
    fn test_invalid_overrides_reported() {
        let keymap = Keymap {
            overrides: vec![
                KeyBinding::new("hyper+q", Action::Quit),
                KeyBinding::new("b", Action::Back),
            ],
        };
        let invalid = keymap.invalid_overrides();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].key, "hyper+q");
    }
}
