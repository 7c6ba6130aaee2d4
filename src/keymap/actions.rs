//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible keyboard actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Quit the application
    Quit,
    /// Pop the current screen
    Back,
    /// Toggle the help overlay
    Help,
}

impl Action {
    /// Every action, in help display order
    pub const ALL: [Action; 3] = [Action::Back, Action::Help, Action::Quit];

    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::Back => "Go back",
            Action::Help => "Show help",
        }
    }
}
