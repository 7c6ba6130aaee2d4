//! Starfield - a star-filled terminal home screen with planets you can fling
//!
//! The home screen shows a twinkling star field, a welcome label and three
//! draggable destination icons. Dragging an icon further than
//! [`gesture::DRAG_THRESHOLD`] pixels navigates to its screen; shorter drags
//! spring back into place.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod gesture;
pub mod keymap;
pub mod navigation;
pub mod screens;
pub mod starfield;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::{App, AppState};
pub use config::Config;
pub use gesture::{DragState, DraggableIcon, GestureSample};
pub use navigation::{Route, Router};
pub use starfield::{Star, StarField};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap};
