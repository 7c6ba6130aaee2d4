//! Stack navigation between screens.
//!
//! Screens never touch the [`Router`] directly. Draggable icons send a
//! [`Route`] on a [`NavigationSender`]; the app drains the matching receiver
//! once per loop iteration and applies it.

use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use tracing::info;

/// Named screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Earth,
    Moon,
    Galaxy,
}

impl Route {
    /// Destinations reachable from the home screen, in display order
    pub const DESTINATIONS: [Route; 3] = [Route::Earth, Route::Moon, Route::Galaxy];

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Earth => "Earth",
            Route::Moon => "Moon",
            Route::Galaxy => "Galaxy",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Route::Home => "\u{2728}",    // ✨
            Route::Earth => "\u{1F30D}",  // 🌍
            Route::Moon => "\u{1F319}",   // 🌙
            Route::Galaxy => "\u{1F30C}", // 🌌
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Sending half handed to screens
pub type NavigationSender = mpsc::Sender<Route>;
/// Receiving half drained by the app
pub type NavigationReceiver = mpsc::Receiver<Route>;

/// Create the one-way channel screens use to request navigation
pub fn navigation_channel() -> (NavigationSender, NavigationReceiver) {
    mpsc::channel()
}

/// Navigation stack. The bottom entry is always [`Route::Home`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    stack: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    /// The visible screen
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `route`. Returns false if it was already on top.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current() == route {
            return false;
        }
        info!("Navigate: {} -> {}", self.current(), route);
        self.stack.push(route);
        true
    }

    /// Pop the top screen. The root is never popped.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let left = self.stack.pop();
        info!("Back: {:?} -> {}", left, self.current());
        true
    }

    /// Routes from bottom to top
    pub fn stack(&self) -> &[Route] {
        &self.stack
    }
}
