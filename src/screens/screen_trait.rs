//! Screen trait and associated types.
//!
//! Screens own their state, render themselves, and report what should happen
//! next through a [`ScreenAction`] instead of mutating app state.

use crate::config::Config;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Seconds since the app started (drives twinkling).
    pub elapsed: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(config: &'a Config, elapsed: f64) -> Self {
        Self { config, elapsed }
    }

    /// Twinkle time, if twinkling is enabled
    pub fn twinkle_time(&self) -> Option<f64> {
        self.config.twinkle.then_some(self.elapsed)
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    /// Create a new screen context.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Pop this screen off the navigation stack.
    Back,
    /// Request to quit the application.
    Quit,
    /// Open help overlay.
    ShowHelp,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen {
///     stars: StarField,
/// }
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         frame.render_widget(StarFieldWidget::new(&self.stars), area);
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::None)
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    ///
    /// # Returns
    ///
    /// An action indicating what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Advance animations by `dt` seconds.
    fn tick(&mut self, _dt: f64) {}

    /// Whether the screen needs frames at the full frame rate.
    fn is_animating(&self) -> bool {
        false
    }

    /// Called when the screen is entered (navigated to or uncovered).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen is exited (covered or popped).
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
