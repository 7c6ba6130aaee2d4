//! Drag/release state machine for a single draggable icon.
//!
//! ```text
//!   Idle ──Active──▶ Dragging ──End──▶ Releasing ──springs at rest──▶ Idle
//!                       ▲  │                │
//!                       └──┘ Active         └──Active──▶ Dragging (re-target)
//! ```
//!
//! A release farther than [`DRAG_THRESHOLD`] from the origin fires the bound
//! navigation callback once, before the spring-back starts.

use super::spring::{Spring, SpringConfig};
use tracing::debug;

/// Release distance (strictly greater than) that counts as a deliberate drag
pub const DRAG_THRESHOLD: f64 = 50.0;

/// Phase of a gesture sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Gesture in progress
    Active,
    /// Pointer released
    End,
}

/// One event from the gesture recognizer.
///
/// Translation is cumulative since the gesture started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub translation_x: f64,
    pub translation_y: f64,
    pub phase: GesturePhase,
}

impl GestureSample {
    pub fn active(translation_x: f64, translation_y: f64) -> Self {
        Self {
            translation_x,
            translation_y,
            phase: GesturePhase::Active,
        }
    }

    pub fn end(translation_x: f64, translation_y: f64) -> Self {
        Self {
            translation_x,
            translation_y,
            phase: GesturePhase::End,
        }
    }

    /// Euclidean length of the translation
    pub fn distance(&self) -> f64 {
        self.translation_x.hypot(self.translation_y)
    }
}

/// Current displacement of the icon from its slot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragOffset {
    pub dx: f64,
    pub dy: f64,
}

impl DragOffset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Controller state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
    Releasing,
}

/// Drag controller wrapping one icon.
///
/// Owns its offset exclusively; controllers never share state.
pub struct DraggableIcon {
    state: DragState,
    offset: DragOffset,
    spring_x: Option<Spring>,
    spring_y: Option<Spring>,
    spring_config: SpringConfig,
    on_navigate: Box<dyn FnMut()>,
}

impl std::fmt::Debug for DraggableIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggableIcon")
            .field("state", &self.state)
            .field("offset", &self.offset)
            .field("spring_x", &self.spring_x)
            .field("spring_y", &self.spring_y)
            .finish_non_exhaustive()
    }
}

impl DraggableIcon {
    /// Create an idle controller bound to a navigation callback
    pub fn new(on_navigate: impl FnMut() + 'static) -> Self {
        Self {
            state: DragState::Idle,
            offset: DragOffset::ZERO,
            spring_x: None,
            spring_y: None,
            spring_config: SpringConfig::ICON_RETURN,
            on_navigate: Box::new(on_navigate),
        }
    }

    /// Use a different spring for the return animation
    pub fn with_spring(mut self, config: SpringConfig) -> Self {
        self.spring_config = config;
        self
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn offset(&self) -> DragOffset {
        self.offset
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    /// Feed one gesture sample.
    ///
    /// Returns true when this sample triggered navigation.
    pub fn handle_sample(&mut self, sample: GestureSample) -> bool {
        match (self.state, sample.phase) {
            (DragState::Idle | DragState::Dragging, GesturePhase::Active) => {
                self.state = DragState::Dragging;
                self.set_offset(sample);
                false
            }
            (DragState::Releasing, GesturePhase::Active) => {
                // A new drag grabs the icon mid-flight
                self.spring_x = None;
                self.spring_y = None;
                self.state = DragState::Dragging;
                self.set_offset(sample);
                false
            }
            (DragState::Dragging, GesturePhase::End) => self.release(sample),
            (DragState::Idle | DragState::Releasing, GesturePhase::End) => false,
        }
    }

    /// Advance the spring-back by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        if self.state != DragState::Releasing {
            return;
        }

        if let Some(spring) = self.spring_x.as_mut() {
            let done = spring.step(dt);
            self.offset.dx = spring.value();
            if done {
                self.spring_x = None;
            }
        }
        if let Some(spring) = self.spring_y.as_mut() {
            let done = spring.step(dt);
            self.offset.dy = spring.value();
            if done {
                self.spring_y = None;
            }
        }

        if self.spring_x.is_none() && self.spring_y.is_none() {
            self.offset = DragOffset::ZERO;
            self.state = DragState::Idle;
        }
    }

    /// Drop any gesture or animation and put the icon back in its slot
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
        self.offset = DragOffset::ZERO;
        self.spring_x = None;
        self.spring_y = None;
    }

    fn set_offset(&mut self, sample: GestureSample) {
        self.offset = DragOffset {
            dx: sample.translation_x,
            dy: sample.translation_y,
        };
    }

    fn release(&mut self, sample: GestureSample) -> bool {
        self.set_offset(sample);
        self.state = DragState::Releasing;

        let distance = sample.distance();
        let navigate = distance > DRAG_THRESHOLD;
        debug!(distance, navigate, "Drag released");
        if navigate {
            (self.on_navigate)();
        }

        self.spring_x = Some(Spring::new(self.offset.dx, 0.0, self.spring_config));
        self.spring_y = Some(Spring::new(self.offset.dy, 0.0, self.spring_config));
        navigate
    }
}
