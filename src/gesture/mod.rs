//! Drag gestures and the spring-back animation that follows them.
//!
//! The host feeds [`GestureSample`]s into a [`DraggableIcon`] and calls
//! [`DraggableIcon::tick`] once per frame. Rendering only reads the offset.

pub mod draggable;
pub mod spring;

pub use draggable::{DragOffset, DragState, DraggableIcon, GesturePhase, GestureSample, DRAG_THRESHOLD};
pub use spring::{Spring, SpringConfig};
