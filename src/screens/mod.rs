//! Screen controllers for the application.
//!
//! Each screen owns its state and handles both rendering and events.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                         App                           │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │  Router stack:  Home ▸ Moon ▸ ...               │  │
//! │  │  top of stack receives events and is drawn      │  │
//! │  └────────────────────────────────────────────────┘  │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │               Screen Trait                      │  │
//! │  │  - render(frame, area, context)                │  │
//! │  │  - handle_event(event, context) -> Action      │  │
//! │  │  - tick(dt) / is_animating()                   │  │
//! │  └────────────────────────────────────────────────┘  │
//! │        ▲ Route over mpsc (from draggable icons)      │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod detail;
pub mod home;
pub mod screen_trait;

pub use detail::DetailScreen;
pub use home::HomeScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
