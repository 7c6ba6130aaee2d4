// Reusable UI widgets

pub mod icon;
pub mod star_field;
pub mod welcome;

pub use icon::IconWidget;
pub use star_field::StarFieldWidget;
pub use welcome::WelcomeLabel;
