pub mod footer;
pub mod help_overlay;

pub use footer::Footer;
pub use help_overlay::HelpOverlay;
