pub mod layout;
pub mod path;

pub use layout::{center_popup, offset_rect};
pub use path::{format_path_for_display, get_config_dir, get_config_path, get_home_dir, get_log_dir};
