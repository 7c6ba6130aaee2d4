use crate::keymap::Keymap;
use crate::starfield::DEFAULT_STAR_COUNT;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Highest supported frame rate
pub const MAX_FRAME_RATE: u32 = 240;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of stars behind every screen
    pub star_count: usize,
    /// Fixed seed for a reproducible sky (random when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Text shown in the middle of the home screen
    pub welcome_message: String,
    /// Color theme
    pub theme: ThemeType,
    /// Whether stars pulse gently
    pub twinkle: bool,
    /// Target frames per second while animating
    pub frame_rate: u32,
    /// Width of one terminal cell in gesture pixels
    pub cell_width_px: f64,
    /// Height of one terminal cell in gesture pixels
    pub cell_height_px: f64,
    /// Key binding overrides
    pub keymap: Keymap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            seed: None,
            welcome_message: default_welcome_message(),
            theme: ThemeType::Dark,
            twinkle: true,
            frame_rate: 60,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            keymap: Keymap::default(),
        }
    }
}

fn default_welcome_message() -> String {
    "welcome manny :)".to_string()
}

impl Config {
    /// Load configuration from file, falling back to defaults when it does not exist
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        debug!("Loaded config from {:?}", config_path);
        Ok(config.sanitized())
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Replace out-of-range values with usable ones
    pub fn sanitized(mut self) -> Self {
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            warn!("frame_rate {} out of range, using 60", self.frame_rate);
            self.frame_rate = 60;
        }
        if !(self.cell_width_px.is_finite() && self.cell_width_px > 0.0) {
            warn!("cell_width_px {} is not positive, using 8", self.cell_width_px);
            self.cell_width_px = 8.0;
        }
        if !(self.cell_height_px.is_finite() && self.cell_height_px > 0.0) {
            warn!("cell_height_px {} is not positive, using 16", self.cell_height_px);
            self.cell_height_px = 16.0;
        }
        for binding in self.keymap.invalid_overrides() {
            warn!("Ignoring unparseable key binding {:?}", binding.key);
        }
        self
    }

    /// Frame duration derived from `frame_rate`
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.clamp(1, MAX_FRAME_RATE)))
    }
}
