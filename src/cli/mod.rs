//! Command-line interface.
//!
//! With no subcommand the TUI is launched; the flags on [`Cli`] override the
//! config file for that session only.

pub mod completions;
pub mod stars;

use crate::config::Config;
use crate::starfield::StarField;
use crate::styles::ThemeType;
use crate::utils::{format_path_for_display, get_config_path};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// A starfield in your terminal with planets you can fling
#[derive(Parser, Debug)]
#[command(name = "starfield", version, about = "A starfield in your terminal with planets you can fling", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub session: SessionOverrides,
}

/// Per-session overrides of config values
#[derive(Args, Debug, Default, Clone)]
pub struct SessionOverrides {
    /// Number of stars
    #[arg(long = "stars", value_name = "N")]
    pub star_count: Option<usize>,
    /// Seed for a reproducible sky
    #[arg(long)]
    pub seed: Option<u64>,
    /// Color theme (dark, light, nocolor)
    #[arg(long)]
    pub theme: Option<String>,
    /// Keep stars still
    #[arg(long)]
    pub no_twinkle: bool,
}

impl SessionOverrides {
    /// Apply the overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(count) = self.star_count {
            config.star_count = count;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.parse::<ThemeType>().unwrap_or_default();
        }
        if self.no_twinkle {
            config.twinkle = false;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a generated star field
    Stars {
        /// Number of stars (defaults to the configured count)
        #[arg(short, long)]
        count: Option<usize>,
        /// Width of the sky in pixels
        #[arg(long, default_value_t = 390.0)]
        width: f64,
        /// Height of the sky in pixels
        #[arg(long, default_value_t = 844.0)]
        height: f64,
        /// Seed for a reproducible sky
        #[arg(long)]
        seed: Option<u64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write the default config if none exists yet
        #[arg(long)]
        init: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Stars {
                count,
                width,
                height,
                seed,
                json,
            }) => Self::cmd_stars(count, width, height, seed, json),
            Some(Commands::Config { init }) => Self::cmd_config(init),
            Some(Commands::Completions { shell }) => completions::generate(shell),
            None => {
                // No command provided, launch TUI
                Ok(())
            }
        }
    }

    fn cmd_stars(count: Option<usize>, width: f64, height: f64, seed: Option<u64>, json: bool) -> Result<()> {
        let config = Config::load(&get_config_path()).context("Failed to load configuration")?;
        let count = count.unwrap_or(config.star_count);
        let (width, height) = sky_size(width, height)?;
        let field = StarField::generate(count, width, height, seed.or(config.seed));
        stars::write_stars(&field, json, &mut std::io::stdout().lock())
    }

    fn cmd_config(init: bool) -> Result<()> {
        let config_path = get_config_path();
        let display_path = format_path_for_display(&config_path);

        if init {
            if config_path.exists() {
                println!("Config already exists at {}", display_path);
            } else {
                Config::default().save(&config_path)?;
                println!("Wrote default config to {}", display_path);
            }
            return Ok(());
        }

        let config = Config::load(&config_path).context("Failed to load configuration")?;
        if config_path.exists() {
            println!("# {}", display_path);
        } else {
            println!("# {} (not created yet, showing defaults)", display_path);
        }
        print!(
            "{}",
            toml::to_string_pretty(&config).context("Failed to serialize config")?
        );
        Ok(())
    }
}

/// Validate `stars --width/--height`; negative sizes clamp to an empty sky
fn sky_size(width: f64, height: f64) -> Result<(f64, f64)> {
    if !width.is_finite() || !height.is_finite() {
        bail!("Sky size must be finite, got {}x{}", width, height);
    }
    Ok((width.max(0.0), height.max(0.0)))
}
