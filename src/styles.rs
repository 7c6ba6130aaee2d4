//! Theme and style system for starfield
//!
//! Provides consistent styling across screens with support for dark, light
//! and colorless terminals.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    background: Color::Rgb(10, 10, 26),
    star: Color::Rgb(255, 255, 255),
    text: Color::White,
    glow: Color::Rgb(100, 150, 255),
    primary: Color::Cyan,
    text_muted: Color::DarkGray,
    border: Color::Rgb(60, 70, 110),
    border_focused: Color::Rgb(100, 150, 255),
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    #[serde(alias = "no-color", alias = "no_color")]
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,

    /// Sky behind the stars
    pub background: Color,
    /// Brightest star color; dimmer stars are blended toward the background
    pub star: Color,
    /// Main text color
    pub text: Color,
    /// Halo color around the welcome label
    pub glow: Color,
    /// Accent for titles and key hints
    pub primary: Color,
    /// Muted/secondary text
    pub text_muted: Color,
    /// Icon border at rest
    pub border: Color,
    /// Icon border while dragged
    pub border_focused: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Night sky
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            background: Color::Rgb(10, 10, 26),
            star: Color::Rgb(255, 255, 255),
            text: Color::White,
            glow: Color::Rgb(100, 150, 255),
            primary: Color::Cyan,
            text_muted: Color::DarkGray,
            border: Color::Rgb(60, 70, 110),
            border_focused: Color::Rgb(100, 150, 255),
        }
    }

    /// Daylight variant: dark "stars" on a pale sky
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            background: Color::Rgb(235, 238, 250),
            star: Color::Rgb(30, 30, 60),
            text: Color::Black,
            glow: Color::Rgb(40, 80, 200),
            primary: Color::Blue,
            text_muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Blue,
        }
    }

    /// No-color theme - for terminals where colors should be disabled
    ///
    /// Note: In this mode, style helpers below avoid setting fg/bg so the UI
    /// uses the terminal defaults without emitting color codes.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            background: Color::Reset,
            star: Color::Reset,
            text: Color::Reset,
            glow: Color::Reset,
            primary: Color::Reset,
            text_muted: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
        }
    }

    // === Style Helpers ===

    /// Background style
    pub fn background_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default();
        }
        Style::default().bg(self.background)
    }

    /// Style for a star of the given opacity (0.0 - 1.0)
    pub fn star_style(&self, opacity: f64) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return if opacity < 0.5 {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
        }
        Style::default()
            .fg(blend(self.background, self.star, opacity))
            .bg(self.background)
    }

    /// Style for the welcome label
    pub fn welcome_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.text)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the halo drawn around the welcome label
    pub fn glow_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default()
            .fg(self.glow)
            .bg(self.background)
    }

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default();
        }
        Style::default().fg(self.border)
    }
}

/// Linear blend of two RGB colors; non-RGB colors fall back to `to`
fn blend(from: Color, to: Color, amount: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = amount.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("nocolor".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no_color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for s in [t.star_style(0.9), t.welcome_style(), t.background_style()] {
            assert!(s.fg.is_none());
            assert!(s.bg.is_none());
        }
    }

    #[test]
    fn test_star_opacity_blends_toward_background() {
        let t = Theme::dark();
        assert_eq!(t.star_style(1.0).fg, Some(Color::Rgb(255, 255, 255)));
        assert_eq!(t.star_style(0.0).fg, Some(Color::Rgb(10, 10, 26)));
        let Some(Color::Rgb(r, _, _)) = t.star_style(0.5).fg else {
            panic!("expected rgb");
        };
        assert!(r > 10 && r < 255);
    }
}
