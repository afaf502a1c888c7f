//! Board theme (light/dark) selection.

use crate::config::BoardConfig;
use crate::draw::Color;

/// Background theme for the board surface.
///
/// The theme is threaded explicitly into every repaint rather than held as
/// ambient state, so identical inputs always produce identical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light background (default)
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl Theme {
    /// Returns the opaque background color for this theme.
    pub fn background_color(&self, config: &BoardConfig) -> Color {
        let rgb = match self {
            Self::Light => config.light_background,
            Self::Dark => config.dark_background,
        };
        Color::new(rgb[0], rgb[1], rgb[2], 1.0)
    }
}

impl std::str::FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}
