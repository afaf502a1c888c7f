//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the defaults the tool controller starts with and the sizes that
/// are re-applied when switching to the freehand tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default stroke color as a hex string (e.g. `"#000000"`)
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Default stroke width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_size")]
    pub default_size: f64,

    /// Size re-applied when switching to pen or eraser (valid range: 1.0 - 50.0)
    #[serde(default = "default_size")]
    pub freehand_size: f64,

    /// Size re-applied when switching to the highlighter (valid range: 1.0 - 50.0)
    #[serde(default = "default_highlighter_size")]
    pub highlighter_size: f64,

    /// Font family for text actions (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_size: default_size(),
            freehand_size: default_size(),
            highlighter_size: default_highlighter_size(),
            font_family: default_font_family(),
        }
    }
}

/// Board background palette.
///
/// RGB components in `0.0..=1.0`, one triple per theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Light theme background (default: white)
    #[serde(default = "default_light_background")]
    pub light_background: [f64; 3],

    /// Dark theme background (default: `#1f2937`)
    #[serde(default = "default_dark_background")]
    pub dark_background: [f64; 3],
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            light_background: default_light_background(),
            dark_background: default_dark_background(),
        }
    }
}

/// Limits applied when loading board files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Maximum number of actions accepted from a board file (0 = unlimited)
    #[serde(default = "default_max_actions")]
    pub max_actions: usize,

    /// Maximum board file size in MiB
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_actions: default_max_actions(),
            max_file_size_mb: default_max_file_size_mb(),
        }
    }
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_size() -> f64 {
    5.0
}

fn default_highlighter_size() -> f64 {
    20.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_light_background() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_dark_background() -> [f64; 3] {
    // #1f2937
    [31.0 / 255.0, 41.0 / 255.0, 55.0 / 255.0]
}

fn default_max_actions() -> usize {
    10_000
}

fn default_max_file_size_mb() -> u64 {
    10
}
