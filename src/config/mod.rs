//! Configuration file support.
//!
//! Settings are loaded from `~/.config/inkboard/config.toml` and cover
//! drawing defaults, the board background palette, and board-file limits.
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{BoardConfig, DrawingConfig, StorageConfig};

use anyhow::{Context as _, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// All fields have defaults and missing sections fall back to them, so a
/// partial config file is always valid.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// default_size = 5.0
/// highlighter_size = 20.0
///
/// [board]
/// light_background = [1.0, 1.0, 1.0]
///
/// [storage]
/// max_actions = 10000
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Drawing tool defaults (color, sizes, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Board background palette per theme
    #[serde(default)]
    pub board: BoardConfig,

    /// Board-file limits
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Loads configuration from the default path, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                debug!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                warn!("could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate();
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Default config file location (`~/.config/inkboard/config.toml`).
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inkboard").join("config.toml"))
    }

    /// Clamps out-of-range values to their valid ranges, warning about each
    /// adjustment instead of failing the load.
    pub fn validate(&mut self) {
        let clamp_size = |name: &str, value: &mut f64| {
            let clamped = value.clamp(1.0, 50.0);
            if clamped != *value {
                warn!("config: {name} {value} out of range 1.0-50.0, clamping to {clamped}");
                *value = clamped;
            }
        };
        clamp_size("drawing.default_size", &mut self.drawing.default_size);
        clamp_size("drawing.freehand_size", &mut self.drawing.freehand_size);
        clamp_size("drawing.highlighter_size", &mut self.drawing.highlighter_size);

        for rgb in [&mut self.board.light_background, &mut self.board.dark_background] {
            for channel in rgb.iter_mut() {
                if !(0.0..=1.0).contains(channel) {
                    warn!("config: background channel {channel} out of range 0.0-1.0, clamping");
                    *channel = channel.clamp(0.0, 1.0);
                }
            }
        }

        if self.storage.max_file_size_mb == 0 {
            warn!("config: storage.max_file_size_mb must be at least 1, clamping");
            self.storage.max_file_size_mb = 1;
        }
    }
}
