use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;

pub const MIN_AUTOSAVE_INTERVAL_SECS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

/// Startup preferences. Toggling dark mode, fullscreen and the other View
/// items at runtime does not write back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default)]
    pub line_numbers_enabled: bool,

    #[serde(default = "default_true")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_true")]
    pub status_bar_visible: bool,

    #[serde(default = "default_true")]
    pub autosave_enabled: bool,

    #[serde(default = "default_autosave_interval")]
    pub autosave_interval_secs: u32,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font_size() -> u32 {
    14
}

fn default_true() -> bool {
    true
}

fn default_autosave_interval() -> u32 {
    30
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font_size: default_font_size(),
            line_numbers_enabled: false,
            word_wrap_enabled: true,
            status_bar_visible: true,
            autosave_enabled: true,
            autosave_interval_secs: default_autosave_interval(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(config_path) {
                    log::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("falcon");
        path.push("settings.json");
        path
    }

    /// Autosave period in seconds, never shorter than the minimum.
    pub fn autosave_interval(&self) -> f64 {
        self.autosave_interval_secs.max(MIN_AUTOSAVE_INTERVAL_SECS) as f64
    }
}
