//! Application settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shared::Palette;

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    /// Show the status bar at the bottom of the window
    #[serde(default = "default_true")]
    pub status_bar: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            status_bar: true,
        }
    }
}

/// All application settings.
///
/// Only settings are stored on disk; drawings live for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Stroke styles for the drawing surface
    #[serde(default)]
    pub palette: Palette,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Location of `settings.json` in the platform config directory
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "polydraw", "polydraw")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a specific file, falling back to defaults
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(json) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        Self::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid settings in {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Settings parse error: {e}"))
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                tracing::error!("Failed to save settings: {e}");
            }
        }
    }

    /// Save settings to a specific file, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| format!("{}: {e}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| format!("{}: {e}", path.display()))
    }
}
