//! User preferences
//!
//! Persisted as JSON in the platform config directory. Scores are
//! deliberately never persisted; the only preference so far is the color
//! mode.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Dark color mode (light mode swaps the palette)
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Settings {
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("duel-arcade").join("settings.json"))
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load() -> Self {
        if let Some(path) = Self::path() {
            if let Ok(json) = fs::read_to_string(&path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
        }
        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings; failures are logged, never fatal
    pub fn save(&self) {
        let Some(path) = Self::path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("Could not create config dir: {err}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(&path, json) {
                Ok(()) => log::info!("Settings saved"),
                Err(err) => log::warn!("Could not save settings: {err}"),
            },
            Err(err) => log::warn!("Could not serialize settings: {err}"),
        }
    }
}
