//! Game settings and preferences
//!
//! Persisted as JSON next to the executable's working directory; a missing
//! or unreadable file falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BOARD_SIZE, DEFAULT_TICK_MS};

/// User preferences for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board rows
    pub rows: usize,
    /// Board columns
    pub cols: usize,
    /// Heartbeat interval between cursor steps (milliseconds)
    pub tick_ms: u64,
    /// Fixed RNG seed; `None` draws one from the OS for each run
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
