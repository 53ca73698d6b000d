//! Bridge settings, stored as JSON in the platform config directory.
//!
//! A missing or unreadable settings file is not an error for the bridge: it
//! logs a warning and runs with defaults.

use crate::constants::{DEFAULT_LOG_FILTER, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::files::PickerOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Options for the open dialog
    pub open_picker: PickerOptions,
    /// Options for the save dialog
    pub save_picker: PickerOptions,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            open_picker: PickerOptions::default_open(),
            save_picker: PickerOptions::default_save(),
        }
    }
}

impl BridgeSettings {
    /// Read settings from `path`, failing on I/O or parse errors.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing settings in {}", path.display()))
    }

    /// Read settings from `path`, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                debug!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))
    }
}

/// `<config dir>/canvas-bridge/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
