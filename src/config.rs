//! Plugin configuration
//!
//! Stores static preferences in `~/.config/dockfold/config.yaml`. Session
//! state (toggles, delays) lives in the settings store instead.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::panels::DEFAULT_EXTENT;

/// Plugin configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Scope for settings keys, so several installations can share one store
    #[serde(default = "default_installation_id")]
    pub installation_id: String,

    /// Placeholder strip thickness in logical pixels at 96 DPI
    #[serde(default = "default_placeholder_extent")]
    pub placeholder_extent: u32,

    /// Logical DPI of the primary screen
    #[serde(default = "default_logical_dpi")]
    pub logical_dpi: f64,

    /// Where `DumpState` writes; `~/.config/dockfold/dumps` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dump_dir: Option<PathBuf>,
}

fn default_installation_id() -> String {
    "default".to_string()
}

fn default_placeholder_extent() -> u32 {
    DEFAULT_EXTENT
}

fn default_logical_dpi() -> f64 {
    96.0
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            installation_id: default_installation_id(),
            placeholder_extent: default_placeholder_extent(),
            logical_dpi: default_logical_dpi(),
            dump_dir: None,
        }
    }
}

impl PluginConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
