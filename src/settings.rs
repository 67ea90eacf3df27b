//! Persisted plugin settings
//!
//! The host's settings store is a flat key/value store of integers. The core
//! reaches it only through the `SettingsStore` port handed to the plugin at
//! construction. Keys are scoped by a per-installation identifier.
//!
//! Stored under `~/.config/dockfold/settings.yaml` by `YamlSettings`.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::area::AreaMask;
use crate::panels::{DEFAULT_DELAY_MS, MAX_DELAY_MS};

const GROUP: &str = "HideDocks";

/// Flat integer key/value persistence
pub trait SettingsStore {
    /// Value stored under `key`, `None` if never written
    fn load(&self, key: &str) -> anyhow::Result<Option<i64>>;

    fn save(&mut self, key: &str, value: i64) -> anyhow::Result<()>;
}

/// Settings keys for one installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsKeys {
    pub toolbar_state: String,
    pub dialog_state: String,
    pub unhide_delay: String,
    pub rehide_delay: String,
}

impl SettingsKeys {
    pub fn new(installation_id: &str) -> Self {
        let key = |name: &str| format!("{}/{}/{}", installation_id, GROUP, name);
        Self {
            toolbar_state: key("toolbarState"),
            dialog_state: key("dialogState"),
            unhide_delay: key("unhideDelay"),
            rehide_delay: key("rehideDelay"),
        }
    }
}

/// Everything the plugin persists between sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Toolbar toggles (areas requested hidden)
    pub toolbar: AreaMask,
    /// Auto-unhide flags from the options dialog
    pub dialog: AreaMask,
    pub unhide_delay_ms: u32,
    pub rehide_delay_ms: u32,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            toolbar: AreaMask::EMPTY,
            dialog: AreaMask::EMPTY,
            unhide_delay_ms: DEFAULT_DELAY_MS,
            rehide_delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl PersistedState {
    /// Read all keys, falling back to defaults for anything missing
    pub fn load(store: &dyn SettingsStore, keys: &SettingsKeys) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let delay = |value: Option<i64>, default: u32| {
            value
                .map(|v| v.clamp(0, MAX_DELAY_MS as i64) as u32)
                .unwrap_or(default)
        };
        Ok(Self {
            toolbar: store
                .load(&keys.toolbar_state)?
                .map(AreaMask::from_setting)
                .unwrap_or(defaults.toolbar),
            dialog: store
                .load(&keys.dialog_state)?
                .map(AreaMask::from_setting)
                .unwrap_or(defaults.dialog),
            unhide_delay_ms: delay(store.load(&keys.unhide_delay)?, defaults.unhide_delay_ms),
            rehide_delay_ms: delay(store.load(&keys.rehide_delay)?, defaults.rehide_delay_ms),
        })
    }

    pub fn save(&self, store: &mut dyn SettingsStore, keys: &SettingsKeys) -> anyhow::Result<()> {
        store.save(&keys.toolbar_state, self.toolbar.bits() as i64)?;
        store.save(&keys.dialog_state, self.dialog.bits() as i64)?;
        store.save(&keys.unhide_delay, self.unhide_delay_ms as i64)?;
        store.save(&keys.rehide_delay, self.rehide_delay_ms as i64)?;
        Ok(())
    }
}

/// In-memory store, for hosts that persist elsewhere and for tests
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, i64>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }
}

impl SettingsStore for MemorySettings {
    fn load(&self, key: &str) -> anyhow::Result<Option<i64>> {
        Ok(self.values.get(key).copied())
    }

    fn save(&mut self, key: &str, value: i64) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed store: a flat YAML map of key to integer
///
/// The whole file is read once on open and rewritten on every save.
#[derive(Debug, Clone)]
pub struct YamlSettings {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl YamlSettings {
    /// Open the store at the default location
    pub fn open_default() -> anyhow::Result<Self> {
        let path = crate::config_paths::settings_file()
            .context("No config directory available")?;
        Self::open(path)
    }

    /// Open (or start) a store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings at {}", path.display()))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_yaml::from_str(&content)
                    .with_context(|| format!("Failed to parse settings at {}", path.display()))?
            }
        } else {
            tracing::debug!("Settings file not found at {}, starting empty", path.display());
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }
        let content = serde_yaml::to_string(&self.values).context("Failed to serialize settings")?;

        // Write then rename so a crash never leaves a truncated file behind
        let tmp = self.path.with_extension("yaml.tmp");
        std::fs::write(&tmp, content)
            .with_context(|| format!("Failed to write settings to {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace settings at {}", self.path.display()))?;
        Ok(())
    }
}

impl SettingsStore for YamlSettings {
    fn load(&self, key: &str) -> anyhow::Result<Option<i64>> {
        Ok(self.values.get(key).copied())
    }

    fn save(&mut self, key: &str, value: i64) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value);
        self.write()?;
        tracing::debug!(key, value, "Saved setting to {}", self.path.display());
        Ok(())
    }
}
