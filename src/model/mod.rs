//! Application model - the complete state of the plugin
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. The host owns the window and its panels; the model owns only the
//! bookkeeping needed to hide and restore them.

pub mod tracker;

pub use tracker::{DockTracker, HiddenDocks, PanelSnapshot};

use crate::area::{AreaMask, DockArea};
use crate::config::PluginConfig;
use crate::geometry::Point;
use crate::panels::{AreaToggleControl, OptionsPanel, Placeholders};
use crate::settings::PersistedState;

/// Pointer tracking for the proximity trigger
#[derive(Debug, Clone, Default)]
pub struct ProximityState {
    /// Position of the last mouse press on the main window
    pub press: Option<Point>,
    /// Areas reopened by auto-unhide that are still open
    pub auto_revealed: AreaMask,
    /// Bumped whenever the pointer crosses the central widget boundary;
    /// delayed actions scheduled under an older value are discarded
    pub generation: u64,
}

/// The complete plugin model
#[derive(Debug)]
pub struct AppModel {
    /// Hidden panels, tab membership, snapshot and tab registry
    pub tracker: DockTracker,
    /// One collapsed-area strip per area
    pub placeholders: Placeholders,
    /// Toolbar toggles (requested hidden state)
    pub toolbar: AreaToggleControl,
    /// Options dialog state
    pub options: OptionsPanel,
    pub proximity: ProximityState,
    /// Set while the core itself is hiding/showing panels
    pub mutating: bool,
    /// Whether the options dialog is shown
    pub options_open: bool,
}

impl AppModel {
    pub fn new(config: &PluginConfig) -> Self {
        Self {
            tracker: DockTracker::new(),
            placeholders: Placeholders::new(config.placeholder_extent, config.logical_dpi),
            toolbar: AreaToggleControl::new(),
            options: OptionsPanel::new(),
            proximity: ProximityState::default(),
            mutating: false,
            options_open: false,
        }
    }

    /// Whether the event adapter should forward host notifications
    ///
    /// False while the core is mutating dock visibility itself.
    pub fn accepts_events(&self) -> bool {
        !self.mutating
    }

    /// Whether an area is collapsed (its placeholder is docked)
    pub fn is_collapsed(&self, area: DockArea) -> bool {
        self.placeholders.get(area).is_attached()
    }

    /// Areas whose placeholder is docked
    pub fn collapsed_mask(&self) -> AreaMask {
        DockArea::ALL
            .into_iter()
            .filter(|a| self.is_collapsed(*a))
            .collect()
    }

    /// State written to the settings store
    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            toolbar: self.toolbar.get_state(),
            dialog: self.options.get_state(),
            unhide_delay_ms: self.options.unhide_delay_ms(),
            rehide_delay_ms: self.options.rehide_delay_ms(),
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(&PluginConfig::default())
    }
}
