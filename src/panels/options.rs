//! Options dialog state
//!
//! Per-area auto-unhide flags and the two proximity delays. Plain data, no
//! cross-field validation.

use serde::{Deserialize, Serialize};

use crate::area::{AreaMask, DockArea};

pub const DEFAULT_DELAY_MS: u32 = 500;
pub const MAX_DELAY_MS: u32 = 10_000;
/// Spin-box increment for the delay fields
pub const DELAY_STEP_MS: u32 = 50;

pub const DIALOG_TITLE: &str = "Options";
pub const AUTO_UNHIDE_LABEL: &str = "Auto-unhide";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsPanel {
    /// Areas that reopen when the pointer leaves the central widget toward them
    #[serde(default)]
    auto_unhide: AreaMask,
    #[serde(default = "default_delay")]
    unhide_delay_ms: u32,
    #[serde(default = "default_delay")]
    rehide_delay_ms: u32,
}

fn default_delay() -> u32 {
    DEFAULT_DELAY_MS
}

impl Default for OptionsPanel {
    fn default() -> Self {
        Self {
            auto_unhide: AreaMask::EMPTY,
            unhide_delay_ms: DEFAULT_DELAY_MS,
            rehide_delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl OptionsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Auto-unhide flags as a mask
    pub fn get_state(&self) -> AreaMask {
        self.auto_unhide
    }

    pub fn set_state(&mut self, mask: AreaMask) {
        self.auto_unhide = mask;
    }

    pub fn auto_unhide(&self, area: DockArea) -> bool {
        self.auto_unhide.contains(area)
    }

    pub fn set_auto_unhide(&mut self, area: DockArea, enabled: bool) {
        self.auto_unhide.set(area, enabled);
    }

    pub fn unhide_delay_ms(&self) -> u32 {
        self.unhide_delay_ms
    }

    pub fn rehide_delay_ms(&self) -> u32 {
        self.rehide_delay_ms
    }

    /// Set the unhide delay, clamped to `MAX_DELAY_MS`
    pub fn set_unhide_delay_ms(&mut self, ms: u32) {
        self.unhide_delay_ms = ms.min(MAX_DELAY_MS);
    }

    /// Set the rehide delay, clamped to `MAX_DELAY_MS`
    pub fn set_rehide_delay_ms(&mut self, ms: u32) {
        self.rehide_delay_ms = ms.min(MAX_DELAY_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = OptionsPanel::default();
        assert!(options.get_state().is_empty());
        assert_eq!(options.unhide_delay_ms(), 500);
        assert_eq!(options.rehide_delay_ms(), 500);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut options = OptionsPanel::new();
        options.set_auto_unhide(DockArea::Left, true);
        options.set_auto_unhide(DockArea::Bottom, true);
        options.set_auto_unhide(DockArea::Left, false);
        assert_eq!(options.get_state(), AreaMask::from(DockArea::Bottom));
    }

    #[test]
    fn test_delays_clamp_to_maximum() {
        let mut options = OptionsPanel::new();
        options.set_unhide_delay_ms(25_000);
        options.set_rehide_delay_ms(0);
        assert_eq!(options.unhide_delay_ms(), MAX_DELAY_MS);
        assert_eq!(options.rehide_delay_ms(), 0);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let options: OptionsPanel = serde_yaml::from_str("auto_unhide: 3").unwrap();
        assert_eq!(options.get_state().bits(), 3);
        assert_eq!(options.unhide_delay_ms(), DEFAULT_DELAY_MS);
    }
}
