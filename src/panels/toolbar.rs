//! Area toggle toolbar
//!
//! Four checkable buttons, one per dock area. A checked button means the
//! area is requested hidden; the checked set is what gets persisted.

use crate::area::{AreaMask, DockArea};

/// Order in which the buttons are laid out
pub const DISPLAY_ORDER: [DockArea; 4] = [
    DockArea::Left,
    DockArea::Bottom,
    DockArea::Top,
    DockArea::Right,
];

pub const TOOLBAR_TITLE: &str = "Hide Docks Toolbar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleButton {
    pub area: DockArea,
    pub checked: bool,
    pub enabled: bool,
}

impl ToggleButton {
    pub fn tooltip(&self) -> &'static str {
        match self.area {
            DockArea::Left => "Hide left dock",
            DockArea::Right => "Hide right dock",
            DockArea::Top => "Hide top dock",
            DockArea::Bottom => "Hide bottom dock",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AreaToggleControl {
    buttons: [ToggleButton; 4],
}

impl Default for AreaToggleControl {
    fn default() -> Self {
        Self {
            buttons: DockArea::ALL.map(|area| ToggleButton {
                area,
                checked: false,
                enabled: true,
            }),
        }
    }
}

impl AreaToggleControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(&self, area: DockArea) -> &ToggleButton {
        &self.buttons[area.index()]
    }

    /// Buttons in layout order
    pub fn buttons(&self) -> impl Iterator<Item = &ToggleButton> {
        DISPLAY_ORDER.iter().map(|a| self.button(*a))
    }

    /// Checked areas as a mask
    pub fn get_state(&self) -> AreaMask {
        self.buttons
            .iter()
            .filter(|b| b.checked)
            .map(|b| b.area)
            .collect()
    }

    /// Apply a mask to the enabled buttons
    ///
    /// Disabled buttons keep their checked state. Returns the buttons whose
    /// state changed, as `(area, checked)`, so the caller can run them
    /// through the normal toggle path.
    pub fn set_state(&mut self, mask: AreaMask) -> Vec<(DockArea, bool)> {
        let mut changed = Vec::new();
        for button in self.buttons.iter_mut().filter(|b| b.enabled) {
            let checked = mask.contains(button.area);
            if button.checked != checked {
                button.checked = checked;
                changed.push((button.area, checked));
            }
        }
        changed
    }

    pub fn is_checked(&self, area: DockArea) -> bool {
        self.button(area).checked
    }

    /// Set the checked state directly, returning whether it changed
    pub fn set_checked(&mut self, area: DockArea, checked: bool) -> bool {
        let button = &mut self.buttons[area.index()];
        let changed = button.checked != checked;
        button.checked = checked;
        changed
    }

    /// Flip an enabled button, returning its new state
    pub fn toggle(&mut self, area: DockArea) -> Option<bool> {
        let button = &mut self.buttons[area.index()];
        if !button.enabled {
            return None;
        }
        button.checked = !button.checked;
        Some(button.checked)
    }

    pub fn is_enabled(&self, area: DockArea) -> bool {
        self.button(area).enabled
    }

    /// Enable or disable a button, returning whether it changed
    pub fn set_enabled(&mut self, area: DockArea, enabled: bool) -> bool {
        let button = &mut self.buttons[area.index()];
        let changed = button.enabled != enabled;
        button.enabled = enabled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trip_is_identity() {
        let mut toolbar = AreaToggleControl::new();
        toolbar.set_state(AreaMask::from_bits(0b1010));
        let state = toolbar.get_state();
        assert!(toolbar.set_state(state).is_empty());
        assert_eq!(toolbar.get_state(), state);
    }

    #[test]
    fn test_set_state_reports_changes() {
        let mut toolbar = AreaToggleControl::new();
        let changed = toolbar.set_state(AreaMask::from_bits(0b0101));
        assert_eq!(changed, vec![(DockArea::Left, true), (DockArea::Top, true)]);

        let changed = toolbar.set_state(AreaMask::from(DockArea::Top));
        assert_eq!(changed, vec![(DockArea::Left, false)]);
    }

    #[test]
    fn test_set_state_skips_disabled_buttons() {
        let mut toolbar = AreaToggleControl::new();
        toolbar.set_enabled(DockArea::Right, false);
        let changed = toolbar.set_state(AreaMask::FULL);
        assert_eq!(changed.len(), 3);
        assert!(!toolbar.is_checked(DockArea::Right));
    }

    #[test]
    fn test_toggle_respects_enabled() {
        let mut toolbar = AreaToggleControl::new();
        assert_eq!(toolbar.toggle(DockArea::Bottom), Some(true));
        assert_eq!(toolbar.toggle(DockArea::Bottom), Some(false));

        toolbar.set_enabled(DockArea::Bottom, false);
        assert_eq!(toolbar.toggle(DockArea::Bottom), None);
    }

    #[test]
    fn test_display_order_and_tooltips() {
        let toolbar = AreaToggleControl::new();
        let tips: Vec<_> = toolbar.buttons().map(|b| b.tooltip()).collect();
        assert_eq!(
            tips,
            vec![
                "Hide left dock",
                "Hide bottom dock",
                "Hide top dock",
                "Hide right dock"
            ]
        );
    }
}
