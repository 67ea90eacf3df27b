//! Collapsed-area placeholder
//!
//! A thin strip docked into an area while that area's panels are hidden. It
//! keeps the area visually present and acts as the click target to expand it
//! again. One placeholder exists per area for the lifetime of the plugin; it
//! is attached to and detached from the host, never recreated.

use crate::area::DockArea;
use crate::geometry::rescale;
use crate::messages::{DockMsg, Msg};

/// Logical size of the strip at 96 DPI
pub const DEFAULT_EXTENT: u32 = 12;

/// Direction the strip's arrow points (always into the window)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

/// Placeholder state
#[derive(Debug, Clone)]
pub struct CollapsedAreaPlaceholder {
    area: DockArea,
    /// Strip thickness in screen pixels
    extent: u32,
    attached: bool,
}

impl CollapsedAreaPlaceholder {
    pub fn new(area: DockArea, extent: u32, logical_dpi: f64) -> Self {
        Self {
            area,
            extent: rescale(extent, logical_dpi),
            attached: false,
        }
    }

    pub fn area(&self) -> DockArea {
        self.area
    }

    pub fn arrow(&self) -> Arrow {
        match self.area {
            DockArea::Left => Arrow::Right,
            DockArea::Right => Arrow::Left,
            DockArea::Top => Arrow::Down,
            DockArea::Bottom => Arrow::Up,
        }
    }

    /// Strip thickness in screen pixels
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Fixed `(width, height)`; the free dimension follows the area
    pub fn fixed_size(&self) -> (Option<u32>, Option<u32>) {
        match self.area {
            DockArea::Left | DockArea::Right => (Some(self.extent), None),
            DockArea::Top | DockArea::Bottom => (None, Some(self.extent)),
        }
    }

    /// Whether the strip is currently docked in the host window
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Message for a press on the strip
    pub fn pressed(&self) -> Msg {
        Msg::Dock(DockMsg::PlaceholderPressed(self.area))
    }

    /// Message for a resize of the strip
    pub fn resized(&self) -> Msg {
        Msg::Dock(DockMsg::PlaceholderResized(self.area))
    }
}

/// One placeholder per area, indexed by `DockArea::index`
#[derive(Debug, Clone)]
pub struct Placeholders([CollapsedAreaPlaceholder; 4]);

impl Placeholders {
    pub fn new(extent: u32, logical_dpi: f64) -> Self {
        Self(DockArea::ALL.map(|area| CollapsedAreaPlaceholder::new(area, extent, logical_dpi)))
    }

    pub fn get(&self, area: DockArea) -> &CollapsedAreaPlaceholder {
        &self.0[area.index()]
    }

    pub fn get_mut(&mut self, area: DockArea) -> &mut CollapsedAreaPlaceholder {
        &mut self.0[area.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollapsedAreaPlaceholder> {
        self.0.iter()
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENT, 96.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_points_into_window() {
        let p = Placeholders::default();
        assert_eq!(p.get(DockArea::Left).arrow(), Arrow::Right);
        assert_eq!(p.get(DockArea::Right).arrow(), Arrow::Left);
        assert_eq!(p.get(DockArea::Top).arrow(), Arrow::Down);
        assert_eq!(p.get(DockArea::Bottom).arrow(), Arrow::Up);
    }

    #[test]
    fn test_fixed_size_follows_area() {
        let p = Placeholders::new(12, 192.0);
        assert_eq!(p.get(DockArea::Left).fixed_size(), (Some(24), None));
        assert_eq!(p.get(DockArea::Bottom).fixed_size(), (None, Some(24)));
    }

    #[test]
    fn test_starts_detached() {
        let p = Placeholders::default();
        assert!(p.iter().all(|ph| !ph.is_attached()));
    }

    #[test]
    fn test_messages_carry_area() {
        let p = Placeholders::default();
        assert!(matches!(
            p.get(DockArea::Top).pressed(),
            Msg::Dock(DockMsg::PlaceholderPressed(DockArea::Top))
        ));
        assert!(matches!(
            p.get(DockArea::Right).resized(),
            Msg::Dock(DockMsg::PlaceholderResized(DockArea::Right))
        ));
    }
}
