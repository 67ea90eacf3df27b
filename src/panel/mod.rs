//! Dock panel identities and the tab registry
//!
//! Panels are owned by the host window manager. The core only ever holds
//! their identities, reads their state, and asks the host to change it.
//!
//! ## Architecture
//!
//! - `PanelId`: stable identity the host assigns to each dock panel
//! - `TabKey`: opaque per-tab data the host reports for tab-groups
//! - `TabGroupId`: identity of a host tab-group (tabbed dock region)
//! - `PanelState`: the host's current view of a panel
//! - `PanelRegistry`: typed bidirectional map between panels and tab keys

mod registry;

pub use registry::PanelRegistry;

use serde::{Deserialize, Serialize};

use crate::area::DockArea;
use crate::geometry::Rect;

/// Stable identity of a host-owned dock panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub u64);

/// Opaque tab data attached by the host to each tab in a tab-group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabKey(pub u64);

/// Identity of a host tab-group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabGroupId(pub u64);

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// Host-reported state of a dock panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    /// Area the panel is docked in (`None` if the host reports no area)
    pub area: Option<DockArea>,
    pub visible: bool,
    pub floating: bool,
    pub geometry: Rect,
}

impl PanelState {
    /// Docked in `area`, visible and not floating
    pub fn is_shown_in(&self, area: DockArea) -> bool {
        self.area == Some(area) && self.visible && !self.floating
    }

    /// Docked somewhere, visible and not floating
    pub fn is_docked_and_visible(&self) -> bool {
        self.area.is_some() && self.visible && !self.floating
    }
}
