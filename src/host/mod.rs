//! Host window-manager port
//!
//! The core does not own the main window, its dock panels or its tab-groups.
//! Everything it needs from the host application goes through `DockHost`,
//! which a host adapter implements on top of the native toolkit.
//!
//! # Implementations
//!
//! - **Native hosts**: wrap the application's main window; not part of this crate
//! - **`MemoryHost`**: complete in-memory window manager for tests and benchmarks

mod memory;

pub use memory::MemoryHost;

use thiserror::Error;

use crate::area::{Axis, Corner, DockArea};
use crate::geometry::{Point, Rect};
use crate::icons::IconSet;
use crate::panel::{PanelId, PanelState, TabGroupId, TabKey};
use crate::panels::{AreaToggleControl, CollapsedAreaPlaceholder, OptionsPanel};

/// Recoverable failures reported by the host
///
/// None of these are fatal: the core skips whatever the failure refers to and
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The panel was destroyed by the host
    #[error("{0} no longer exists")]
    PanelDeleted(PanelId),

    /// Tab data no longer resolves to a live widget
    #[error("tab {index} of group {group:?} does not refer to a live widget")]
    StaleTab { group: TabGroupId, index: usize },

    /// The tab-group was removed by the host
    #[error("tab group {0:?} no longer exists")]
    UnknownGroup(TabGroupId),
}

/// Widgets the core can ask the host to observe for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObserverTarget {
    /// Main window (first-show detection, press/release on separators)
    MainWindow,
    /// Central content widget (pointer enter/leave)
    CentralWidget,
}

/// Operations the core performs against the host window manager
///
/// Methods that dereference a handle return `HostError` when the handle is
/// no longer valid. Presentation methods have empty default bodies so that a
/// headless host only has to implement the layout operations.
pub trait DockHost {
    // === Dock panels ===

    /// All dock panels owned by the main window (placeholders excluded)
    fn panels(&self) -> Vec<PanelId>;

    /// Current area, visibility, floating flag and geometry of a panel
    fn panel_state(&self, panel: PanelId) -> Result<PanelState, HostError>;

    /// Show or hide a panel without destroying it
    fn set_panel_visible(&mut self, panel: PanelId, visible: bool) -> Result<(), HostError>;

    /// Resize several panels in one layout pass along `axis`
    ///
    /// Horizontal sets widths, vertical sets heights.
    fn resize_panels(&mut self, sizes: &[(PanelId, i32)], axis: Axis);

    // === Placeholders ===

    /// Dock the placeholder strip into its area and show it
    fn insert_placeholder(&mut self, placeholder: &CollapsedAreaPlaceholder);

    /// Take the placeholder strip out of its area (it is kept, not destroyed)
    fn remove_placeholder(&mut self, area: DockArea);

    // === Tab-groups ===

    fn tab_groups(&self) -> Vec<TabGroupId>;

    fn tab_count(&self, group: TabGroupId) -> Result<usize, HostError>;

    /// Active tab index, `None` when the group has no current tab
    fn current_tab(&self, group: TabGroupId) -> Result<Option<usize>, HostError>;

    fn set_current_tab(&mut self, group: TabGroupId, index: usize) -> Result<(), HostError>;

    /// Opaque data of the tab at `index`
    fn tab_key(&self, group: TabGroupId, index: usize) -> Result<TabKey, HostError>;

    // === Main window ===

    /// Central widget bounds in global coordinates
    fn central_geometry(&self) -> Rect;

    /// Area that currently owns a window corner (user configurable, never cache it)
    fn corner_owner(&self, corner: Corner) -> DockArea;

    /// Whether the widget directly under `p` is the main window itself
    /// (empty separator space rather than a docked panel)
    fn is_main_window_at(&self, p: Point) -> bool;

    fn is_main_window_visible(&self) -> bool;

    /// Install or remove the event observer on a widget
    fn set_observer(&mut self, target: ObserverTarget, installed: bool);

    /// Block or unblock the layout/proximity notifications the host forwards
    fn block_notifications(&mut self, blocked: bool);

    // === Presentation ===

    /// Add the toolbar and the plugin menu entry
    ///
    /// `icons` is `None` when the embedded icons failed to decode; the host
    /// falls back to text buttons.
    fn install_controls(&mut self, _toolbar: &AreaToggleControl, _icons: Option<&IconSet>) {}

    /// Remove the toolbar and the plugin menu entry
    fn remove_controls(&mut self) {}

    /// Refresh toolbar button checked/enabled state
    fn sync_toolbar(&mut self, _toolbar: &AreaToggleControl) {}

    /// Show the options dialog
    fn show_options(&mut self, _options: &OptionsPanel) {}

    fn hide_options(&mut self) {}
}
