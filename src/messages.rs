//! Message types for the Elm-style architecture
//!
//! The host event adapter translates native events (toolbar toggles, pointer
//! enter/leave, mouse press/release, layout notifications) into these
//! messages. All state changes flow through them.

use crate::area::DockArea;
use crate::geometry::Point;
use crate::panel::{PanelId, TabKey};
use crate::settings::PersistedState;

/// Dock hide/show and host layout messages
#[derive(Debug, Clone, PartialEq)]
pub enum DockMsg {
    /// Collapse every visible, docked panel of an area into its placeholder
    HideArea(DockArea),
    /// Restore an area; `trigger` is force-selected in its tab-group
    ShowArea {
        area: DockArea,
        trigger: Option<PanelId>,
    },
    /// Restore all four areas
    ShowAll,
    /// The placeholder strip of an area was pressed
    PlaceholderPressed(DockArea),
    /// The placeholder strip of an area was resized by the host layout
    PlaceholderResized(DockArea),
    /// Deferred follow-up to `PlaceholderResized`, delivered one turn later
    RecheckArea(DockArea),
    /// The host finished a layout change (dock moved, shown, hidden, floated)
    LayoutChanged,
    /// Associate a panel with the tab key its tab-group reports
    RegisterPanel { panel: PanelId, key: TabKey },
    /// Forget a panel the host is about to destroy
    UnregisterPanel(PanelId),
}

/// Which delayed proximity action a timer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayedAction {
    Unhide,
    Rehide,
}

/// Pointer-driven messages (positions in global coordinates)
#[derive(Debug, Clone, PartialEq)]
pub enum ProximityMsg {
    /// Pointer entered the central widget
    PointerEntered(Point),
    /// Pointer left the central widget
    PointerLeft(Point),
    /// Mouse button pressed on the main window
    MousePressed(Point),
    /// Mouse button released on the main window
    MouseReleased(Point),
    /// A delayed unhide/rehide timer fired
    DelayElapsed {
        area: DockArea,
        action: DelayedAction,
        generation: u64,
    },
}

/// Toolbar messages
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarMsg {
    /// The user toggled an area button
    Toggled { area: DockArea, checked: bool },
}

/// Options dialog messages
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsMsg {
    Open,
    Close,
    SetAutoUnhide { area: DockArea, enabled: bool },
    SetUnhideDelay(u32),
    SetRehideDelay(u32),
}

/// Plugin lifecycle messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// The main window was shown for the first time
    MainWindowShown,
    /// Deferred follow-up to `MainWindowShown`: read persisted state back
    RestoreSettings,
    /// Persisted state was read back and should be applied
    ApplySettings(PersistedState),
    /// The application is about to quit
    AboutToQuit,
    /// Developer request to dump the model state to disk
    DumpState,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Dock(DockMsg),
    Proximity(ProximityMsg),
    Toolbar(ToolbarMsg),
    Options(OptionsMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn hide_area(area: DockArea) -> Self {
        Msg::Dock(DockMsg::HideArea(area))
    }

    pub fn show_area(area: DockArea) -> Self {
        Msg::Dock(DockMsg::ShowArea {
            area,
            trigger: None,
        })
    }

    pub fn toggled(area: DockArea, checked: bool) -> Self {
        Msg::Toolbar(ToolbarMsg::Toggled { area, checked })
    }
}
