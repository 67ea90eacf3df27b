//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Host mutations
//! happen directly through the `DockHost` port; anything that must wait for a
//! later event-loop turn comes back as a `Cmd`.

mod app;
pub mod dock;
mod options;
mod proximity;
mod toolbar;

use crate::commands::Cmd;
use crate::host::DockHost;
use crate::messages::{DockMsg, Msg};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use dock::update_dock;
pub use options::update_options;
pub use proximity::update_proximity;
pub use toolbar::{apply_toggle, update_toolbar};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, host: &mut dyn DockHost, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, host, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, host, msg)
    }
}

/// Whether a message is a host notification that must not re-enter a
/// transition in progress
fn is_suppressible(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::Proximity(_)
            | Msg::Dock(DockMsg::LayoutChanged)
            | Msg::Dock(DockMsg::PlaceholderResized(_))
    )
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, host: &mut dyn DockHost, msg: Msg) -> Option<Cmd> {
    if !model.accepts_events() && is_suppressible(&msg) {
        return None;
    }

    match msg {
        Msg::Dock(m) => dock::update_dock(model, host, m),
        Msg::Proximity(m) => proximity::update_proximity(model, host, m),
        Msg::Toolbar(m) => toolbar::update_toolbar(model, host, m),
        Msg::Options(m) => options::update_options(model, host, m),
        Msg::App(m) => app::update_app(model, host, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Pointer press/release is too noisy to log.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, host: &mut dyn DockHost, msg: Msg) -> Option<Cmd> {
    use crate::messages::ProximityMsg;

    let is_noisy = matches!(
        &msg,
        Msg::Proximity(ProximityMsg::MousePressed(_) | ProximityMsg::MouseReleased(_))
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, host, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Dock::HideArea(Left)`
/// - `Toolbar::Toggled { area: Top, checked: true }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Dock(m) => format!("Dock::{:?}", m),
        Msg::Proximity(m) => format!("Proximity::{:?}", m),
        Msg::Toolbar(m) => format!("Toolbar::{:?}", m),
        Msg::Options(m) => format!("Options::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
