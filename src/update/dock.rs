//! Dock update handlers
//!
//! The hide/show state machine. Each area is either expanded or collapsed;
//! collapsed means its placeholder is docked and its panels are hidden with
//! their geometry and active-tab membership recorded in the tracker.

use tracing::{debug, trace};

use crate::area::{Axis, DockArea};
use crate::commands::Cmd;
use crate::geometry::Rect;
use crate::host::{DockHost, HostError};
use crate::messages::{DockMsg, Msg};
use crate::model::{AppModel, PanelSnapshot};
use crate::panel::PanelId;

/// Update function for dock messages
pub fn update_dock(model: &mut AppModel, host: &mut dyn DockHost, msg: DockMsg) -> Option<Cmd> {
    match msg {
        DockMsg::HideArea(area) => {
            hide_area(model, host, area);
            None
        }

        DockMsg::ShowArea { area, trigger } => {
            show_area(model, host, area, trigger);
            None
        }

        DockMsg::ShowAll => {
            show_all(model, host);
            None
        }

        DockMsg::PlaceholderPressed(area) => {
            model.proximity.auto_revealed.remove(area);
            show_area(model, host, area, None);
            None
        }

        // The host may dock a real panel next to the strip; check once its
        // layout pass is over
        DockMsg::PlaceholderResized(area) => Some(Cmd::next_turn(Msg::Dock(DockMsg::RecheckArea(area)))),

        DockMsg::RecheckArea(area) => {
            if !model.is_collapsed(area) {
                return None;
            }
            let intruder = host
                .panels()
                .into_iter()
                .find(|p| host.panel_state(*p).is_ok_and(|s| s.is_shown_in(area)));
            if let Some(panel) = intruder {
                debug!(%area, %panel, "panel docked into collapsed area");
                force_expand(model, host, area, panel);
            }
            None
        }

        DockMsg::LayoutChanged => {
            reconcile_layout(model, host);
            None
        }

        DockMsg::RegisterPanel { panel, key } => {
            model.tracker.registry.register(panel, key);
            None
        }

        DockMsg::UnregisterPanel(panel) => {
            model.tracker.forget(panel);
            None
        }
    }
}

/// Marks the model and host as mid-mutation for the duration of a hide/show
///
/// `end` restores the previous state so nested transitions do not unblock
/// notifications early.
struct MutationScope {
    was_mutating: bool,
}

impl MutationScope {
    fn begin(model: &mut AppModel, host: &mut dyn DockHost) -> Self {
        let was_mutating = model.mutating;
        model.mutating = true;
        host.block_notifications(true);
        Self { was_mutating }
    }

    fn end(self, model: &mut AppModel, host: &mut dyn DockHost) {
        model.mutating = self.was_mutating;
        host.block_notifications(self.was_mutating);
    }
}

/// Collapse an area
///
/// Collects every panel docked in `area` that is visible and not floating.
/// With none found this is a no-op; otherwise their geometry and active-tab
/// membership are recorded, they are hidden, and the placeholder is docked.
pub fn hide_area(model: &mut AppModel, host: &mut dyn DockHost, area: DockArea) {
    let scope = MutationScope::begin(model, host);

    let docks: Vec<(PanelId, Rect)> = host
        .panels()
        .into_iter()
        .filter_map(|panel| match host.panel_state(panel) {
            Ok(state) if state.is_shown_in(area) => Some((panel, state.geometry)),
            _ => None,
        })
        .collect();

    if !docks.is_empty() {
        for (panel, geometry) in &docks {
            model.tracker.hidden.insert(*panel, *geometry);
        }
        record_active_tabs(model, &*host, &docks);

        for (panel, _) in &docks {
            if let Err(e) = host.set_panel_visible(*panel, false) {
                debug!(%area, "skipping panel while hiding: {}", e);
                model.tracker.forget(*panel);
            }
        }

        host.insert_placeholder(model.placeholders.get(area));
        model.placeholders.get_mut(area).set_attached(true);
        debug!(%area, count = docks.len(), "area collapsed");
    } else {
        trace!(%area, "nothing to hide");
    }

    after_transition(model, host);
    scope.end(model, host);
}

/// Remember which of the hidden panels was the active tab of its group
fn record_active_tabs(model: &mut AppModel, host: &dyn DockHost, docks: &[(PanelId, Rect)]) {
    for group in host.tab_groups() {
        let index = match host.current_tab(group) {
            Ok(Some(index)) => index,
            Ok(None) => continue,
            Err(e) => {
                trace!("skipping tab group: {}", e);
                continue;
            }
        };
        let key = match host.tab_key(group, index) {
            Ok(key) => key,
            Err(e) => {
                trace!("skipping active tab: {}", e);
                continue;
            }
        };
        let Some(panel) = model.tracker.registry.resolve(key) else {
            trace!(?group, index, "active tab is not a registered panel");
            continue;
        };
        if docks.iter().any(|(p, _)| *p == panel) && !model.tracker.tab_membership.contains(&panel)
        {
            model.tracker.tab_membership.push(panel);
        }
    }
}

/// Expand an area
///
/// Detaches the placeholder and restores every recorded panel the host still
/// places in `area`, with its saved size and tab selection. Panels the host
/// destroyed while hidden are dropped from the record without restoration.
pub fn show_area(
    model: &mut AppModel,
    host: &mut dyn DockHost,
    area: DockArea,
    trigger: Option<PanelId>,
) {
    let scope = MutationScope::begin(model, host);

    host.remove_placeholder(area);
    model.placeholders.get_mut(area).set_attached(false);

    let mut docks: Vec<(PanelId, Rect)> = Vec::new();
    let mut deleted: Vec<PanelId> = Vec::new();
    for (panel, geometry) in model.tracker.hidden.iter() {
        match host.panel_state(panel) {
            Ok(state) if state.area == Some(area) => docks.push((panel, geometry)),
            Ok(_) => {}
            Err(HostError::PanelDeleted(_)) => deleted.push(panel),
            Err(e) => trace!(%panel, "skipping hidden panel: {}", e),
        }
    }
    for panel in deleted {
        debug!(%area, %panel, "hidden panel was deleted by the host, pruning");
        model.tracker.forget(panel);
    }

    docks.retain(|(panel, _)| match host.set_panel_visible(*panel, true) {
        Ok(()) => true,
        Err(e) => {
            debug!(%area, "could not restore panel: {}", e);
            model.tracker.forget(*panel);
            false
        }
    });

    if !docks.is_empty() {
        let widths: Vec<(PanelId, i32)> = docks.iter().map(|(p, g)| (*p, g.width)).collect();
        let heights: Vec<(PanelId, i32)> = docks.iter().map(|(p, g)| (*p, g.height)).collect();
        match area.axis() {
            Axis::Horizontal => {
                host.resize_panels(&widths, Axis::Horizontal);
                host.resize_panels(&heights, Axis::Vertical);
            }
            Axis::Vertical => {
                host.resize_panels(&heights, Axis::Vertical);
                host.resize_panels(&widths, Axis::Horizontal);
            }
        }

        for (panel, _) in &docks {
            model.tracker.hidden.remove(*panel);
        }
        debug!(%area, count = docks.len(), "area expanded");
    }

    restore_tabs(model, host, area, &docks, trigger);

    after_transition(model, host);
    scope.end(model, host);
}

/// Reselect the tabs recorded at hide time, then force-select triggers
fn restore_tabs(
    model: &mut AppModel,
    host: &mut dyn DockHost,
    area: DockArea,
    docks: &[(PanelId, Rect)],
    trigger: Option<PanelId>,
) {
    let mut triggers: Vec<PanelId> = trigger.into_iter().collect();
    for panel in &model.tracker.pending_triggers {
        let in_area = host
            .panel_state(*panel)
            .is_ok_and(|s| s.area == Some(area));
        if in_area && !triggers.contains(panel) {
            triggers.push(*panel);
        }
    }

    for group in host.tab_groups() {
        let count = match host.tab_count(group) {
            Ok(count) => count,
            Err(e) => {
                trace!("skipping tab group: {}", e);
                continue;
            }
        };

        let mut trigger_tab = None;
        for index in 0..count {
            let key = match host.tab_key(group, index) {
                Ok(key) => key,
                Err(e) => {
                    trace!("skipping tab: {}", e);
                    continue;
                }
            };
            let Some(panel) = model.tracker.registry.resolve(key) else {
                continue;
            };

            if model.tracker.tab_membership.contains(&panel) {
                if let Some((_, geometry)) = docks.iter().find(|(p, _)| *p == panel) {
                    match host.set_current_tab(group, index) {
                        Ok(()) => {
                            host.resize_panels(&[(panel, geometry.extent_for(area))], area.axis())
                        }
                        Err(e) => trace!(%panel, "could not reselect tab: {}", e),
                    }
                }
            }

            if trigger_tab.is_none() && triggers.contains(&panel) {
                trigger_tab = Some(index);
            }
        }

        if let Some(index) = trigger_tab {
            if let Err(e) = host.set_current_tab(group, index) {
                trace!("could not select trigger tab: {}", e);
            }
        }
    }

    // Restored panels are done with, whether or not their tab could be selected
    model
        .tracker
        .tab_membership
        .retain(|p| !docks.iter().any(|(d, _)| d == p));
    model.tracker.pending_triggers.retain(|p| !triggers.contains(p));
}

/// Expand every area; used at detach and quit so nothing stays hidden
pub fn show_all(model: &mut AppModel, host: &mut dyn DockHost) {
    for area in DockArea::ALL {
        show_area(model, host, area, None);
    }
}

/// Expand an area the host re-docked a panel into and drop its hide request
fn force_expand(model: &mut AppModel, host: &mut dyn DockHost, area: DockArea, trigger: PanelId) {
    show_area(model, host, area, Some(trigger));
    model.proximity.auto_revealed.remove(area);
    if model.toolbar.set_checked(area, false) {
        debug!(%area, "unchecked toggle after host re-docked a panel");
        host.sync_toolbar(&model.toolbar);
    }
}

/// Handle a host layout-change notification
///
/// Refreshes the visibility snapshot, records panels that became docked and
/// visible inside a collapsed area as tab triggers, expands those areas, and
/// recomputes which toggles are enabled.
pub fn reconcile_layout(model: &mut AppModel, host: &mut dyn DockHost) {
    let panels = host.panels();
    for panel in &panels {
        let Ok(state) = host.panel_state(*panel) else {
            continue;
        };
        let previous = model.tracker.snapshot.get(panel).copied();
        let was_hidden_or_floating = previous.is_some_and(|s| !s.visible || s.floating);
        let lands_collapsed = state.area.is_some_and(|a| model.is_collapsed(a));
        if state.is_docked_and_visible()
            && was_hidden_or_floating
            && lands_collapsed
            && !model.tracker.pending_triggers.contains(panel)
        {
            trace!(%panel, "panel became docked and visible");
            model.tracker.pending_triggers.push(*panel);
        }
        model
            .tracker
            .snapshot
            .insert(*panel, PanelSnapshot::from(&state));
    }
    model.tracker.snapshot.retain(|p, _| panels.contains(p));

    for area in DockArea::ALL {
        if !model.is_collapsed(area) {
            continue;
        }
        let intruder = model
            .tracker
            .pending_triggers
            .iter()
            .copied()
            .chain(panels.iter().copied())
            .find(|p| host.panel_state(*p).is_ok_and(|s| s.is_shown_in(area)));
        if let Some(panel) = intruder {
            debug!(%area, %panel, "host docked a panel into a collapsed area");
            force_expand(model, host, area, panel);
        }
    }

    // A trigger only matters while its area is collapsed
    let collapsed = model.collapsed_mask();
    model.tracker.pending_triggers.retain(|p| {
        host.panel_state(*p)
            .is_ok_and(|s| s.area.is_some_and(|a| collapsed.contains(a)))
    });

    refresh_enabled(model, host);
}

/// Work shared by every transition: snapshot our own visibility changes so
/// the next layout notification does not mistake them for host moves, and
/// resync the toolbar
fn after_transition(model: &mut AppModel, host: &mut dyn DockHost) {
    for panel in host.panels() {
        if let Ok(state) = host.panel_state(panel) {
            model
                .tracker
                .snapshot
                .insert(panel, PanelSnapshot::from(&state));
        }
    }
    refresh_enabled(model, host);
}

/// A toggle is enabled while its area has something to hide or restore
pub fn refresh_enabled(model: &mut AppModel, host: &mut dyn DockHost) {
    let mut changed = false;
    for area in DockArea::ALL {
        let has_visible = host
            .panels()
            .into_iter()
            .any(|p| host.panel_state(p).is_ok_and(|s| s.is_shown_in(area)));
        let enabled = has_visible || model.is_collapsed(area) || model.toolbar.is_checked(area);
        changed |= model.toolbar.set_enabled(area, enabled);
    }
    if changed {
        host.sync_toolbar(&model.toolbar);
    }
}
