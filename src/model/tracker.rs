//! Dock state tracker bookkeeping
//!
//! Records which panels the core has hidden and what it needs to put them
//! back: their geometry at hide time, which of them were the active tab of
//! their tab-group, and a snapshot of every panel's visibility used to spot
//! panels the host re-docked on its own.

use std::collections::HashMap;

use crate::geometry::Rect;
use crate::panel::{PanelId, PanelRegistry, PanelState};

/// Panels hidden by the core and their geometry at hide time
///
/// Invariant: a panel is in here iff the core currently considers it hidden.
/// Kept in hide order.
#[derive(Debug, Clone, Default)]
pub struct HiddenDocks {
    entries: Vec<(PanelId, Rect)>,
}

impl HiddenDocks {
    /// Record a hidden panel, replacing any earlier geometry for it
    pub fn insert(&mut self, panel: PanelId, geometry: Rect) {
        match self.entries.iter_mut().find(|(p, _)| *p == panel) {
            Some(entry) => entry.1 = geometry,
            None => self.entries.push((panel, geometry)),
        }
    }

    pub fn remove(&mut self, panel: PanelId) -> Option<Rect> {
        let idx = self.entries.iter().position(|(p, _)| *p == panel)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, panel: PanelId) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(p, _)| *p == panel)
            .map(|(_, r)| *r)
    }

    pub fn contains(&self, panel: PanelId) -> bool {
        self.entries.iter().any(|(p, _)| *p == panel)
    }

    pub fn panels(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PanelId, Rect)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Visibility of a panel as of the last layout notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub visible: bool,
    pub floating: bool,
}

impl From<&PanelState> for PanelSnapshot {
    fn from(state: &PanelState) -> Self {
        Self {
            visible: state.visible,
            floating: state.floating,
        }
    }
}

/// Complete dock hide/show bookkeeping
#[derive(Debug, Clone, Default)]
pub struct DockTracker {
    pub hidden: HiddenDocks,
    /// Panels that were the active tab of their group when their area was hidden.
    /// Appended once per hide, consumed once on the matching show.
    pub tab_membership: Vec<PanelId>,
    /// Panels the host re-docked on its own since the last show; their tabs
    /// win over `tab_membership` on the next show
    pub pending_triggers: Vec<PanelId>,
    pub snapshot: HashMap<PanelId, PanelSnapshot>,
    pub registry: PanelRegistry,
}

impl DockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything the tracker knows about a panel
    pub fn forget(&mut self, panel: PanelId) {
        self.hidden.remove(panel);
        self.tab_membership.retain(|p| *p != panel);
        self.pending_triggers.retain(|p| *p != panel);
        self.snapshot.remove(&panel);
        self.registry.unregister(panel);
    }
}
