//! In-memory host window manager
//!
//! Simulates a main window with dock panels, tab-groups, placeholder slots,
//! corner ownership and event observers, so the core can be exercised
//! without a GUI toolkit. It records every resize and notification-block
//! call for inspection.

use std::collections::{BTreeMap, HashSet};

use super::{DockHost, HostError, ObserverTarget};
use crate::area::{AreaMask, Axis, Corner, DockArea};
use crate::geometry::{Point, Rect};
use crate::icons::IconSet;
use crate::panel::{PanelId, PanelState, TabGroupId, TabKey};
use crate::panels::{AreaToggleControl, CollapsedAreaPlaceholder, OptionsPanel};

#[derive(Debug, Clone)]
struct MemoryPanel {
    area: Option<DockArea>,
    visible: bool,
    floating: bool,
    geometry: Rect,
}

#[derive(Debug, Clone, Default)]
struct MemoryTabGroup {
    /// `(key, stale)` per tab
    tabs: Vec<(TabKey, bool)>,
    current: Option<usize>,
}

/// Mock host for tests and benchmarks
#[derive(Debug, Clone)]
pub struct MemoryHost {
    panels: BTreeMap<PanelId, MemoryPanel>,
    groups: BTreeMap<TabGroupId, MemoryTabGroup>,
    next_id: u64,
    placeholders: AreaMask,
    placeholder_extents: [u32; 4],
    central: Rect,
    corners: [DockArea; 4],
    main_window_visible: bool,
    /// Points where the main window itself is the widget under the pointer
    separator_points: HashSet<Point>,
    observers: HashSet<ObserverTarget>,
    notifications_blocked: bool,
    block_count: usize,
    resize_log: Vec<(Vec<(PanelId, i32)>, Axis)>,
    controls_installed: bool,
    /// Size of each toolbar icon handed over at install time
    icon_sizes: Option<[(u32, u32); 4]>,
    toolbar_state: Option<(AreaMask, AreaMask)>,
    options_visible: bool,
}

impl MemoryHost {
    /// A visible main window whose central widget occupies `central`
    ///
    /// Corners default to top/bottom ownership, as most toolkits do.
    pub fn new(central: Rect) -> Self {
        Self {
            panels: BTreeMap::new(),
            groups: BTreeMap::new(),
            next_id: 1,
            placeholders: AreaMask::EMPTY,
            placeholder_extents: [0; 4],
            central,
            corners: [
                DockArea::Top,
                DockArea::Top,
                DockArea::Bottom,
                DockArea::Bottom,
            ],
            main_window_visible: true,
            separator_points: HashSet::new(),
            observers: HashSet::new(),
            notifications_blocked: false,
            block_count: 0,
            resize_log: Vec::new(),
            controls_installed: false,
            icon_sizes: None,
            toolbar_state: None,
            options_visible: false,
        }
    }

    // === Scenario setup ===

    /// Dock a new visible panel into `area`
    pub fn add_panel(&mut self, area: DockArea, geometry: Rect) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        self.panels.insert(
            id,
            MemoryPanel {
                area: Some(area),
                visible: true,
                floating: false,
                geometry,
            },
        );
        id
    }

    /// Destroy a panel; its tabs disappear from every group
    pub fn delete_panel(&mut self, panel: PanelId) {
        self.panels.remove(&panel);
        let key = Self::tab_key_for(panel);
        for group in self.groups.values_mut() {
            if let Some(pos) = group.tabs.iter().position(|(k, _)| *k == key) {
                group.tabs.remove(pos);
                group.current = match group.current {
                    _ if group.tabs.is_empty() => None,
                    Some(c) if c > pos => Some(c - 1),
                    Some(c) => Some(c.min(group.tabs.len() - 1)),
                    None => None,
                };
            }
        }
    }

    /// Tab key this host reports for a panel
    pub fn tab_key_for(panel: PanelId) -> TabKey {
        TabKey(panel.0 + 1000)
    }

    /// Tabify panels into a new group; the first becomes the current tab
    pub fn add_tab_group(&mut self, panels: &[PanelId]) -> TabGroupId {
        let id = TabGroupId(self.next_id);
        self.next_id += 1;
        self.groups.insert(
            id,
            MemoryTabGroup {
                tabs: panels
                    .iter()
                    .map(|p| (Self::tab_key_for(*p), false))
                    .collect(),
                current: if panels.is_empty() { None } else { Some(0) },
            },
        );
        id
    }

    /// Make a tab's data stop resolving to a live widget
    pub fn mark_tab_stale(&mut self, group: TabGroupId, index: usize) {
        if let Some(tab) = self
            .groups
            .get_mut(&group)
            .and_then(|g| g.tabs.get_mut(index))
        {
            tab.1 = true;
        }
    }

    /// Select a tab directly, as the user would
    pub fn select_tab(&mut self, group: TabGroupId, index: usize) {
        if let Some(g) = self.groups.get_mut(&group) {
            if index < g.tabs.len() {
                g.current = Some(index);
            }
        }
    }

    /// Current tab's panel, if the tab is live
    pub fn current_panel(&self, group: TabGroupId) -> Option<PanelId> {
        let g = self.groups.get(&group)?;
        let (key, stale) = g.tabs.get(g.current?)?;
        if *stale {
            return None;
        }
        self.panels.keys().copied().find(|p| Self::tab_key_for(*p) == *key)
    }

    /// Move a panel to another area (or float it with `None`), as a user drag would
    pub fn move_panel(&mut self, panel: PanelId, area: Option<DockArea>) {
        if let Some(p) = self.panels.get_mut(&panel) {
            p.area = area;
            p.floating = area.is_none();
        }
    }

    pub fn set_floating(&mut self, panel: PanelId, floating: bool) {
        if let Some(p) = self.panels.get_mut(&panel) {
            p.floating = floating;
        }
    }

    /// Change visibility outside the core (e.g. from the host's panels menu)
    pub fn set_visible(&mut self, panel: PanelId, visible: bool) {
        if let Some(p) = self.panels.get_mut(&panel) {
            p.visible = visible;
        }
    }

    pub fn set_geometry(&mut self, panel: PanelId, geometry: Rect) {
        if let Some(p) = self.panels.get_mut(&panel) {
            p.geometry = geometry;
        }
    }

    pub fn set_central(&mut self, central: Rect) {
        self.central = central;
    }

    pub fn set_corner_owner(&mut self, corner: Corner, area: DockArea) {
        self.corners[corner_index(corner)] = area;
    }

    pub fn set_main_window_visible(&mut self, visible: bool) {
        self.main_window_visible = visible;
    }

    /// Declare that the main window (not a panel) is under `p`
    pub fn add_separator_point(&mut self, p: Point) {
        self.separator_points.insert(p);
    }

    // === Inspection ===

    /// State of a live panel
    ///
    /// # Panics
    /// If the panel was deleted.
    pub fn state(&self, panel: PanelId) -> PanelState {
        self.panel_state(panel)
            .unwrap_or_else(|e| panic!("no state for {}: {}", panel, e))
    }

    pub fn placeholder_attached(&self, area: DockArea) -> bool {
        self.placeholders.contains(area)
    }

    /// Thickness of the last placeholder inserted into `area`
    pub fn placeholder_extent(&self, area: DockArea) -> u32 {
        self.placeholder_extents[area.index()]
    }

    pub fn observer_installed(&self, target: ObserverTarget) -> bool {
        self.observers.contains(&target)
    }

    pub fn notifications_blocked(&self) -> bool {
        self.notifications_blocked
    }

    /// How many times notifications were blocked
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn resize_log(&self) -> &[(Vec<(PanelId, i32)>, Axis)] {
        &self.resize_log
    }

    pub fn clear_resize_log(&mut self) {
        self.resize_log.clear();
    }

    pub fn controls_installed(&self) -> bool {
        self.controls_installed
    }

    /// Icon dimensions in `DockArea::ALL` order, if icons came with the controls
    pub fn icon_sizes(&self) -> Option<[(u32, u32); 4]> {
        self.icon_sizes
    }

    /// Last synced toolbar `(checked, enabled)` masks
    pub fn toolbar_state(&self) -> Option<(AreaMask, AreaMask)> {
        self.toolbar_state
    }

    pub fn options_visible(&self) -> bool {
        self.options_visible
    }

    fn record_toolbar(&mut self, toolbar: &AreaToggleControl) {
        let enabled: AreaMask = DockArea::ALL
            .into_iter()
            .filter(|a| toolbar.is_enabled(*a))
            .collect();
        self.toolbar_state = Some((toolbar.get_state(), enabled));
    }

    fn group(&self, group: TabGroupId) -> Result<&MemoryTabGroup, HostError> {
        self.groups.get(&group).ok_or(HostError::UnknownGroup(group))
    }
}

fn corner_index(corner: Corner) -> usize {
    match corner {
        Corner::TopLeft => 0,
        Corner::TopRight => 1,
        Corner::BottomLeft => 2,
        Corner::BottomRight => 3,
    }
}

impl DockHost for MemoryHost {
    fn panels(&self) -> Vec<PanelId> {
        self.panels.keys().copied().collect()
    }

    fn panel_state(&self, panel: PanelId) -> Result<PanelState, HostError> {
        let p = self
            .panels
            .get(&panel)
            .ok_or(HostError::PanelDeleted(panel))?;
        Ok(PanelState {
            area: p.area,
            visible: p.visible,
            floating: p.floating,
            geometry: p.geometry,
        })
    }

    fn set_panel_visible(&mut self, panel: PanelId, visible: bool) -> Result<(), HostError> {
        let p = self
            .panels
            .get_mut(&panel)
            .ok_or(HostError::PanelDeleted(panel))?;
        p.visible = visible;
        Ok(())
    }

    fn resize_panels(&mut self, sizes: &[(PanelId, i32)], axis: Axis) {
        for (panel, size) in sizes {
            if let Some(p) = self.panels.get_mut(panel) {
                match axis {
                    Axis::Horizontal => p.geometry.width = *size,
                    Axis::Vertical => p.geometry.height = *size,
                }
            }
        }
        self.resize_log.push((sizes.to_vec(), axis));
    }

    fn insert_placeholder(&mut self, placeholder: &CollapsedAreaPlaceholder) {
        self.placeholders.insert(placeholder.area());
        self.placeholder_extents[placeholder.area().index()] = placeholder.extent();
    }

    fn remove_placeholder(&mut self, area: DockArea) {
        self.placeholders.remove(area);
    }

    fn tab_groups(&self) -> Vec<TabGroupId> {
        self.groups.keys().copied().collect()
    }

    fn tab_count(&self, group: TabGroupId) -> Result<usize, HostError> {
        Ok(self.group(group)?.tabs.len())
    }

    fn current_tab(&self, group: TabGroupId) -> Result<Option<usize>, HostError> {
        Ok(self.group(group)?.current)
    }

    fn set_current_tab(&mut self, group: TabGroupId, index: usize) -> Result<(), HostError> {
        let g = self
            .groups
            .get_mut(&group)
            .ok_or(HostError::UnknownGroup(group))?;
        match g.tabs.get(index) {
            Some((_, false)) => {
                g.current = Some(index);
                Ok(())
            }
            _ => Err(HostError::StaleTab { group, index }),
        }
    }

    fn tab_key(&self, group: TabGroupId, index: usize) -> Result<TabKey, HostError> {
        match self.group(group)?.tabs.get(index) {
            Some((key, false)) => Ok(*key),
            _ => Err(HostError::StaleTab { group, index }),
        }
    }

    fn central_geometry(&self) -> Rect {
        self.central
    }

    fn corner_owner(&self, corner: Corner) -> DockArea {
        self.corners[corner_index(corner)]
    }

    fn is_main_window_at(&self, p: Point) -> bool {
        self.separator_points.contains(&p)
    }

    fn is_main_window_visible(&self) -> bool {
        self.main_window_visible
    }

    fn set_observer(&mut self, target: ObserverTarget, installed: bool) {
        if installed {
            self.observers.insert(target);
        } else {
            self.observers.remove(&target);
        }
    }

    fn block_notifications(&mut self, blocked: bool) {
        if blocked {
            self.block_count += 1;
        }
        self.notifications_blocked = blocked;
    }

    fn install_controls(&mut self, toolbar: &AreaToggleControl, icons: Option<&IconSet>) {
        self.controls_installed = true;
        self.icon_sizes = icons.map(|icons| DockArea::ALL.map(|area| icons.get(area).dimensions()));
        self.record_toolbar(toolbar);
    }

    fn remove_controls(&mut self) {
        self.controls_installed = false;
    }

    fn sync_toolbar(&mut self, toolbar: &AreaToggleControl) {
        self.record_toolbar(toolbar);
    }

    fn show_options(&mut self, _options: &OptionsPanel) {
        self.options_visible = true;
    }

    fn hide_options(&mut self) {
        self.options_visible = false;
    }
}
