//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockfold::area::DockArea;
use dockfold::config::PluginConfig;
use dockfold::geometry::Rect;
use dockfold::host::{DockHost, MemoryHost};
use dockfold::model::AppModel;
use dockfold::panel::{PanelId, TabGroupId};
use dockfold::plugin::Plugin;
use dockfold::settings::MemorySettings;

/// Central widget of the standard 1280x800 window
pub const CENTRAL: Rect = Rect::new(250, 0, 780, 600);

/// Panel and tab-group handles of the standard layout
#[derive(Debug, Clone, Copy)]
pub struct Docks {
    pub layers: PanelId,
    pub browser: PanelId,
    pub processing: PanelId,
    pub log: PanelId,
    pub python: PanelId,
    pub left_tabs: TabGroupId,
    pub bottom_tabs: TabGroupId,
}

/// A 1280x800 main window:
/// - left: Layers and Browser tabbed together (Layers active)
/// - right: Processing on its own
/// - bottom: Log and Python tabbed together (Log active)
/// - top: empty
pub fn standard_host() -> (MemoryHost, Docks) {
    let mut host = MemoryHost::new(CENTRAL);
    let layers = host.add_panel(DockArea::Left, Rect::new(0, 0, 250, 800));
    let browser = host.add_panel(DockArea::Left, Rect::new(0, 0, 250, 800));
    let processing = host.add_panel(DockArea::Right, Rect::new(1030, 0, 250, 600));
    let log = host.add_panel(DockArea::Bottom, Rect::new(250, 600, 780, 200));
    let python = host.add_panel(DockArea::Bottom, Rect::new(250, 600, 780, 200));
    let left_tabs = host.add_tab_group(&[layers, browser]);
    let bottom_tabs = host.add_tab_group(&[log, python]);

    (
        host,
        Docks {
            layers,
            browser,
            processing,
            log,
            python,
            left_tabs,
            bottom_tabs,
        },
    )
}

/// Register every host panel's tab key with the model
pub fn register_all(model: &mut AppModel, host: &MemoryHost) {
    for panel in host.panels() {
        model
            .tracker
            .registry
            .register(panel, MemoryHost::tab_key_for(panel));
    }
}

/// Model with every standard panel registered
pub fn standard_model(host: &MemoryHost) -> AppModel {
    let mut model = AppModel::default();
    register_all(&mut model, host);
    model
}

/// Attached plugin over the standard layout with empty settings
pub fn standard_plugin() -> (Plugin<MemoryHost, MemorySettings>, Docks) {
    let (host, docks) = standard_host();
    let plugin = plugin_with(host, MemorySettings::new());
    (plugin, docks)
}

/// Attached plugin over `host`, with every host panel registered
pub fn plugin_with(
    host: MemoryHost,
    settings: MemorySettings,
) -> Plugin<MemoryHost, MemorySettings> {
    let panels = host.panels();
    let mut plugin = Plugin::new(host, settings, &PluginConfig::default());
    for panel in panels {
        plugin.register_panel(panel, MemoryHost::tab_key_for(panel));
    }
    plugin.attach();
    plugin
}
