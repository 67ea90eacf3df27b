//! Plugin lifecycle tests
//!
//! Attach/detach, session restore on first show, settings persistence and
//! the quit path.

mod common;

use common::{plugin_with, standard_host, standard_plugin};
use dockfold::area::DockArea;
use dockfold::config::PluginConfig;
use dockfold::host::ObserverTarget;
use dockfold::messages::{AppMsg, Msg, OptionsMsg};
use dockfold::plugin::Plugin;
use dockfold::settings::{MemorySettings, SettingsKeys, SettingsStore};

fn keys() -> SettingsKeys {
    SettingsKeys::new("default")
}

fn saved_settings(toolbar: i64, dialog: i64) -> MemorySettings {
    let mut settings = MemorySettings::new();
    let keys = keys();
    settings.save(&keys.toolbar_state, toolbar).unwrap();
    settings.save(&keys.dialog_state, dialog).unwrap();
    settings
}

// ========================================================================
// Attach / Detach
// ========================================================================

#[test]
fn test_attach_with_visible_window_restores_immediately() {
    let (host, d) = standard_host();
    // Left + Bottom
    let plugin = plugin_with(host, saved_settings(0b1001, 0));

    assert!(plugin.model().is_collapsed(DockArea::Left));
    assert!(plugin.model().is_collapsed(DockArea::Bottom));
    assert!(!plugin.model().is_collapsed(DockArea::Right));
    assert!(!plugin.host().state(d.layers).visible);
    assert!(!plugin
        .host()
        .observer_installed(ObserverTarget::MainWindow));
    assert!(plugin
        .host()
        .observer_installed(ObserverTarget::CentralWidget));
}

#[test]
fn test_attach_before_first_show_defers_restore() {
    let (mut host, d) = standard_host();
    host.set_main_window_visible(false);
    let mut plugin = plugin_with(host, saved_settings(0b0010, 0));

    assert!(plugin
        .host()
        .observer_installed(ObserverTarget::MainWindow));
    assert!(!plugin.model().is_collapsed(DockArea::Right));

    plugin.host_mut().set_main_window_visible(true);
    plugin.dispatch(Msg::App(AppMsg::MainWindowShown));
    assert!(!plugin
        .host()
        .observer_installed(ObserverTarget::MainWindow));
    // One event-loop turn later
    assert!(!plugin.model().is_collapsed(DockArea::Right));

    plugin.tick(0);
    assert!(plugin.model().is_collapsed(DockArea::Right));
    assert!(!plugin.host().state(d.processing).visible);
}

#[test]
fn test_missing_settings_default_to_nothing_hidden() {
    let (plugin, _) = standard_plugin();

    assert!(plugin.model().collapsed_mask().is_empty());
    assert!(plugin.model().toolbar.get_state().is_empty());
    assert!(plugin.model().options.get_state().is_empty());
    assert_eq!(plugin.model().options.unhide_delay_ms(), 500);
}

#[test]
fn test_detach_persists_and_restores_every_area() {
    let (mut plugin, d) = standard_plugin();
    plugin.dispatch(Msg::toggled(DockArea::Left, true));
    plugin.dispatch(Msg::toggled(DockArea::Right, true));
    plugin.dispatch(Msg::Options(OptionsMsg::SetAutoUnhide {
        area: DockArea::Top,
        enabled: true,
    }));
    plugin.dispatch(Msg::Options(OptionsMsg::SetRehideDelay(750)));

    plugin.detach();

    assert!(!plugin.is_attached());
    assert!(plugin.model().collapsed_mask().is_empty());
    assert!(plugin.host().state(d.layers).visible);
    assert!(plugin.host().state(d.processing).visible);
    assert!(!plugin.host().controls_installed());
    assert!(!plugin
        .host()
        .observer_installed(ObserverTarget::CentralWidget));

    let keys = keys();
    assert_eq!(plugin.settings().get(&keys.toolbar_state), Some(0b0011));
    assert_eq!(plugin.settings().get(&keys.dialog_state), Some(0b0100));
    assert_eq!(plugin.settings().get(&keys.rehide_delay), Some(750));
}

#[test]
fn test_settings_survive_a_restart() {
    let (mut plugin, _) = standard_plugin();
    plugin.dispatch(Msg::toggled(DockArea::Bottom, true));
    plugin.detach();
    let settings = plugin.settings().clone();

    let (host, d) = standard_host();
    let plugin = plugin_with(host, settings);

    assert!(plugin.model().toolbar.is_checked(DockArea::Bottom));
    assert!(plugin.model().is_collapsed(DockArea::Bottom));
    assert!(!plugin.host().state(d.log).visible);
}

#[test]
fn test_detach_twice_is_harmless() {
    let (mut plugin, _) = standard_plugin();
    plugin.detach();
    plugin.detach();
    assert!(!plugin.is_attached());
}

#[test]
fn test_settings_scoped_by_installation() {
    let (host, _) = standard_host();
    let config = PluginConfig {
        installation_id: "qgis-3".to_string(),
        ..PluginConfig::default()
    };
    let mut plugin = Plugin::new(host, MemorySettings::new(), &config);
    plugin.attach();
    plugin.dispatch(Msg::toggled(DockArea::Left, true));
    plugin.detach();

    assert_eq!(
        plugin.settings().get("qgis-3/HideDocks/toolbarState"),
        Some(1)
    );
    assert_eq!(plugin.settings().get("default/HideDocks/toolbarState"), None);
}

// ========================================================================
// Options Dialog / Quit
// ========================================================================

#[test]
fn test_closing_options_saves_settings() {
    let (mut plugin, _) = standard_plugin();
    plugin.dispatch(Msg::Options(OptionsMsg::Open));
    assert!(plugin.host().options_visible());

    plugin.dispatch(Msg::Options(OptionsMsg::SetUnhideDelay(100)));
    plugin.dispatch(Msg::Options(OptionsMsg::Close));

    assert!(!plugin.host().options_visible());
    assert_eq!(plugin.settings().get(&keys().unhide_delay), Some(100));
}

#[test]
fn test_about_to_quit_shows_all_but_keeps_requests() {
    let (mut plugin, d) = standard_plugin();
    plugin.dispatch(Msg::toggled(DockArea::Left, true));
    plugin.dispatch(Msg::App(AppMsg::AboutToQuit));

    assert!(plugin.host().state(d.layers).visible);
    assert!(plugin.model().toolbar.is_checked(DockArea::Left));
}
