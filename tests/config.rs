//! Configuration system tests
//!
//! Tests for config paths, plugin config and the YAML settings store.

use dockfold::area::AreaMask;
use dockfold::config::PluginConfig;
use dockfold::config_paths;
use dockfold::settings::{PersistedState, SettingsKeys, SettingsStore, YamlSettings};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("dockfold"));
}

#[test]
fn test_files_live_under_config_dir() {
    let dir = config_paths::config_dir().unwrap();
    let config = config_paths::config_file().unwrap();
    let settings = config_paths::settings_file().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    let dumps = config_paths::dumps_dir().unwrap();

    assert_eq!(config.parent(), Some(dir.as_path()));
    assert_eq!(settings.parent(), Some(dir.as_path()));
    assert_eq!(logs.parent(), Some(dir.as_path()));
    assert_eq!(dumps.parent(), Some(dir.as_path()));
    assert!(config.to_string_lossy().ends_with("config.yaml"));
    assert!(settings.to_string_lossy().ends_with("settings.yaml"));
}

// ========================================================================
// PluginConfig Tests
// ========================================================================

#[test]
fn test_plugin_config_defaults() {
    let config = PluginConfig::default();
    assert_eq!(config.installation_id, "default");
    assert_eq!(config.placeholder_extent, 12);
    assert_eq!(config.logical_dpi, 96.0);
    assert_eq!(config.dump_dir, None);
}

#[test]
fn test_plugin_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = PluginConfig {
        installation_id: "desktop-2".to_string(),
        placeholder_extent: 16,
        logical_dpi: 144.0,
        dump_dir: Some(dir.path().join("dumps")),
    };

    config.save_to(&path).unwrap();
    assert_eq!(PluginConfig::load_from(&path), config);
}

#[test]
fn test_plugin_config_partial_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "placeholder_extent: 8\n").unwrap();

    let config = PluginConfig::load_from(&path);
    assert_eq!(config.placeholder_extent, 8);
    assert_eq!(config.installation_id, "default");
}

#[test]
fn test_plugin_config_invalid_yaml_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "placeholder_extent: [not a number").unwrap();

    assert_eq!(PluginConfig::load_from(&path), PluginConfig::default());
}

// ========================================================================
// YamlSettings Tests
// ========================================================================

#[test]
fn test_yaml_settings_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = YamlSettings::open(dir.path().join("settings.yaml")).unwrap();
    assert_eq!(store.load("default/HideDocks/toolbarState").unwrap(), None);
}

#[test]
fn test_yaml_settings_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yaml");
    let keys = SettingsKeys::new("default");
    let state = PersistedState {
        toolbar: AreaMask::from_bits(0b0101),
        dialog: AreaMask::from_bits(0b0010),
        unhide_delay_ms: 150,
        rehide_delay_ms: 900,
    };

    let mut store = YamlSettings::open(&path).unwrap();
    state.save(&mut store, &keys).unwrap();

    let reopened = YamlSettings::open(&path).unwrap();
    assert_eq!(PersistedState::load(&reopened, &keys).unwrap(), state);
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn test_yaml_settings_out_of_range_values_are_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yaml");
    std::fs::write(
        &path,
        "default/HideDocks/toolbarState: 255\ndefault/HideDocks/unhideDelay: -40\ndefault/HideDocks/rehideDelay: 999999\n",
    )
    .unwrap();

    let store = YamlSettings::open(&path).unwrap();
    let state = PersistedState::load(&store, &SettingsKeys::new("default")).unwrap();
    assert_eq!(state.toolbar, AreaMask::FULL);
    assert_eq!(state.unhide_delay_ms, 0);
    assert_eq!(state.rehide_delay_ms, 10_000);
}

#[test]
fn test_yaml_settings_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yaml");
    std::fs::write(&path, "{ this is: [not valid").unwrap();

    let err = YamlSettings::open(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse settings"));
}
