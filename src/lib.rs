//! dockfold - collapse a main window's dock areas into thin strips
//!
//! This crate provides the core types and logic for a dock hide/show
//! controller implementing the Elm Architecture pattern. It attaches to a
//! host window manager through the `DockHost` port; the host keeps
//! ownership of the window, its panels and its tab-groups.

pub mod area;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod geometry;
pub mod host;
pub mod icons;
pub mod messages;
pub mod model;
pub mod panel;
pub mod panels;
pub mod plugin;
pub mod runtime;
pub mod settings;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use area::{AreaMask, DockArea};
pub use commands::Cmd;
pub use config::PluginConfig;
pub use host::{DockHost, HostError, MemoryHost};
pub use messages::Msg;
pub use model::AppModel;
pub use plugin::Plugin;
