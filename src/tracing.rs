//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging dock
//! hide/show transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug` - layout snapshot diffs only
//! - `RUST_LOG=dockfold::update::dock=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockfold/logs/dockfold.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::area::AreaMask;
use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`); the file layer always
/// logs at debug level. Safe to call once per process; the host normally
/// owns the subscriber, so only call this from standalone tools.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockfold.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of dock layout state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub collapsed: AreaMask,
    pub requested: AreaMask,
    pub enabled: AreaMask,
    pub hidden_count: usize,
    pub tab_membership: usize,
}

impl LayoutSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            collapsed: model.collapsed_mask(),
            requested: model.toolbar.get_state(),
            enabled: crate::area::DockArea::ALL
                .into_iter()
                .filter(|a| model.toolbar.is_enabled(*a))
                .collect(),
            hidden_count: model.tracker.hidden.len(),
            tab_membership: model.tracker.tab_membership.len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.collapsed != other.collapsed {
            changes.push(format!(
                "collapsed: {:04b} → {:04b}",
                self.collapsed.bits(),
                other.collapsed.bits()
            ));
        }
        if self.requested != other.requested {
            changes.push(format!(
                "requested: {:04b} → {:04b}",
                self.requested.bits(),
                other.requested.bits()
            ));
        }
        if self.enabled != other.enabled {
            changes.push(format!(
                "enabled: {:04b} → {:04b}",
                self.enabled.bits(),
                other.enabled.bits()
            ));
        }
        if self.hidden_count != other.hidden_count {
            changes.push(format!(
                "hidden: {} → {}",
                self.hidden_count, other.hidden_count
            ));
        }
        if self.tab_membership != other.tab_membership {
            changes.push(format!(
                "tabs: {} → {}",
                self.tab_membership, other.tab_membership
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
