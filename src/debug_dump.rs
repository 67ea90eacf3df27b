//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of the plugin state to JSON for easier debugging of
//! hide/show bookkeeping.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::area::{AreaMask, DockArea};
use crate::model::AppModel;

#[derive(Debug, Serialize)]
pub struct StateDump {
    pub timestamp: String,
    pub collapsed: Vec<DockArea>,
    pub requested: Vec<DockArea>,
    pub enabled: Vec<DockArea>,
    pub mutating: bool,
    pub tracker: TrackerDump,
    pub options: OptionsDump,
    pub proximity: ProximityDump,
}

#[derive(Debug, Serialize)]
pub struct TrackerDump {
    pub hidden: Vec<HiddenDump>,
    pub tab_membership: Vec<u64>,
    pub pending_triggers: Vec<u64>,
    pub snapshot_size: usize,
    pub registered_panels: usize,
}

#[derive(Debug, Serialize)]
pub struct HiddenDump {
    pub panel: u64,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Serialize)]
pub struct OptionsDump {
    pub auto_unhide: Vec<DockArea>,
    pub unhide_delay_ms: u32,
    pub rehide_delay_ms: u32,
    pub open: bool,
}

#[derive(Debug, Serialize)]
pub struct ProximityDump {
    pub press: Option<(i32, i32)>,
    pub auto_revealed: Vec<DockArea>,
    pub generation: u64,
}

fn areas(mask: AreaMask) -> Vec<DockArea> {
    mask.iter().collect()
}

impl StateDump {
    pub fn from_model(model: &AppModel) -> Self {
        let tracker = &model.tracker;
        Self {
            timestamp: timestamp(),
            collapsed: areas(model.collapsed_mask()),
            requested: areas(model.toolbar.get_state()),
            enabled: DockArea::ALL
                .into_iter()
                .filter(|a| model.toolbar.is_enabled(*a))
                .collect(),
            mutating: model.mutating,
            tracker: TrackerDump {
                hidden: tracker
                    .hidden
                    .iter()
                    .map(|(panel, r)| HiddenDump {
                        panel: panel.0,
                        x: r.x,
                        y: r.y,
                        width: r.width,
                        height: r.height,
                    })
                    .collect(),
                tab_membership: tracker.tab_membership.iter().map(|p| p.0).collect(),
                pending_triggers: tracker.pending_triggers.iter().map(|p| p.0).collect(),
                snapshot_size: tracker.snapshot.len(),
                registered_panels: tracker.registry.len(),
            },
            options: OptionsDump {
                auto_unhide: areas(model.options.get_state()),
                unhide_delay_ms: model.options.unhide_delay_ms(),
                rehide_delay_ms: model.options.rehide_delay_ms(),
                open: model.options_open,
            },
            proximity: ProximityDump {
                press: model.proximity.press.map(|p| (p.x, p.y)),
                auto_revealed: areas(model.proximity.auto_revealed),
                generation: model.proximity.generation,
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Write the dump as `<dir>/<timestamp>-state-dump.json`
    pub fn save_to_dir(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}-state-dump.json", self.timestamp));
        std::fs::write(&path, self.to_json())?;
        Ok(path)
    }
}

/// UTC `YYYY-MM-DD-HHMMSS`
fn timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let secs_today = secs % 86400;
    let (year, month, day) = days_to_ymd((secs / 86400) as i64);

    format!(
        "{:04}-{:02}-{:02}-{:02}{:02}{:02}",
        year,
        month,
        day,
        secs_today / 3600,
        (secs_today % 3600) / 60,
        secs_today % 60
    )
}

// Civil-from-days (Howard Hinnant)
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    let days = days + 719468;
    let era = if days >= 0 { days } else { days - 146096 } / 146097;
    let doe = (days - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m, d)
}
