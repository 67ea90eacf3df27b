//! Plugin lifecycle
//!
//! `Plugin` owns the model, the host port and the settings store, runs the
//! update loop and executes the commands it returns. The host event adapter
//! calls `dispatch` for every translated event and `tick` from its timer.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::commands::Cmd;
use crate::config::PluginConfig;
use crate::config_paths;
use crate::debug_dump::StateDump;
use crate::host::{DockHost, ObserverTarget};
use crate::icons::IconSet;
use crate::messages::{AppMsg, DockMsg, Msg};
use crate::model::AppModel;
use crate::panel::{PanelId, TabKey};
use crate::runtime::Scheduler;
use crate::settings::{PersistedState, SettingsKeys, SettingsStore};
use crate::update::{dock, update};

pub struct Plugin<H: DockHost, S: SettingsStore> {
    model: AppModel,
    host: H,
    settings: S,
    keys: SettingsKeys,
    dump_dir: Option<PathBuf>,
    scheduler: Scheduler,
    /// Host clock as of the last `tick`
    now_ms: u64,
    attached: bool,
}

impl<H: DockHost, S: SettingsStore> Plugin<H, S> {
    pub fn new(host: H, settings: S, config: &PluginConfig) -> Self {
        Self {
            model: AppModel::new(config),
            host,
            settings,
            keys: SettingsKeys::new(&config.installation_id),
            dump_dir: config.dump_dir.clone().or_else(config_paths::dumps_dir),
            scheduler: Scheduler::new(),
            now_ms: 0,
            attached: false,
        }
    }

    /// Wire the plugin into the host window
    ///
    /// Settings are restored right away if the main window is already shown;
    /// otherwise on the turn after its first show.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;

        self.host.set_observer(ObserverTarget::CentralWidget, true);
        let icons = match IconSet::shared() {
            Ok(icons) => Some(icons),
            Err(e) => {
                warn!("Failed to load toolbar icons: {:#}", e);
                None
            }
        };
        self.host.install_controls(&self.model.toolbar, icons);
        self.dispatch(Msg::Dock(DockMsg::LayoutChanged));

        if self.host.is_main_window_visible() {
            self.restore_settings();
        } else {
            debug!("main window hidden, waiting for first show");
            self.host.set_observer(ObserverTarget::MainWindow, true);
        }
        info!("attached");
    }

    /// Persist state and hand the window back with every area expanded
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;

        self.save_settings();
        self.host.set_observer(ObserverTarget::CentralWidget, false);
        self.host.set_observer(ObserverTarget::MainWindow, false);
        self.host.remove_controls();
        self.host.hide_options();
        self.model.options_open = false;
        dock::show_all(&mut self.model, &mut self.host);
        self.scheduler = Scheduler::new();
        info!("detached");
    }

    /// Run one message through the update loop and execute its commands
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, &mut self.host, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Advance the clock and deliver every deferred message now due
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        for msg in self.scheduler.take_due(self.now_ms) {
            self.dispatch(msg);
        }
    }

    /// When the host should call `tick` next, if anything is pending
    pub fn next_due(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    pub fn register_panel(&mut self, panel: PanelId, key: TabKey) {
        self.dispatch(Msg::Dock(DockMsg::RegisterPanel { panel, key }));
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, for adapters and tests that change the layout
    /// behind the plugin's back
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Defer { delay_ms, msg } => {
                self.scheduler
                    .schedule(self.now_ms.saturating_add(delay_ms), *msg);
            }
            Cmd::LoadSettings => self.restore_settings(),
            Cmd::SaveSettings => self.save_settings(),
            Cmd::DumpState => self.dump_state(),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn restore_settings(&mut self) {
        let state = match PersistedState::load(&self.settings, &self.keys) {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to load settings, using defaults: {:#}", e);
                PersistedState::default()
            }
        };
        self.dispatch(Msg::App(AppMsg::ApplySettings(state)));
    }

    fn dump_state(&self) {
        let Some(dir) = &self.dump_dir else {
            warn!("No dump directory available");
            return;
        };
        match StateDump::from_model(&self.model).save_to_dir(dir) {
            Ok(path) => info!("State dumped to {}", path.display()),
            Err(e) => warn!("Failed to dump state: {}", e),
        }
    }

    fn save_settings(&mut self) {
        let state = self.model.persisted_state();
        if let Err(e) = state.save(&mut self.settings, &self.keys) {
            warn!("Failed to save settings: {:#}", e);
        }
    }
}
