//! App message handlers (session restore, quit)

use tracing::{debug, info};

use super::dock::{refresh_enabled, show_all};
use super::toolbar::apply_toggle;
use crate::commands::Cmd;
use crate::host::{DockHost, ObserverTarget};
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;

/// Handle lifecycle messages
pub fn update_app(model: &mut AppModel, host: &mut dyn DockHost, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::MainWindowShown => {
            // Only the first show matters
            host.set_observer(ObserverTarget::MainWindow, false);
            Some(Cmd::next_turn(Msg::App(AppMsg::RestoreSettings)))
        }

        AppMsg::RestoreSettings => Some(Cmd::LoadSettings),

        AppMsg::ApplySettings(state) => {
            model.options.set_state(state.dialog);
            model.options.set_unhide_delay_ms(state.unhide_delay_ms);
            model.options.set_rehide_delay_ms(state.rehide_delay_ms);

            refresh_enabled(model, host);
            let changes = model.toolbar.set_state(state.toolbar);
            for (area, checked) in changes {
                apply_toggle(model, host, area, checked);
            }
            host.sync_toolbar(&model.toolbar);

            info!(
                toolbar = %format!("{:04b}", state.toolbar.bits()),
                auto_unhide = %format!("{:04b}", state.dialog.bits()),
                "settings restored"
            );
            None
        }

        AppMsg::DumpState => Some(Cmd::DumpState),

        AppMsg::AboutToQuit => {
            debug!("application quitting, restoring all areas");
            show_all(model, host);
            None
        }
    }
}
