//! Options dialog message handlers

use crate::commands::Cmd;
use crate::host::DockHost;
use crate::messages::OptionsMsg;
use crate::model::AppModel;

pub fn update_options(
    model: &mut AppModel,
    host: &mut dyn DockHost,
    msg: OptionsMsg,
) -> Option<Cmd> {
    match msg {
        OptionsMsg::Open => {
            model.options_open = true;
            host.show_options(&model.options);
            None
        }

        OptionsMsg::Close => {
            if !model.options_open {
                return None;
            }
            model.options_open = false;
            host.hide_options();
            Some(Cmd::SaveSettings)
        }

        OptionsMsg::SetAutoUnhide { area, enabled } => {
            model.options.set_auto_unhide(area, enabled);
            None
        }

        OptionsMsg::SetUnhideDelay(ms) => {
            model.options.set_unhide_delay_ms(ms);
            None
        }

        OptionsMsg::SetRehideDelay(ms) => {
            model.options.set_rehide_delay_ms(ms);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::DockArea;
    use crate::geometry::Rect;
    use crate::host::MemoryHost;
    use crate::panels::MAX_DELAY_MS;

    #[test]
    fn test_open_close_saves_once() {
        let mut host = MemoryHost::new(Rect::new(0, 0, 800, 600));
        let mut model = AppModel::default();

        assert_eq!(update_options(&mut model, &mut host, OptionsMsg::Open), None);
        assert!(host.options_visible());

        assert_eq!(
            update_options(&mut model, &mut host, OptionsMsg::Close),
            Some(Cmd::SaveSettings)
        );
        assert!(!host.options_visible());
        assert_eq!(update_options(&mut model, &mut host, OptionsMsg::Close), None);
    }

    #[test]
    fn test_setters_update_panel() {
        let mut host = MemoryHost::new(Rect::new(0, 0, 800, 600));
        let mut model = AppModel::default();

        update_options(
            &mut model,
            &mut host,
            OptionsMsg::SetAutoUnhide {
                area: DockArea::Right,
                enabled: true,
            },
        );
        update_options(&mut model, &mut host, OptionsMsg::SetUnhideDelay(0));
        update_options(&mut model, &mut host, OptionsMsg::SetRehideDelay(99_999));

        assert!(model.options.auto_unhide(DockArea::Right));
        assert_eq!(model.options.unhide_delay_ms(), 0);
        assert_eq!(model.options.rehide_delay_ms(), MAX_DELAY_MS);
    }
}
