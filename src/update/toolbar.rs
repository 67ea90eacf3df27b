//! Toolbar message handlers

use tracing::debug;

use super::dock::{hide_area, show_area};
use crate::area::DockArea;
use crate::commands::Cmd;
use crate::host::DockHost;
use crate::messages::ToolbarMsg;
use crate::model::AppModel;

pub fn update_toolbar(
    model: &mut AppModel,
    host: &mut dyn DockHost,
    msg: ToolbarMsg,
) -> Option<Cmd> {
    match msg {
        ToolbarMsg::Toggled { area, checked } => {
            model.toolbar.set_checked(area, checked);
            apply_toggle(model, host, area, checked);
            None
        }
    }
}

/// Run a toggle's new checked state through the hide/show path
///
/// The control must already hold `checked`. An explicit toggle ends any
/// auto-unhide reveal of the area.
pub fn apply_toggle(model: &mut AppModel, host: &mut dyn DockHost, area: DockArea, checked: bool) {
    debug!(%area, checked, "toggle");
    model.proximity.auto_revealed.remove(area);
    if checked {
        hide_area(model, host, area);
    } else {
        show_area(model, host, area, None);
    }
    host.sync_toolbar(&model.toolbar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::host::MemoryHost;

    #[test]
    fn test_toggle_on_hides_and_off_shows() {
        let mut host = MemoryHost::new(Rect::new(0, 0, 800, 600));
        let bottom = host.add_panel(DockArea::Bottom, Rect::new(0, 450, 800, 150));
        let mut model = AppModel::default();

        update_toolbar(
            &mut model,
            &mut host,
            ToolbarMsg::Toggled {
                area: DockArea::Bottom,
                checked: true,
            },
        );
        assert!(model.toolbar.is_checked(DockArea::Bottom));
        assert!(!host.state(bottom).visible);

        update_toolbar(
            &mut model,
            &mut host,
            ToolbarMsg::Toggled {
                area: DockArea::Bottom,
                checked: false,
            },
        );
        assert!(!model.toolbar.is_checked(DockArea::Bottom));
        assert!(host.state(bottom).visible);
    }

    #[test]
    fn test_toggle_on_empty_area_keeps_request() {
        let mut host = MemoryHost::new(Rect::new(0, 0, 800, 600));
        let mut model = AppModel::default();

        update_toolbar(
            &mut model,
            &mut host,
            ToolbarMsg::Toggled {
                area: DockArea::Top,
                checked: true,
            },
        );
        assert!(model.toolbar.is_checked(DockArea::Top));
        assert!(!model.is_collapsed(DockArea::Top));
        // Still enabled so the user can uncheck it
        assert!(model.toolbar.is_enabled(DockArea::Top));
    }
}
