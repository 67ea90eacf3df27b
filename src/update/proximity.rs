//! Proximity trigger handlers
//!
//! Two ways the pointer drives transitions:
//! - hover: entering the central widget hides the nearest requested area,
//!   leaving it toward a collapsed area with auto-unhide reveals that area
//! - separator click: a press and release on the same spot of bare main
//!   window outside the central widget toggles the area on that side

use tracing::{debug, trace};

use super::dock::{hide_area, show_area};
use super::toolbar::apply_toggle;
use crate::area::{Corner, DockArea};
use crate::commands::Cmd;
use crate::geometry::Point;
use crate::host::DockHost;
use crate::messages::{DelayedAction, Msg, ProximityMsg};
use crate::model::AppModel;

pub fn update_proximity(
    model: &mut AppModel,
    host: &mut dyn DockHost,
    msg: ProximityMsg,
) -> Option<Cmd> {
    match msg {
        ProximityMsg::PointerEntered(p) => pointer_entered(model, host, p),
        ProximityMsg::PointerLeft(p) => pointer_left(model, host, p),

        ProximityMsg::MousePressed(p) => {
            model.proximity.press = Some(p);
            None
        }

        ProximityMsg::MouseReleased(p) => {
            let pressed_at = model.proximity.press.take();
            if pressed_at == Some(p) && host.is_main_window_at(p) {
                if let Some(area) = separator_target(&*host, p) {
                    if let Some(checked) = model.toolbar.toggle(area) {
                        debug!(%area, checked, "separator click");
                        apply_toggle(model, host, area, checked);
                    }
                }
            }
            None
        }

        ProximityMsg::DelayElapsed {
            area,
            action,
            generation,
        } => {
            if generation != model.proximity.generation {
                trace!(%area, ?action, "stale delayed action dropped");
                return None;
            }
            match action {
                DelayedAction::Unhide => {
                    if wants_unhide(model, area) {
                        reveal(model, host, area);
                    }
                }
                DelayedAction::Rehide => {
                    if model.proximity.auto_revealed.contains(area) {
                        rehide(model, host, area);
                    }
                }
            }
            None
        }
    }
}

fn pointer_entered(model: &mut AppModel, host: &mut dyn DockHost, p: Point) -> Option<Cmd> {
    model.proximity.generation += 1;

    let area = host.central_geometry().nearest_edge(p);
    if !model.toolbar.is_checked(area) {
        return None;
    }

    let delay = model.options.rehide_delay_ms();
    if model.proximity.auto_revealed.contains(area) && delay > 0 {
        return Some(Cmd::after(
            u64::from(delay),
            Msg::Proximity(ProximityMsg::DelayElapsed {
                area,
                action: DelayedAction::Rehide,
                generation: model.proximity.generation,
            }),
        ));
    }

    rehide(model, host, area);
    None
}

fn pointer_left(model: &mut AppModel, host: &mut dyn DockHost, p: Point) -> Option<Cmd> {
    model.proximity.generation += 1;

    let area = host.central_geometry().crossed_edge(p)?;
    if !wants_unhide(model, area) {
        return None;
    }

    let delay = model.options.unhide_delay_ms();
    if delay == 0 {
        reveal(model, host, area);
        return None;
    }

    Some(Cmd::after(
        u64::from(delay),
        Msg::Proximity(ProximityMsg::DelayElapsed {
            area,
            action: DelayedAction::Unhide,
            generation: model.proximity.generation,
        }),
    ))
}

/// Requested hidden, collapsed, and opted into auto-unhide
fn wants_unhide(model: &AppModel, area: DockArea) -> bool {
    model.toolbar.is_checked(area) && model.options.auto_unhide(area) && model.is_collapsed(area)
}

fn reveal(model: &mut AppModel, host: &mut dyn DockHost, area: DockArea) {
    debug!(%area, "auto-unhide");
    show_area(model, host, area, None);
    model.proximity.auto_revealed.insert(area);
}

fn rehide(model: &mut AppModel, host: &mut dyn DockHost, area: DockArea) {
    model.proximity.auto_revealed.remove(area);
    hide_area(model, host, area);
}

/// Area whose separator was clicked at `p`
///
/// Outside exactly one edge of the central widget picks that edge's area.
/// Outside two (a corner) asks the host which area currently owns the corner.
fn separator_target(host: &dyn DockHost, p: Point) -> Option<DockArea> {
    let outside: Vec<DockArea> = host.central_geometry().outside_edges(p).iter().collect();
    match outside.as_slice() {
        [area] => Some(*area),
        [a, b] => {
            let corner = Corner::between(*a, *b)?;
            let owner = host.corner_owner(corner);
            if corner.candidates().contains(&owner) {
                Some(owner)
            } else {
                trace!(?corner, %owner, "corner owner is not adjacent");
                None
            }
        }
        _ => {
            trace!(?p, "click not on a separator");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::host::MemoryHost;

    fn setup() -> (AppModel, MemoryHost) {
        let mut host = MemoryHost::new(Rect::new(200, 0, 600, 600));
        host.add_panel(DockArea::Left, Rect::new(0, 0, 200, 600));
        host.add_panel(DockArea::Bottom, Rect::new(0, 600, 800, 100));
        (AppModel::default(), host)
    }

    #[test]
    fn test_enter_hides_nearest_checked_area() {
        let (mut model, mut host) = setup();
        model.toolbar.set_checked(DockArea::Left, true);

        let cmd = update_proximity(
            &mut model,
            &mut host,
            ProximityMsg::PointerEntered(Point::new(205, 300)),
        );
        assert_eq!(cmd, None);
        assert!(model.is_collapsed(DockArea::Left));
    }

    #[test]
    fn test_enter_ignores_unchecked_area() {
        let (mut model, mut host) = setup();
        update_proximity(
            &mut model,
            &mut host,
            ProximityMsg::PointerEntered(Point::new(205, 300)),
        );
        assert!(!model.is_collapsed(DockArea::Left));
    }

    #[test]
    fn test_stale_generation_dropped() {
        let (mut model, mut host) = setup();
        model.toolbar.set_checked(DockArea::Left, true);
        model.options.set_auto_unhide(DockArea::Left, true);
        hide_area(&mut model, &mut host, DockArea::Left);

        let cmd = update_proximity(
            &mut model,
            &mut host,
            ProximityMsg::PointerLeft(Point::new(150, 300)),
        );
        let Some(Cmd::Defer { msg, .. }) = cmd else {
            panic!("expected a delayed unhide");
        };

        // Pointer came back before the delay ran out
        update_proximity(
            &mut model,
            &mut host,
            ProximityMsg::PointerEntered(Point::new(400, 300)),
        );
        let Msg::Proximity(delayed) = *msg else {
            panic!("unexpected message");
        };
        update_proximity(&mut model, &mut host, delayed);
        assert!(model.is_collapsed(DockArea::Left));
    }

    #[test]
    fn test_separator_corner_uses_host_owner() {
        let (mut model, mut host) = setup();
        let corner = Point::new(100, 650);
        host.add_separator_point(corner);
        host.set_corner_owner(Corner::BottomLeft, DockArea::Left);

        update_proximity(&mut model, &mut host, ProximityMsg::MousePressed(corner));
        update_proximity(&mut model, &mut host, ProximityMsg::MouseReleased(corner));

        assert!(model.toolbar.is_checked(DockArea::Left));
        assert!(!model.toolbar.is_checked(DockArea::Bottom));
        assert!(model.is_collapsed(DockArea::Left));
    }
}
