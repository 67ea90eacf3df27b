//! Geometry primitives and edge tests against the central widget
//!
//! All coordinates are integer logical pixels in one shared space (the host
//! adapter converts pointer and widget positions to global coordinates
//! before they reach the core).

use serde::{Deserialize, Serialize};

use crate::area::{AreaMask, DockArea};

/// A point in global logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle (position + size) for panel geometry and the central widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Size along the given area's sizing axis (width for left/right, height for top/bottom)
    pub fn extent_for(&self, area: DockArea) -> i32 {
        match area {
            DockArea::Left | DockArea::Right => self.width,
            DockArea::Top | DockArea::Bottom => self.height,
        }
    }

    /// Signed distance from `p` to each edge, in `DockArea::ALL` order
    ///
    /// Each value is how far the pointer can travel toward that edge before
    /// crossing it; negative means it is already past the edge.
    pub fn edge_distances(&self, p: Point) -> [i32; 4] {
        [
            p.x - self.x,
            self.right() - p.x,
            p.y - self.y,
            self.bottom() - p.y,
        ]
    }

    /// Edge closest to `p`, ties going to the first of left, right, top, bottom
    pub fn nearest_edge(&self, p: Point) -> DockArea {
        let distances = self.edge_distances(p);
        let mut best = 0;
        for (i, d) in distances.iter().enumerate().skip(1) {
            if *d < distances[best] {
                best = i;
            }
        }
        DockArea::ALL[best]
    }

    /// Edge the pointer crossed when it left the rectangle
    ///
    /// Checks are ordered: left bound, right bound, top bound, bottom bound.
    /// A point still inside yields `None`.
    pub fn crossed_edge(&self, p: Point) -> Option<DockArea> {
        if p.x < self.x {
            Some(DockArea::Left)
        } else if p.x >= self.right() {
            Some(DockArea::Right)
        } else if p.y < self.y {
            Some(DockArea::Top)
        } else if p.y >= self.bottom() {
            Some(DockArea::Bottom)
        } else {
            None
        }
    }

    /// Areas whose edge the point lies beyond
    ///
    /// Uses the same half-open bounds as `crossed_edge`: `right()` and
    /// `bottom()` are already outside.
    pub fn outside_edges(&self, p: Point) -> AreaMask {
        let mut mask = AreaMask::default();
        mask.set(DockArea::Left, p.x < self.x);
        mask.set(DockArea::Right, p.x >= self.right());
        mask.set(DockArea::Top, p.y < self.y);
        mask.set(DockArea::Bottom, p.y >= self.bottom());
        mask
    }
}

/// Scale a logical size at 96 DPI to the screen's logical DPI
pub fn rescale(size: u32, logical_dpi: f64) -> u32 {
    (size as f64 * logical_dpi / 96.0).round().max(0.0) as u32
}
