//! Dock areas and area masks
//!
//! A main window has four dock areas around its central content. Each area is
//! a single bit so that combinations fit in a 4-bit mask, which is what gets
//! persisted and what the toolbar reflects.

use serde::{Deserialize, Serialize};

/// One of the four docking zones around the central widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DockArea {
    Left,
    Right,
    Top,
    Bottom,
}

impl DockArea {
    /// All areas in bit order (left, right, top, bottom)
    pub const ALL: [DockArea; 4] = [
        DockArea::Left,
        DockArea::Right,
        DockArea::Top,
        DockArea::Bottom,
    ];

    /// Bit value of this area (1, 2, 4, 8)
    pub const fn bit(self) -> u8 {
        match self {
            DockArea::Left => 1,
            DockArea::Right => 2,
            DockArea::Top => 4,
            DockArea::Bottom => 8,
        }
    }

    /// Position of this area in `ALL`
    pub const fn index(self) -> usize {
        match self {
            DockArea::Left => 0,
            DockArea::Right => 1,
            DockArea::Top => 2,
            DockArea::Bottom => 3,
        }
    }

    /// Area for a single-bit value. Anything else (including 0, "no area") is `None`.
    pub fn from_bit(bit: u8) -> Option<DockArea> {
        match bit {
            1 => Some(DockArea::Left),
            2 => Some(DockArea::Right),
            4 => Some(DockArea::Top),
            8 => Some(DockArea::Bottom),
            _ => None,
        }
    }

    /// Axis along which the area's panels are sized
    ///
    /// Left/right docks are sized by width (horizontal), top/bottom by height.
    pub fn axis(self) -> Axis {
        match self {
            DockArea::Left | DockArea::Right => Axis::Horizontal,
            DockArea::Top | DockArea::Bottom => Axis::Vertical,
        }
    }

    /// Lowercase name used for icons, logs and settings
    pub fn name(self) -> &'static str {
        match self {
            DockArea::Left => "left",
            DockArea::Right => "right",
            DockArea::Top => "top",
            DockArea::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for DockArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resize axis for batched dock resizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The four corners of the main window
///
/// Each corner is owned by one of its two adjacent dock areas, as configured
/// in the host (and changeable by the user at any time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Corner shared by two areas, if they are adjacent
    pub fn between(a: DockArea, b: DockArea) -> Option<Corner> {
        use DockArea::*;
        match (a, b) {
            (Left, Top) | (Top, Left) => Some(Corner::TopLeft),
            (Right, Top) | (Top, Right) => Some(Corner::TopRight),
            (Left, Bottom) | (Bottom, Left) => Some(Corner::BottomLeft),
            (Right, Bottom) | (Bottom, Right) => Some(Corner::BottomRight),
            _ => None,
        }
    }

    /// The two areas that may own this corner
    pub fn candidates(self) -> [DockArea; 2] {
        match self {
            Corner::TopLeft => [DockArea::Left, DockArea::Top],
            Corner::TopRight => [DockArea::Right, DockArea::Top],
            Corner::BottomLeft => [DockArea::Left, DockArea::Bottom],
            Corner::BottomRight => [DockArea::Right, DockArea::Bottom],
        }
    }
}

/// Set of dock areas packed into the low four bits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaMask(u8);

impl AreaMask {
    pub const EMPTY: AreaMask = AreaMask(0);
    pub const FULL: AreaMask = AreaMask(0b1111);

    /// Build a mask from raw bits, dropping anything above bit 3
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Build a mask from a persisted integer; out-of-range values keep only the low bits
    pub fn from_setting(value: i64) -> Self {
        Self::from_bits((value & 0b1111) as u8)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, area: DockArea) -> bool {
        self.0 & area.bit() != 0
    }

    pub fn insert(&mut self, area: DockArea) {
        self.0 |= area.bit();
    }

    pub fn remove(&mut self, area: DockArea) {
        self.0 &= !area.bit();
    }

    /// Set or clear the bit for `area`
    pub fn set(&mut self, area: DockArea, on: bool) {
        if on {
            self.insert(area);
        } else {
            self.remove(area);
        }
    }

    /// Areas in the mask, in bit order
    pub fn iter(self) -> impl Iterator<Item = DockArea> {
        DockArea::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl From<DockArea> for AreaMask {
    fn from(area: DockArea) -> Self {
        AreaMask(area.bit())
    }
}

impl FromIterator<DockArea> for AreaMask {
    fn from_iter<I: IntoIterator<Item = DockArea>>(iter: I) -> Self {
        let mut mask = AreaMask::EMPTY;
        for area in iter {
            mask.insert(area);
        }
        mask
    }
}
