//! Toolbar icons
//!
//! One icon per dock area, embedded in the binary and decoded on first use.

use std::sync::OnceLock;

use anyhow::Context;
use image::RgbaImage;

use crate::area::DockArea;

const ICON_LEFT: &[u8] = include_bytes!("../assets/icons/icon_left.png");
const ICON_RIGHT: &[u8] = include_bytes!("../assets/icons/icon_right.png");
const ICON_TOP: &[u8] = include_bytes!("../assets/icons/icon_top.png");
const ICON_BOTTOM: &[u8] = include_bytes!("../assets/icons/icon_bottom.png");

static ICONS: OnceLock<IconSet> = OnceLock::new();

/// Decoded RGBA icons, one per area
#[derive(Debug, Clone)]
pub struct IconSet {
    left: RgbaImage,
    right: RgbaImage,
    top: RgbaImage,
    bottom: RgbaImage,
}

impl IconSet {
    /// The shared icon set, decoding it on first call
    pub fn shared() -> anyhow::Result<&'static IconSet> {
        if let Some(icons) = ICONS.get() {
            return Ok(icons);
        }
        let icons = Self::decode()?;
        Ok(ICONS.get_or_init(|| icons))
    }

    fn decode() -> anyhow::Result<Self> {
        Ok(Self {
            left: decode_icon(ICON_LEFT, DockArea::Left)?,
            right: decode_icon(ICON_RIGHT, DockArea::Right)?,
            top: decode_icon(ICON_TOP, DockArea::Top)?,
            bottom: decode_icon(ICON_BOTTOM, DockArea::Bottom)?,
        })
    }

    pub fn get(&self, area: DockArea) -> &RgbaImage {
        match area {
            DockArea::Left => &self.left,
            DockArea::Right => &self.right,
            DockArea::Top => &self.top,
            DockArea::Bottom => &self.bottom,
        }
    }
}

fn decode_icon(bytes: &[u8], area: DockArea) -> anyhow::Result<RgbaImage> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .with_context(|| format!("Failed to decode {} icon", area))?;
    Ok(img.to_rgba8())
}
