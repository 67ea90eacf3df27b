//! Widgets the plugin contributes to the host window
//!
//! ## Available Panels
//!
//! - **CollapsedAreaPlaceholder**: thin strip standing in for a hidden area
//! - **AreaToggleControl**: toolbar with one hide toggle per area
//! - **OptionsPanel**: auto-unhide flags and proximity delays

mod options;
mod placeholder;
mod toolbar;

pub use options::{
    OptionsPanel, AUTO_UNHIDE_LABEL, DEFAULT_DELAY_MS, DELAY_STEP_MS, DIALOG_TITLE, MAX_DELAY_MS,
};
pub use placeholder::{Arrow, CollapsedAreaPlaceholder, Placeholders, DEFAULT_EXTENT};
pub use toolbar::{AreaToggleControl, ToggleButton, DISPLAY_ORDER, TOOLBAR_TITLE};

/// Title of the plugin menu and its single entry
pub const MENU_TITLE: &str = "Hide Docks";
pub const MENU_ENTRY: &str = "Options…";
