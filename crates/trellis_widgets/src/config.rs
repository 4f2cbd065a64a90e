//! Widget defaults
//!
//! Values new widgets start from. Deserialised from the `[widgets]` section
//! of the application config; every field has a default.

use serde::{Deserialize, Serialize};

use crate::tab_panel::TabBarPlacement;

/// Defaults applied when widgets are created
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WidgetDefaults {
    /// Text of a switch button's ON side
    pub switch_on_text: String,
    /// Text of a switch button's OFF side
    pub switch_off_text: String,
    /// Displayed columns of a new text box
    pub text_box_cols: u32,
    /// Displayed rows of a new text box (more than 1 renders a text area)
    pub text_box_rows: u32,
    /// Tab bar placement of a new tab panel
    pub tab_bar_placement: TabBarPlacement,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            switch_on_text: "ON".to_string(),
            switch_off_text: "OFF".to_string(),
            text_box_cols: 20,
            text_box_rows: 1,
            tab_bar_placement: TabBarPlacement::Top,
        }
    }
}
