//! Border styles for framed dialogs

use serde::{Deserialize, Serialize};

use super::grid::{box_styles, BoxChars};

/// Frame style of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    Single,
    #[default]
    Double,
    Rounded,
    Heavy,
    Ascii,
}

impl BorderStyle {
    /// Get box characters for this style
    pub fn chars(&self) -> &'static BoxChars {
        match self {
            BorderStyle::Single => &box_styles::SINGLE,
            BorderStyle::Double => &box_styles::DOUBLE,
            BorderStyle::Rounded => &box_styles::ROUNDED,
            BorderStyle::Heavy => &box_styles::HEAVY,
            BorderStyle::Ascii => &box_styles::ASCII,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "single" => BorderStyle::Single,
            "rounded" => BorderStyle::Rounded,
            "heavy" => BorderStyle::Heavy,
            "ascii" => BorderStyle::Ascii,
            _ => BorderStyle::Double,
        }
    }
}
