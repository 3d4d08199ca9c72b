//! Theme configuration
//!
//! A theme is a JSON document. Every field is optional and falls back to
//! the built-in look:
//!
//! ```json
//! {
//!   "defaults": { "force_console_color": true, "foreground": "green", "background": "black" },
//!   "table": { "background_odd": "bright_black" },
//!   "message_box": { "edge_distance": 2, "border": "single" }
//! }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{set_defaults, BorderStyle, Color, ColorDefaults};
use crate::error::Result;
use crate::table::ColorScheme;
use crate::widgets::{MessageBox, ResponseSet};

/// Environment variable naming a theme file
pub const THEME_ENV: &str = "CELLGRID_THEME";

/// Message box look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageBoxTheme {
    pub edge_distance: u16,
    pub border: BorderStyle,
}

impl Default for MessageBoxTheme {
    fn default() -> Self {
        Self {
            edge_distance: 4,
            border: BorderStyle::Double,
        }
    }
}

/// Partial color scheme; missing colors come from the base scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_even: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_odd: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_background: Option<Color>,
}

impl SchemeOverride {
    pub fn over(&self, base: ColorScheme) -> ColorScheme {
        ColorScheme {
            foreground: self.foreground.unwrap_or(base.foreground),
            background_even: self.background_even.unwrap_or(base.background_even),
            background_odd: self.background_odd.unwrap_or(base.background_odd),
            highlight_foreground: self.highlight_foreground.unwrap_or(base.highlight_foreground),
            highlight_background: self.highlight_background.unwrap_or(base.highlight_background),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Console color defaults, installed by `apply`
    pub defaults: ColorDefaults,
    pub table: SchemeOverride,
    pub row: SchemeOverride,
    pub message_box: MessageBoxTheme,
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let theme = Self::from_json(&fs::read_to_string(path)?)?;
        info!("Loaded theme from {}", path.display());
        Ok(theme)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Install the console color defaults process-wide
    pub fn apply(&self) {
        set_defaults(self.defaults);
    }

    /// Table colors, resolved against the current console defaults
    pub fn table_scheme(&self) -> ColorScheme {
        self.table.over(ColorScheme::table())
    }

    /// Stand-alone row colors, resolved against the current console defaults
    pub fn row_scheme(&self) -> ColorScheme {
        self.row.over(ColorScheme::row())
    }

    /// A message box with this theme's edge distance and border
    pub fn message_box(&self, responses: ResponseSet) -> MessageBox {
        MessageBox::new(responses)
            .with_edge_distance(self.message_box.edge_distance)
            .with_border(self.message_box.border)
    }
}
