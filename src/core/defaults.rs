//! Process-wide console color defaults
//!
//! New cells, rows and tables are seeded from [`default_colors`], and every
//! "reset colors" on a screen goes through it. When `force_console_color` is
//! on, resets land on the configured pair instead of the terminal defaults.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Console color defaults shared by the whole process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorDefaults {
    /// Redirect resets to `foreground`/`background`
    pub force_console_color: bool,
    /// Foreground used while forcing
    pub foreground: Color,
    /// Background used while forcing
    pub background: Color,
}

impl ColorDefaults {
    pub const TERMINAL: ColorDefaults = ColorDefaults {
        force_console_color: false,
        foreground: Color::Green,
        background: Color::Black,
    };

    /// The pair a reset should produce under these settings
    pub fn colors(&self) -> (Color, Color) {
        if self.force_console_color {
            (self.foreground, self.background)
        } else {
            (Color::Default, Color::Default)
        }
    }
}

impl Default for ColorDefaults {
    fn default() -> Self {
        Self::TERMINAL
    }
}

static DEFAULTS: RwLock<ColorDefaults> = RwLock::new(ColorDefaults::TERMINAL);

/// Current process-wide defaults
pub fn defaults() -> ColorDefaults {
    *DEFAULTS.read().unwrap_or_else(|e| e.into_inner())
}

/// Replace the process-wide defaults
pub fn set_defaults(defaults: ColorDefaults) {
    log::debug!("Console color defaults set to {:?}", defaults);
    *DEFAULTS.write().unwrap_or_else(|e| e.into_inner()) = defaults;
}

/// Toggle the force-console-color flag, keeping the configured pair
pub fn set_force_console_color(force: bool) {
    let mut guard = DEFAULTS.write().unwrap_or_else(|e| e.into_inner());
    guard.force_console_color = force;
}

/// Current default foreground and background
pub fn default_colors() -> (Color, Color) {
    defaults().colors()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_defaults_reset_to_terminal_colors() {
        assert_eq!(ColorDefaults::TERMINAL.colors(), (Color::Default, Color::Default));
    }

    #[test]
    fn test_forced_defaults_use_configured_pair() {
        let forced = ColorDefaults {
            force_console_color: true,
            foreground: Color::Yellow,
            background: Color::Blue,
        };
        assert_eq!(forced.colors(), (Color::Yellow, Color::Blue));
    }
}
