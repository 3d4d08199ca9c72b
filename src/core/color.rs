//! Cellgrid Color - the 16-color console palette
//!
//! Every segment, cell and dialog is painted with one of these colors.
//! `Default` stands for whatever the terminal itself uses when colors are
//! reset, so it maps to SGR 39/49 instead of a palette entry.

use serde::{Deserialize, Serialize};

/// Standard ANSI 16-color palette plus the terminal default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,   // Gray
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
    /// The terminal's own default color
    Default = 16,
}

impl Default for Color {
    fn default() -> Self {
        Color::Default
    }
}

impl From<u8> for Color {
    fn from(v: u8) -> Self {
        match v {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::White,
            8 => Color::BrightBlack,
            9 => Color::BrightRed,
            10 => Color::BrightGreen,
            11 => Color::BrightYellow,
            12 => Color::BrightBlue,
            13 => Color::BrightMagenta,
            14 => Color::BrightCyan,
            15 => Color::BrightWhite,
            _ => Color::Default,
        }
    }
}

impl Color {
    /// `fallback` in place of the terminal default
    pub fn or_concrete(self, fallback: Color) -> Color {
        if self == Color::Default {
            fallback
        } else {
            self
        }
    }

    /// Get ANSI SGR code for foreground
    pub fn fg_code(&self) -> u8 {
        match *self as u8 {
            16 => 39,
            v if v < 8 => 30 + v,
            v => 90 + (v - 8),
        }
    }

    /// Get ANSI SGR code for background
    pub fn bg_code(&self) -> u8 {
        match *self as u8 {
            16 => 49,
            v if v < 8 => 40 + v,
            v => 100 + (v - 8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Black.fg_code(), 30);
        assert_eq!(Color::White.fg_code(), 37);
        assert_eq!(Color::BrightRed.fg_code(), 91);
        assert_eq!(Color::Black.bg_code(), 40);
        assert_eq!(Color::BrightWhite.bg_code(), 107);
    }

    #[test]
    fn test_default_color_codes() {
        assert_eq!(Color::Default.fg_code(), 39);
        assert_eq!(Color::Default.bg_code(), 49);
        assert_eq!(Color::from(200), Color::Default);
        assert_eq!(Color::Default.or_concrete(Color::White), Color::White);
        assert_eq!(Color::Blue.or_concrete(Color::White), Color::Blue);
    }

    #[test]
    fn test_color_serde_names() {
        let json = serde_json::to_string(&Color::BrightBlue).unwrap();
        assert_eq!(json, "\"bright_blue\"");
        let back: Color = serde_json::from_str("\"dark\"").unwrap_or(Color::Red);
        assert_eq!(back, Color::Red);
    }
}
