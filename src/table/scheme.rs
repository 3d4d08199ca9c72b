//! Color schemes shared by rows and tables

use serde::{Deserialize, Serialize};

use crate::core::{default_colors, Color};

/// Colors of a row or a whole table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub foreground: Color,
    /// Background of "even" checkerboard cells
    pub background_even: Color,
    /// Background of "odd" checkerboard cells
    pub background_odd: Color,
    pub highlight_foreground: Color,
    pub highlight_background: Color,
}

impl ColorScheme {
    /// Stand-alone row colors: defaults with dark blue odd cells
    pub fn row() -> Self {
        let (fg, bg) = default_colors();
        Self {
            foreground: fg,
            background_even: bg,
            background_odd: Color::Blue,
            highlight_foreground: Color::Black,
            highlight_background: Color::White,
        }
    }

    /// Table colors: defaults with gray odd cells
    pub fn table() -> Self {
        Self {
            background_odd: Color::BrightBlack,
            ..Self::row()
        }
    }

    /// Background for a cell, given row and column parity
    pub fn background_for(&self, even_row: bool, column: usize) -> Color {
        let parity = column + usize::from(!even_row);
        if parity % 2 == 0 {
            self.background_even
        } else {
            self.background_odd
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::table()
    }
}
