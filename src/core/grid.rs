//! Cellgrid Glyph Grid - an in-memory character buffer
//!
//! A 2D array of glyphs standing in for a terminal screen. `MemoryScreen`
//! writes into it, and tests read back what was painted.

use super::color::Color;

/// Box drawing character sets
pub struct BoxChars {
    pub tl: char,  // Top-left corner
    pub tr: char,  // Top-right corner
    pub bl: char,  // Bottom-left corner
    pub br: char,  // Bottom-right corner
    pub h: char,   // Horizontal line
    pub v: char,   // Vertical line
    pub lt: char,  // Left tee
    pub rt: char,  // Right tee
}

/// Predefined box styles
pub mod box_styles {
    use super::BoxChars;

    pub const SINGLE: BoxChars = BoxChars {
        tl: '┌', tr: '┐', bl: '└', br: '┘',
        h: '─', v: '│',
        lt: '├', rt: '┤',
    };

    pub const DOUBLE: BoxChars = BoxChars {
        tl: '╔', tr: '╗', bl: '╚', br: '╝',
        h: '═', v: '║',
        lt: '╠', rt: '╣',
    };

    pub const ROUNDED: BoxChars = BoxChars {
        tl: '╭', tr: '╮', bl: '╰', br: '╯',
        h: '─', v: '│',
        lt: '├', rt: '┤',
    };

    pub const HEAVY: BoxChars = BoxChars {
        tl: '┏', tr: '┓', bl: '┗', br: '┛',
        h: '━', v: '┃',
        lt: '┣', rt: '┫',
    };

    pub const ASCII: BoxChars = BoxChars {
        tl: '+', tr: '+', bl: '+', br: '+',
        h: '-', v: '|',
        lt: '+', rt: '+',
    };
}

/// One character position with its colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Default,
            bg: Color::Default,
        }
    }
}

/// The glyph buffer
pub struct Grid {
    /// Grid width in columns
    pub cols: usize,
    /// Grid height in rows
    pub rows: usize,
    /// The glyph buffer (row-major order)
    glyphs: Vec<Glyph>,
}

impl Grid {
    /// Create a new grid with given dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        let glyphs = vec![Glyph::default(); cols * rows];
        Self { cols, rows, glyphs }
    }

    /// Get the index for a position
    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.cols && y < self.rows {
            Some(y * self.cols + x)
        } else {
            None
        }
    }

    /// Get a reference to a glyph
    pub fn get(&self, x: usize, y: usize) -> Option<&Glyph> {
        self.index(x, y).map(|i| &self.glyphs[i])
    }

    /// Set a glyph at position; out-of-bounds writes are dropped
    pub fn set(&mut self, x: usize, y: usize, ch: char, fg: Color, bg: Color) {
        if let Some(i) = self.index(x, y) {
            self.glyphs[i] = Glyph { ch, fg, bg };
        }
    }

    /// Write a string at position, clipped at the right edge.
    /// Returns how many characters were consumed (including clipped ones).
    pub fn write_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) -> usize {
        let mut count = 0;
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i, y, ch, fg, bg);
            count += 1;
        }
        count
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::default());
    }

    /// The characters of one row
    pub fn row_text(&self, y: usize) -> String {
        (0..self.cols)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }

    /// Every row as text, top to bottom
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows).map(|y| self.row_text(y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(80, 24);
        assert_eq!(grid.cols, 80);
        assert_eq!(grid.rows, 24);
        assert_eq!(grid.row_text(0).len(), 80);
    }

    #[test]
    fn test_grid_set_get() {
        let mut grid = Grid::new(80, 24);
        grid.set(10, 5, 'X', Color::Red, Color::Black);

        let glyph = grid.get(10, 5).unwrap();
        assert_eq!(glyph.ch, 'X');
        assert_eq!(glyph.fg, Color::Red);
        assert!(grid.get(80, 5).is_none());
    }

    #[test]
    fn test_grid_write_str_clips() {
        let mut grid = Grid::new(8, 2);
        let consumed = grid.write_str(5, 1, "Hello", Color::Green, Color::Black);

        assert_eq!(consumed, 5);
        assert_eq!(grid.row_text(1), "     Hel");
        assert_eq!(grid.row_text(0), "        ");
    }
}
