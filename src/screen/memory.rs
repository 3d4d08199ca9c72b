//! In-memory screen
//!
//! A glyph grid plus a queue of scripted keys. Everything a widget paints
//! can be read back glyph by glyph. When the key script runs out,
//! `read_key` fails with `Error::InputClosed` instead of blocking.

use std::collections::VecDeque;

use super::Screen;
use crate::core::{Color, Glyph, Grid};
use crate::error::{Error, Result};
use crate::input::Key;

pub struct MemoryScreen {
    grid: Grid,
    cursor_x: u16,
    cursor_y: u16,
    fg: Color,
    bg: Color,
    keys: VecDeque<Key>,
    /// Number of `write_str` calls, for counting redraw work
    writes: usize,
}

impl MemoryScreen {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            grid: Grid::new(cols as usize, rows as usize),
            cursor_x: 0,
            cursor_y: 0,
            fg: Color::Default,
            bg: Color::Default,
            keys: VecDeque::new(),
            writes: 0,
        }
    }

    /// Screen that will answer `read_key` with `keys`, in order
    pub fn with_keys(cols: u16, rows: u16, keys: impl IntoIterator<Item = Key>) -> Self {
        let mut screen = Self::new(cols, rows);
        screen.keys.extend(keys);
        screen
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    /// Keys not consumed yet
    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn glyph(&self, col: u16, row: u16) -> Option<&Glyph> {
        self.grid.get(col as usize, row as usize)
    }

    /// Characters of one screen row, full width
    pub fn row_text(&self, row: u16) -> String {
        self.grid.row_text(row as usize)
    }

    /// All rows, top to bottom
    pub fn lines(&self) -> Vec<String> {
        self.grid.lines()
    }

    /// Characters in `[col, col + len)` of a row
    pub fn text_at(&self, col: u16, row: u16, len: usize) -> String {
        self.row_text(row).chars().skip(col as usize).take(len).collect()
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Blank the grid, keeping cursor, colors and keys
    pub fn clear(&mut self) {
        self.grid.clear();
    }
}

impl Screen for MemoryScreen {
    fn size(&self) -> (u16, u16) {
        (self.grid.cols as u16, self.grid.rows as u16)
    }

    fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    fn move_to(&mut self, col: u16, row: u16) -> Result<()> {
        self.cursor_x = col;
        self.cursor_y = row;
        Ok(())
    }

    fn foreground(&self) -> Color {
        self.fg
    }

    fn background(&self) -> Color {
        self.bg
    }

    fn set_colors(&mut self, fg: Color, bg: Color) -> Result<()> {
        self.fg = fg;
        self.bg = bg;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.writes += 1;
        let consumed = self.grid.write_str(
            self.cursor_x as usize,
            self.cursor_y as usize,
            text,
            self.fg,
            self.bg,
        );
        let advanced = consumed.min(u16::MAX as usize) as u16;
        self.cursor_x = self.cursor_x.saturating_add(advanced).min(self.grid.cols as u16);
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or(Error::InputClosed)
    }
}
