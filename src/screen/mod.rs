//! Cellgrid Screen Module
//!
//! The screen is the one shared, cursor-addressable drawing surface. Every
//! draw call is an immediate write; nothing is buffered or diffed here.
//!
//! - `AnsiScreen`: escape sequences to any writer, keys from any reader
//! - `MemoryScreen`: glyph grid with a scripted key queue

pub mod ansi;
pub mod memory;

pub use ansi::AnsiScreen;
pub use memory::MemoryScreen;

use crate::core::{default_colors, Color};
use crate::error::Result;
use crate::input::Key;

/// A cursor-addressable terminal surface
pub trait Screen {
    /// Viewport size as (columns, rows)
    fn size(&self) -> (u16, u16);

    /// Cursor position as (column, row)
    fn cursor(&self) -> (u16, u16);

    /// Move the cursor to an absolute position
    fn move_to(&mut self, col: u16, row: u16) -> Result<()>;

    /// Current foreground color
    fn foreground(&self) -> Color;

    /// Current background color
    fn background(&self) -> Color;

    /// Set both colors for following writes
    fn set_colors(&mut self, fg: Color, bg: Color) -> Result<()>;

    /// Write text at the cursor, advancing it
    fn write_str(&mut self, text: &str) -> Result<()>;

    /// Block until one key is available
    fn read_key(&mut self) -> Result<Key>;

    /// Push buffered output to the terminal
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_foreground(&mut self, fg: Color) -> Result<()> {
        let bg = self.background();
        self.set_colors(fg, bg)
    }

    fn set_background(&mut self, bg: Color) -> Result<()> {
        let fg = self.foreground();
        self.set_colors(fg, bg)
    }

    /// Swap foreground and background. Terminal defaults are taken as
    /// white on black first, so the result always differs from the input.
    fn swap_colors(&mut self) -> Result<()> {
        let fg = self.foreground().or_concrete(Color::White);
        let bg = self.background().or_concrete(Color::Black);
        self.set_colors(bg, fg)
    }

    /// Reset to the process-wide defaults (see `core::defaults`)
    fn reset_colors(&mut self) -> Result<()> {
        let (fg, bg) = default_colors();
        self.set_colors(fg, bg)
    }

    /// Move, then write
    fn write_at(&mut self, col: u16, row: u16, text: &str) -> Result<()> {
        self.move_to(col, row)?;
        self.write_str(text)
    }

    /// Write `ch` `count` times at the cursor
    fn fill(&mut self, ch: char, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let run: String = std::iter::repeat(ch).take(count).collect();
        self.write_str(&run)
    }
}
