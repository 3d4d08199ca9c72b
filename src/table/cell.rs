//! Cellgrid Cell - a fixed rectangle of colored text
//!
//! A cell owns one `ColoredText` and paints it across `height` screen rows,
//! `width` characters per row, padding every row to the full width.
//!
//! Typed getters parse the plain text back. That is exact for values the
//! typed setters wrote, but approximate for free-form text: a string cell
//! holding `"42"` also reads back as the integer 42.

use std::borrow::Cow;
use std::time::Duration;

use chrono::NaiveDateTime;

use crate::core::{default_colors, Color, ColoredText};
use crate::entry::{format_date_time, format_duration, parse_date_time, parse_duration, Entry};
use crate::error::Result;
use crate::screen::Screen;
use crate::widget::Widget;

#[derive(Debug, Clone)]
pub struct Cell {
    content: ColoredText,
    left: u16,
    top: u16,
    width: u16,
    height: u16,
    fg: Color,
    bg: Color,
    highlight_fg: Color,
    highlight_bg: Color,
    highlighted: bool,
    auto_draw: bool,
}

impl Default for Cell {
    fn default() -> Self {
        let (fg, bg) = default_colors();
        Self {
            content: ColoredText::new(),
            left: 0,
            top: 0,
            width: 0,
            height: 1,
            fg,
            bg,
            highlight_fg: Color::Black,
            highlight_bg: Color::White,
            highlighted: false,
            auto_draw: false,
        }
    }
}

impl Cell {
    /// Empty cell at a position, one row high
    pub fn new(left: u16, top: u16, width: u16) -> Self {
        Self {
            left,
            top,
            width,
            ..Self::default()
        }
    }

    pub fn content(&self) -> &ColoredText {
        &self.content
    }

    /// Replace the content with arbitrary colored text
    pub fn set_content(&mut self, content: ColoredText) {
        self.content = content;
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn left(&self) -> u16 {
        self.left
    }

    pub fn top(&self) -> u16 {
        self.top
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_position(&mut self, left: u16, top: u16) {
        self.left = left;
        self.top = top;
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// Height is at least one row
    pub fn set_height(&mut self, height: u16) {
        self.height = height.max(1);
    }

    pub fn colors(&self) -> (Color, Color) {
        (self.fg, self.bg)
    }

    /// Change the base colors; segments painted in the old colors follow
    pub fn set_colors(&mut self, fg: Color, bg: Color) {
        let old = (self.fg, self.bg);
        for seg in self.content.segments_mut() {
            if (seg.fg, seg.bg) == old {
                seg.fg = fg;
                seg.bg = bg;
            }
        }
        self.fg = fg;
        self.bg = bg;
    }

    pub fn highlight_colors(&self) -> (Color, Color) {
        (self.highlight_fg, self.highlight_bg)
    }

    pub fn set_highlight_colors(&mut self, fg: Color, bg: Color) {
        self.highlight_fg = fg;
        self.highlight_bg = bg;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn set_auto_draw(&mut self, auto_draw: bool) {
        self.auto_draw = auto_draw;
    }

    /// Colors the content is painted with right now
    pub fn effective_colors(&self) -> (Color, Color) {
        if self.highlighted {
            (self.highlight_fg, self.highlight_bg)
        } else {
            (self.fg, self.bg)
        }
    }

    fn set_single(&mut self, text: String) {
        self.content.clear();
        self.content.push(text, self.fg, self.bg);
    }

    // -- typed content --

    pub fn string(&self) -> String {
        self.content.to_string()
    }

    pub fn set_string(&mut self, value: impl Into<String>) {
        self.set_single(value.into());
    }

    pub fn int(&self) -> Option<i64> {
        self.string().trim().parse().ok()
    }

    pub fn set_int(&mut self, value: i64) {
        self.set_single(value.to_string());
    }

    pub fn uint(&self) -> Option<u64> {
        self.string().trim().parse().ok()
    }

    pub fn set_uint(&mut self, value: u64) {
        self.set_single(value.to_string());
    }

    pub fn double(&self) -> Option<f64> {
        self.string().trim().parse().ok()
    }

    pub fn set_double(&mut self, value: f64) {
        self.set_single(value.to_string());
    }

    pub fn date_time(&self) -> Option<NaiveDateTime> {
        parse_date_time(&self.string())
    }

    pub fn set_date_time(&mut self, value: NaiveDateTime) {
        self.set_single(format_date_time(&value));
    }

    pub fn duration(&self) -> Option<Duration> {
        parse_duration(&self.string())
    }

    pub fn set_duration(&mut self, value: Duration) {
        self.set_single(format_duration(value));
    }

    /// Fill from a typed entry; absent values show as `NULL`
    pub fn set_entry(&mut self, entry: &Entry) {
        match entry {
            Entry::Text(v) => self.set_string(v.as_str()),
            Entry::Int(v) => self.set_int(*v),
            Entry::UInt(v) => self.set_uint(*v),
            Entry::Float(v) => self.set_double(*v),
            Entry::DateTime(v) => self.set_date_time(*v),
            Entry::Duration(v) => self.set_duration(*v),
            Entry::Absent => self.set_string(entry.to_string()),
        }
    }

    /// Paint the cell.
    ///
    /// Row `i` shows characters `[i * width, (i + 1) * width)` and is padded
    /// with spaces in the first segment's colors. An empty cell paints
    /// nothing at all, so whatever was on screen there stays; use `erase`
    /// to blank the rectangle.
    pub fn paint(&self, screen: &mut dyn Screen) -> Result<()> {
        if self.content.is_empty() {
            return Ok(());
        }

        let text: Cow<'_, ColoredText> = if self.highlighted {
            let mut recolored = self.content.clone();
            for seg in recolored.segments_mut() {
                seg.fg = self.highlight_fg;
                seg.bg = self.highlight_bg;
            }
            Cow::Owned(recolored)
        } else {
            Cow::Borrowed(&self.content)
        };

        let (pad_fg, pad_bg) = text.first_colors().unwrap_or(self.effective_colors());
        let width = self.width as usize;

        for i in 0..self.height {
            screen.move_to(self.left, self.top.saturating_add(i))?;
            let written = text.render(screen, i as usize * width, Some(width))?;
            if written < width {
                pad(screen, pad_fg, pad_bg, width - written)?;
            }
        }
        Ok(())
    }

    /// Blank the whole rectangle in the current background
    pub fn erase(&self, screen: &mut dyn Screen) -> Result<()> {
        let (fg, bg) = self.effective_colors();
        for i in 0..self.height {
            screen.move_to(self.left, self.top.saturating_add(i))?;
            pad(screen, fg, bg, self.width as usize)?;
        }
        Ok(())
    }
}

/// Write `count` spaces in the given colors, restoring the screen colors
fn pad(screen: &mut dyn Screen, fg: Color, bg: Color, count: usize) -> Result<()> {
    let saved = (screen.foreground(), screen.background());
    screen.set_colors(fg, bg)?;
    screen.fill(' ', count)?;
    screen.set_colors(saved.0, saved.1)
}

impl Widget for Cell {
    fn draw(&mut self, screen: &mut dyn Screen) -> Result<()> {
        self.paint(screen)
    }

    fn auto_draw(&self) -> bool {
        self.auto_draw
    }
}
