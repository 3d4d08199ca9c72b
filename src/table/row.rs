//! Cellgrid Row - a strip of cells on one screen line
//!
//! The row stores `(Entry, width)` pairs. Cells are derived from them by
//! `relayout`, laid out left to right from `left`, and colored as a
//! checkerboard: the background flips with the column and again with the
//! row parity.

use log::{trace, warn};

use super::cell::Cell;
use super::scheme::ColorScheme;
use crate::core::Color;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::screen::Screen;
use crate::widget::Widget;

#[derive(Debug, Clone)]
pub struct Row {
    values: Vec<(Entry, u16)>,
    left: u16,
    top: u16,
    height: u16,
    even: bool,
    colored: bool,
    scheme: ColorScheme,
    highlighted: Option<usize>,
    auto_draw: bool,
    cells: Vec<Cell>,
    stale: bool,
}

impl Row {
    pub fn new(left: u16, top: u16) -> Self {
        Self {
            values: Vec::new(),
            left,
            top,
            height: 1,
            even: true,
            colored: true,
            scheme: ColorScheme::row(),
            highlighted: None,
            auto_draw: false,
            cells: Vec::new(),
            stale: false,
        }
    }

    /// Row holding `values`, laid out immediately
    pub fn with_values(left: u16, top: u16, values: Vec<(Entry, u16)>) -> Self {
        let mut row = Self::new(left, top);
        row.values = values;
        row.relayout();
        row
    }

    pub fn values(&self) -> &[(Entry, u16)] {
        &self.values
    }

    /// Replace all values. A highlight that no longer fits is dropped.
    pub fn set_values(&mut self, values: Vec<(Entry, u16)>) {
        if let Some(index) = self.highlighted {
            if index >= values.len() {
                warn!(
                    "Dropping highlighted cell {} for a row of {} values",
                    index,
                    values.len()
                );
                self.highlighted = None;
            }
        }
        self.values = values;
        self.stale = true;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn left(&self) -> u16 {
        self.left
    }

    pub fn top(&self) -> u16 {
        self.top
    }

    pub fn set_position(&mut self, left: u16, top: u16) {
        self.left = left;
        self.top = top;
        self.stale = true;
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height.max(1);
        self.stale = true;
    }

    /// Sum of the value widths
    pub fn width(&self) -> u16 {
        self.values.iter().fold(0u16, |acc, (_, w)| acc.saturating_add(*w))
    }

    pub fn is_even(&self) -> bool {
        self.even
    }

    pub fn set_even(&mut self, even: bool) {
        self.even = even;
        self.stale = true;
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// With coloring off every cell gets the even background
    pub fn set_colored(&mut self, colored: bool) {
        self.colored = colored;
        self.stale = true;
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
        self.stale = true;
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Highlight one cell, or none. Rejects an index past the last value.
    pub fn set_highlighted(&mut self, index: Option<usize>) -> Result<()> {
        if let Some(index) = index {
            if index >= self.values.len() {
                return Err(Error::CellOutOfRange {
                    index,
                    len: self.values.len(),
                });
            }
        }
        self.highlighted = index;
        self.stale = true;
        Ok(())
    }

    pub fn set_auto_draw(&mut self, auto_draw: bool) {
        self.auto_draw = auto_draw;
    }

    /// Derived cells, current as of the last relayout
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    fn background_for(&self, column: usize) -> Color {
        if self.colored {
            self.scheme.background_for(self.even, column)
        } else {
            self.scheme.background_even
        }
    }
}

impl Widget for Row {
    fn relayout(&mut self) {
        let mut cells = Vec::with_capacity(self.values.len());
        let mut x = self.left;

        for (column, (entry, width)) in self.values.iter().enumerate() {
            let mut cell = Cell::new(x, self.top, *width);
            cell.set_height(self.height);
            cell.set_colors(self.scheme.foreground, self.background_for(column));
            cell.set_highlight_colors(
                self.scheme.highlight_foreground,
                self.scheme.highlight_background,
            );
            cell.set_highlighted(self.highlighted == Some(column));
            cell.set_entry(entry);
            cells.push(cell);
            x = x.saturating_add(*width);
        }

        trace!("Row at ({}, {}) laid out {} cells", self.left, self.top, cells.len());
        self.cells = cells;
        self.stale = false;
    }

    fn draw(&mut self, screen: &mut dyn Screen) -> Result<()> {
        if self.stale {
            self.relayout();
        }
        for cell in &self.cells {
            cell.paint(screen)?;
        }
        Ok(())
    }

    fn auto_draw(&self) -> bool {
        self.auto_draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::MemoryScreen;

    fn sample() -> Row {
        Row::with_values(
            1,
            2,
            vec![("id".into(), 4), (42i64.into(), 6), (Entry::Absent, 5)],
        )
    }

    #[test]
    fn test_cells_laid_out_left_to_right() {
        let row = sample();
        let lefts: Vec<u16> = row.cells().iter().map(Cell::left).collect();
        assert_eq!(lefts, vec![1, 5, 11]);
        assert_eq!(row.width(), 15);
        assert_eq!(row.cells()[2].string(), "NULL");
    }

    #[test]
    fn test_checkerboard_flips_with_row_parity() {
        let mut row = sample();
        let even: Vec<Color> = row.cells().iter().map(|c| c.colors().1).collect();
        assert_eq!(even[1], Color::Blue);
        assert_eq!(even[0], even[2]);

        row.set_even(false);
        row.relayout();
        let odd: Vec<Color> = row.cells().iter().map(|c| c.colors().1).collect();
        assert_eq!(odd[0], Color::Blue);
        assert_eq!(odd[2], Color::Blue);
        assert_eq!(odd[1], even[0]);
    }

    #[test]
    fn test_uncolored_row_uses_even_background() {
        let mut row = sample();
        row.set_colored(false);
        row.relayout();
        assert!(row
            .cells()
            .iter()
            .all(|c| c.colors().1 == row.scheme().background_even));
    }

    #[test]
    fn test_highlight_out_of_range_rejected() {
        let mut row = sample();
        assert!(matches!(
            row.set_highlighted(Some(3)),
            Err(Error::CellOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(row.highlighted(), None);
    }

    #[test]
    fn test_exactly_one_cell_highlighted() {
        let mut row = sample();
        row.set_highlighted(Some(1)).unwrap();
        row.relayout();
        let flags: Vec<bool> = row.cells().iter().map(Cell::is_highlighted).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_shrinking_values_drops_highlight() {
        let mut row = sample();
        row.set_highlighted(Some(2)).unwrap();
        row.set_values(vec![("a".into(), 3)]);
        assert_eq!(row.highlighted(), None);
    }

    #[test]
    fn test_setters_wait_for_relayout() {
        let mut row = sample();
        row.set_values(vec![("x".into(), 2)]);
        assert!(row.is_stale());
        assert_eq!(row.cells().len(), 3);
        row.relayout();
        assert_eq!(row.cells().len(), 1);
    }

    #[test]
    fn test_draw_relayouts_stale_row() {
        let mut screen = MemoryScreen::new(20, 4);
        let mut row = sample();
        row.set_values(vec![("ab".into(), 3), ("cd".into(), 3)]);
        row.draw(&mut screen).unwrap();
        assert_eq!(screen.text_at(1, 2, 6), "ab cd ");
        assert!(!row.is_stale());
    }

    #[test]
    fn test_update_with_auto_draw() {
        let mut screen = MemoryScreen::new(20, 4);
        let mut row = sample();
        row.set_auto_draw(true);
        row.update(&mut screen, |r| r.set_highlighted(Some(0))).unwrap();

        assert_eq!(screen.text_at(1, 2, 15), "id  42    NULL ");
        assert_eq!(screen.glyph(1, 2).unwrap().bg, Color::White);
        assert_eq!(screen.glyph(5, 2).unwrap().bg, Color::Blue);
    }

    #[test]
    fn test_failed_update_does_not_draw() {
        let mut screen = MemoryScreen::new(20, 4);
        let mut row = sample();
        row.set_auto_draw(true);
        let result = row.update(&mut screen, |r| r.set_highlighted(Some(9)));
        assert!(result.is_err());
        assert_eq!(screen.write_count(), 0);
    }
}
