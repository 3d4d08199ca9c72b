//! Cellgrid Table - header plus body rows
//!
//! A table owns its values and derives one `Row` per physical line group:
//! the header first (when present), then every body row stacked below the
//! previous one. Row parity follows the physical index, so the checkerboard
//! continues through the header.
//!
//! The highlighted position is kept on the table, not on the rows. At draw
//! time the highlighted column is pushed into the one row that matches the
//! highlighted row and cleared everywhere else, so the position survives a
//! full replacement of the values.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::row::Row;
use super::scheme::ColorScheme;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::screen::Screen;
use crate::widget::Widget;

/// One body row: its values and its height in screen rows
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub entries: Vec<Entry>,
    pub height: u16,
}

impl TableRow {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries, height: 1 }
    }

    pub fn with_height(entries: Vec<Entry>, height: u16) -> Self {
        Self {
            entries,
            height: height.max(1),
        }
    }
}

/// Column title and the width every cell of that column gets
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHeader {
    pub title: Entry,
    pub width: u16,
}

impl ColumnHeader {
    pub fn new(title: impl Into<Entry>, width: u16) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    pub columns: Vec<ColumnHeader>,
    pub height: u16,
}

impl HeaderRow {
    pub fn new(columns: Vec<ColumnHeader>) -> Self {
        Self { columns, height: 1 }
    }
}

/// Which row carries the highlight.
///
/// The header is addressed on its own instead of as "row -1", so "no
/// highlight" and "header highlighted" can not be mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowHighlight {
    Header,
    Body(usize),
}

#[derive(Debug, Clone)]
pub struct Table {
    values: Vec<TableRow>,
    header: Option<HeaderRow>,
    widths: Vec<u16>,
    left: u16,
    top: u16,
    scheme: ColorScheme,
    colored: bool,
    highlighted_row: Option<RowHighlight>,
    highlighted_column: Option<usize>,
    auto_draw: bool,
    rows: Vec<Row>,
    stale: bool,
}

impl Table {
    fn empty(left: u16, top: u16) -> Self {
        Self {
            values: Vec::new(),
            header: None,
            widths: Vec::new(),
            left,
            top,
            scheme: ColorScheme::table(),
            colored: true,
            highlighted_row: None,
            highlighted_column: None,
            auto_draw: false,
            rows: Vec::new(),
            stale: false,
        }
    }

    /// Table whose column widths come from the header. A header without
    /// columns counts as no header.
    pub fn with_headers(left: u16, top: u16, header: HeaderRow, values: Vec<TableRow>) -> Self {
        let mut table = Self::empty(left, top);
        table.header = Some(header).filter(|h| !h.columns.is_empty());
        table.values = values;
        table.relayout();
        table
    }

    /// Header-less table with an explicit width per column
    pub fn with_widths(left: u16, top: u16, widths: Vec<u16>, values: Vec<TableRow>) -> Self {
        let mut table = Self::empty(left, top);
        table.widths = widths;
        table.values = values;
        table.relayout();
        table
    }

    pub fn values(&self) -> &[TableRow] {
        &self.values
    }

    /// Replace the body. A highlight that still addresses a valid position
    /// is kept, anything else is dropped.
    pub fn set_values(&mut self, values: Vec<TableRow>) {
        self.values = values;
        if let Some(RowHighlight::Body(r)) = self.highlighted_row {
            if r >= self.values.len() {
                warn!("Dropping highlighted row {} for a table of {} rows", r, self.values.len());
                self.highlighted_row = None;
            }
        }
        if let Some(c) = self.highlighted_column {
            if c >= self.column_count() {
                warn!("Dropping highlighted column {} for a table of {} columns", c, self.column_count());
                self.highlighted_column = None;
            }
        }
        self.stale = true;
    }

    pub fn header(&self) -> Option<&HeaderRow> {
        self.header.as_ref()
    }

    /// Set or remove the header. Removing it drops a header highlight, and
    /// an empty header removes it.
    pub fn set_header(&mut self, header: Option<HeaderRow>) {
        let header = header.filter(|h| !h.columns.is_empty());
        if header.is_none() && self.highlighted_row == Some(RowHighlight::Header) {
            self.highlighted_row = None;
        }
        self.header = header;
        self.stale = true;
    }

    pub fn widths(&self) -> &[u16] {
        &self.widths
    }

    pub fn set_widths(&mut self, widths: Vec<u16>) {
        self.widths = widths;
        self.stale = true;
    }

    /// Width of a column: header width, then the width list, then 0
    pub fn column_width(&self, column: usize) -> u16 {
        if let Some(header) = &self.header {
            if let Some(h) = header.columns.get(column) {
                return h.width;
            }
        }
        self.widths.get(column).copied().unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        if let Some(header) = &self.header {
            return header.columns.len();
        }
        if !self.widths.is_empty() {
            return self.widths.len();
        }
        self.values.iter().map(|r| r.entries.len()).max().unwrap_or(0)
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

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Recolor the whole table
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
        self.stale = true;
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn set_colored(&mut self, colored: bool) {
        self.colored = colored;
        self.stale = true;
    }

    pub fn highlighted_row(&self) -> Option<RowHighlight> {
        self.highlighted_row
    }

    pub fn set_highlighted_row(&mut self, row: Option<RowHighlight>) -> Result<()> {
        match row {
            Some(RowHighlight::Header) if self.header.is_none() => return Err(Error::NoHeaderRow),
            Some(RowHighlight::Body(index)) if index >= self.values.len() => {
                return Err(Error::RowOutOfRange {
                    index,
                    rows: self.values.len(),
                })
            }
            _ => {}
        }
        self.highlighted_row = row;
        self.stale = true;
        Ok(())
    }

    pub fn highlighted_column(&self) -> Option<usize> {
        self.highlighted_column
    }

    pub fn set_highlighted_column(&mut self, column: Option<usize>) -> Result<()> {
        if let Some(index) = column {
            let columns = self.column_count();
            if index >= columns {
                return Err(Error::ColumnOutOfRange { index, columns });
            }
        }
        self.highlighted_column = column;
        self.stale = true;
        Ok(())
    }

    pub fn set_auto_draw(&mut self, auto_draw: bool) {
        self.auto_draw = auto_draw;
    }

    /// Derived rows, header first
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Total height in screen rows
    pub fn height(&self) -> u16 {
        let header = self.header.as_ref().map_or(0, |h| h.height.max(1));
        self.values
            .iter()
            .fold(header, |acc, r| acc.saturating_add(r.height.max(1)))
    }

    /// Physical row index of the highlighted row
    fn physical_highlight(&self) -> Option<usize> {
        let offset = usize::from(self.header.is_some());
        match self.highlighted_row? {
            RowHighlight::Header => self.header.as_ref().map(|_| 0),
            RowHighlight::Body(r) => Some(r + offset),
        }
    }

    fn make_row(&self, physical: usize, top: u16, height: u16, values: Vec<(Entry, u16)>) -> Row {
        let mut row = Row::new(self.left, top);
        row.set_even(physical % 2 == 0);
        row.set_colored(self.colored);
        row.set_scheme(self.scheme);
        row.set_height(height);
        row.set_values(values);
        row.relayout();
        row
    }
}

impl Widget for Table {
    fn relayout(&mut self) {
        let mut rows = Vec::with_capacity(self.values.len() + 1);
        let mut y = self.top;

        if let Some(header) = &self.header {
            let values = header
                .columns
                .iter()
                .map(|c| (c.title.clone(), c.width))
                .collect();
            rows.push(self.make_row(0, y, header.height, values));
            y = y.saturating_add(header.height.max(1));
        }

        for body in &self.values {
            let values = body
                .entries
                .iter()
                .enumerate()
                .map(|(column, entry)| (entry.clone(), self.column_width(column)))
                .collect();
            rows.push(self.make_row(rows.len(), y, body.height, values));
            y = y.saturating_add(body.height.max(1));
        }

        debug!(
            "Table at ({}, {}) laid out {} rows, {} screen lines",
            self.left,
            self.top,
            rows.len(),
            y - self.top
        );
        self.rows = rows;
        self.stale = false;
    }

    fn draw(&mut self, screen: &mut dyn Screen) -> Result<()> {
        if self.stale {
            self.relayout();
        }

        let target = self.physical_highlight();
        let column = self.highlighted_column;
        for (i, row) in self.rows.iter_mut().enumerate() {
            let cell = if target == Some(i) {
                column.filter(|c| *c < row.len())
            } else {
                None
            };
            if row.highlighted() != cell {
                row.set_highlighted(cell)?;
            }
            row.draw(screen)?;
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
    use crate::core::Color;
    use crate::screen::MemoryScreen;

    fn body() -> Vec<TableRow> {
        vec![
            TableRow::new(vec!["ant".into(), 1i64.into()]),
            TableRow::new(vec!["bee".into(), 2i64.into()]),
            TableRow::with_height(vec!["cat".into(), Entry::Absent], 2),
        ]
    }

    fn headed() -> Table {
        let header = HeaderRow::new(vec![ColumnHeader::new("Name", 6), ColumnHeader::new("N", 4)]);
        Table::with_headers(0, 1, header, body())
    }

    #[test]
    fn test_rows_stack_by_height() {
        let table = headed();
        let tops: Vec<u16> = table.rows().iter().map(Row::top).collect();
        assert_eq!(tops, vec![1, 2, 3, 4]);
        assert_eq!(table.height(), 5);
    }

    #[test]
    fn test_header_widths_take_precedence() {
        let mut table = headed();
        table.set_widths(vec![2, 2]);
        table.relayout();
        assert_eq!(table.column_width(0), 6);
        assert_eq!(table.rows()[1].values()[1].1, 4);
    }

    #[test]
    fn test_width_list_then_zero() {
        let table = Table::with_widths(0, 0, vec![5], body());
        assert_eq!(table.column_width(0), 5);
        assert_eq!(table.column_width(1), 0);
    }

    #[test]
    fn test_draw_renders_grid() {
        let mut screen = MemoryScreen::new(20, 8);
        let mut table = headed();
        table.draw(&mut screen).unwrap();

        assert_eq!(screen.text_at(0, 1, 10), "Name  N   ");
        assert_eq!(screen.text_at(0, 2, 10), "ant   1   ");
        assert_eq!(screen.text_at(0, 4, 10), "cat   NULL");
        assert_eq!(screen.text_at(0, 5, 10), "          ");
    }

    #[test]
    fn test_checkerboard_continues_through_header() {
        let mut screen = MemoryScreen::new(20, 8);
        let mut table = headed();
        table.draw(&mut screen).unwrap();

        let odd = table.scheme().background_odd;
        assert_eq!(odd, Color::BrightBlack);
        assert_ne!(screen.glyph(0, 1).unwrap().bg, odd);
        assert_eq!(screen.glyph(6, 1).unwrap().bg, odd);
        assert_eq!(screen.glyph(0, 2).unwrap().bg, odd);
        assert_ne!(screen.glyph(6, 2).unwrap().bg, odd);
    }

    #[test]
    fn test_body_highlight_accounts_for_header() {
        let mut screen = MemoryScreen::new(20, 8);
        let mut table = headed();
        table.set_highlighted_row(Some(RowHighlight::Body(0))).unwrap();
        table.set_highlighted_column(Some(1)).unwrap();
        table.draw(&mut screen).unwrap();

        assert_eq!(screen.glyph(6, 2).unwrap().bg, Color::White);
        assert_eq!(screen.glyph(6, 1).unwrap().bg, Color::BrightBlack);
        let flags: Vec<Option<usize>> = table.rows().iter().map(Row::highlighted).collect();
        assert_eq!(flags, vec![None, Some(1), None, None]);
    }

    #[test]
    fn test_header_highlight() {
        let mut screen = MemoryScreen::new(20, 8);
        let mut table = headed();
        table.set_highlighted_row(Some(RowHighlight::Header)).unwrap();
        table.set_highlighted_column(Some(0)).unwrap();
        table.draw(&mut screen).unwrap();
        assert_eq!(screen.glyph(0, 1).unwrap().bg, Color::White);
        assert_eq!(table.rows()[0].highlighted(), Some(0));
    }

    #[test]
    fn test_empty_header_is_no_header() {
        let mut table = Table::with_headers(0, 1, HeaderRow::new(Vec::new()), body());
        assert!(table.header().is_none());
        assert_eq!(table.rows()[0].top(), 1);
        assert_eq!(table.height(), 4);
        assert!(matches!(
            table.set_highlighted_row(Some(RowHighlight::Header)),
            Err(Error::NoHeaderRow)
        ));

        let mut table = headed();
        table.set_highlighted_row(Some(RowHighlight::Header)).unwrap();
        table.set_header(Some(HeaderRow::new(Vec::new())));
        assert!(table.header().is_none());
        assert_eq!(table.highlighted_row(), None);
    }

    #[test]
    fn test_header_highlight_needs_header() {
        let mut table = Table::with_widths(0, 0, vec![3, 3], body());
        assert!(matches!(
            table.set_highlighted_row(Some(RowHighlight::Header)),
            Err(Error::NoHeaderRow)
        ));
    }

    #[test]
    fn test_highlight_bounds() {
        let mut table = headed();
        assert!(matches!(
            table.set_highlighted_row(Some(RowHighlight::Body(3))),
            Err(Error::RowOutOfRange { index: 3, rows: 3 })
        ));
        assert!(matches!(
            table.set_highlighted_column(Some(2)),
            Err(Error::ColumnOutOfRange { index: 2, columns: 2 })
        ));
    }

    #[test]
    fn test_highlight_survives_equal_shape_values() {
        let mut screen = MemoryScreen::new(20, 8);
        let mut table = headed();
        table.set_highlighted_row(Some(RowHighlight::Body(1))).unwrap();
        table.set_highlighted_column(Some(0)).unwrap();
        table.draw(&mut screen).unwrap();

        table.set_values(vec![
            TableRow::new(vec!["x".into(), 7i64.into()]),
            TableRow::new(vec!["y".into(), 8i64.into()]),
            TableRow::new(vec!["z".into(), 9i64.into()]),
        ]);
        table.draw(&mut screen).unwrap();

        assert_eq!(table.highlighted_row(), Some(RowHighlight::Body(1)));
        assert_eq!(table.highlighted_column(), Some(0));
        assert_eq!(screen.text_at(0, 3, 6), "y     ");
        assert_eq!(screen.glyph(0, 3).unwrap().bg, Color::White);
        assert_eq!(screen.glyph(0, 2).unwrap().bg, Color::BrightBlack);
    }

    #[test]
    fn test_shrinking_values_drops_highlight() {
        let mut table = headed();
        table.set_highlighted_row(Some(RowHighlight::Body(2))).unwrap();
        table.set_values(vec![TableRow::new(vec!["only".into()])]);
        assert_eq!(table.highlighted_row(), None);
    }

    #[test]
    fn test_short_row_ignores_highlighted_column() {
        let mut screen = MemoryScreen::new(20, 8);
        let mut table = Table::with_widths(
            0,
            0,
            vec![3, 3],
            vec![TableRow::new(vec!["a".into()]), TableRow::new(vec!["b".into(), "c".into()])],
        );
        table.set_highlighted_row(Some(RowHighlight::Body(0))).unwrap();
        table.set_highlighted_column(Some(1)).unwrap();
        table.draw(&mut screen).unwrap();
        assert_eq!(table.rows()[0].highlighted(), None);
    }

    #[test]
    fn test_uncolored_table() {
        let mut screen = MemoryScreen::new(20, 8);
        let mut table = headed();
        table.set_colored(false);
        table.draw(&mut screen).unwrap();
        for row in 1..5 {
            for col in 0..10 {
                assert_eq!(screen.glyph(col, row).unwrap().bg, table.scheme().background_even);
            }
        }
    }

    #[test]
    fn test_draw_twice_is_idempotent() {
        let mut screen = MemoryScreen::new(20, 8);
        let mut table = headed();
        table.set_highlighted_row(Some(RowHighlight::Body(2))).unwrap();
        table.set_highlighted_column(Some(1)).unwrap();
        table.draw(&mut screen).unwrap();
        let first = screen.lines();
        table.draw(&mut screen).unwrap();
        assert_eq!(screen.lines(), first);
    }

    #[test]
    fn test_auto_draw_recolors() {
        let mut screen = MemoryScreen::new(20, 8);
        let mut table = headed();
        table.set_auto_draw(true);
        table
            .update(&mut screen, |t| {
                let mut scheme = *t.scheme();
                scheme.background_odd = Color::Magenta;
                t.set_scheme(scheme);
                Ok(())
            })
            .unwrap();
        assert_eq!(screen.glyph(6, 1).unwrap().bg, Color::Magenta);
    }
}
