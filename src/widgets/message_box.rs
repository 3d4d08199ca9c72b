//! Cellgrid MessageBox - modal framed dialog
//!
//! A message box wraps its message to the space left inside the viewport
//! edges, centers a frame on screen and then loops on key input until the
//! user accepts (Enter) or cancels (Escape).
//!
//! Layout of a box with corners `(x1, y1)` and exclusive `(x2, y2)`:
//!
//! ```text
//! y1      ╔═ title ═══════════╗
//! y1+1    ║              ...  ║   <- more text above
//! y1+2    ║ message line      ║
//!         ║ ...               ║
//! y2-4    ║              ...  ║   <- more text below
//! y2-3    ╠═══════════════════╣
//! y2-2    ║     Yes No Cancel ║
//! y2-1    ╚═══════════════════╝
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::BorderStyle;
use crate::error::{Error, Result};
use crate::input::Key;
use crate::screen::Screen;

/// Smallest usable area inside the viewport edges
pub const MIN_WIDTH: u16 = 17;
pub const MIN_HEIGHT: u16 = 6;

/// Rows taken by everything except message lines
const CHROME_ROWS: u16 = 6;

const TAB: &str = "    ";
const MORE: &str = "...";

/// Which responses a box offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSet {
    #[default]
    Ok,
    OkCancel,
    YesNo,
    YesNoCancel,
}

/// What the user answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Ok,
    Cancel,
    Yes,
    No,
}

impl Response {
    pub fn label(&self) -> &'static str {
        match self {
            Response::Ok => "OK",
            Response::Cancel => "Cancel",
            Response::Yes => "Yes",
            Response::No => "No",
        }
    }
}

impl ResponseSet {
    /// Responses in left-to-right order
    pub fn responses(&self) -> &'static [Response] {
        match self {
            ResponseSet::Ok => &[Response::Ok],
            ResponseSet::OkCancel => &[Response::Ok, Response::Cancel],
            ResponseSet::YesNo => &[Response::Yes, Response::No],
            ResponseSet::YesNoCancel => &[Response::Yes, Response::No, Response::Cancel],
        }
    }

    /// Selected when the box opens
    pub fn default_response(&self) -> Response {
        match self {
            ResponseSet::Ok | ResponseSet::OkCancel => Response::Ok,
            ResponseSet::YesNo | ResponseSet::YesNoCancel => Response::Yes,
        }
    }

    /// Answer forced by Escape. A plain OK box keeps the current selection.
    pub fn escape_response(&self, current: Response) -> Response {
        match self {
            ResponseSet::OkCancel | ResponseSet::YesNoCancel => Response::Cancel,
            ResponseSet::YesNo => Response::No,
            ResponseSet::Ok => current,
        }
    }

    /// Characters the response row needs, labels plus single-space gaps
    fn row_len(&self) -> u16 {
        let labels: usize = self.responses().iter().map(|r| r.label().len()).sum();
        (labels + self.responses().len() - 1) as u16
    }
}

/// Wrap `message` to lines of at most `max_width` characters.
///
/// Explicit newlines always break. Tabs count as four spaces. A line is cut
/// at the last whitespace that fits, and that whitespace is dropped; a word
/// is only split when it alone is wider than `max_width`.
pub fn split_message(message: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let expanded = message.replace('\t', TAB).replace('\r', "");
    let mut out = Vec::new();

    for logical in expanded.split('\n') {
        let chars: Vec<char> = logical.chars().collect();
        let mut rest = &chars[..];

        loop {
            if rest.len() <= max_width {
                out.push(rest.iter().collect());
                break;
            }

            let take = if rest[max_width].is_whitespace() {
                max_width
            } else {
                rest[..max_width]
                    .iter()
                    .rposition(|c| c.is_whitespace())
                    .unwrap_or(max_width)
            };

            let (piece, mut remainder) = rest.split_at(take);
            if remainder.first().is_some_and(|c| c.is_whitespace()) {
                remainder = &remainder[1..];
            }
            if !piece.is_empty() {
                out.push(piece.iter().collect());
            }
            if remainder.is_empty() {
                break;
            }
            rest = remainder;
        }
    }

    out
}

/// Screen rectangle with exclusive right and bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxRect {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl BoxRect {
    pub fn right(&self) -> u16 {
        self.left.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Message box settings. One value can show any number of messages.
#[derive(Debug, Clone)]
pub struct MessageBox {
    title: String,
    responses: ResponseSet,
    edge_distance: u16,
    border: BorderStyle,
}

impl Default for MessageBox {
    fn default() -> Self {
        Self {
            title: String::new(),
            responses: ResponseSet::Ok,
            edge_distance: 4,
            border: BorderStyle::Double,
        }
    }
}

impl MessageBox {
    pub fn new(responses: ResponseSet) -> Self {
        Self {
            responses,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Minimum distance between the viewport edge and the frame
    pub fn with_edge_distance(mut self, edge_distance: u16) -> Self {
        self.edge_distance = edge_distance;
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn responses(&self) -> ResponseSet {
        self.responses
    }

    /// Wrap and place `message` for a viewport of `cols` x `rows`.
    ///
    /// Fails when the viewport minus the edges is below 17x6.
    pub fn layout(&self, message: &str, cols: u16, rows: u16) -> Result<MessageBoxSession> {
        let edges = self.edge_distance.saturating_mul(2);
        let max_width = cols.saturating_sub(edges);
        let max_height = rows.saturating_sub(edges);

        if max_width < MIN_WIDTH || max_height < MIN_HEIGHT {
            return Err(Error::ViewportTooSmall {
                required_cols: MIN_WIDTH.saturating_add(edges),
                required_rows: MIN_HEIGHT.saturating_add(edges),
                available_cols: cols,
                available_rows: rows,
            });
        }

        let lines = split_message(message, (max_width - 4) as usize);
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;

        let (width, height) = if lines.len() == 1 {
            let width = (longest + 4).max(self.responses.row_len() + 4);
            (width, CHROME_ROWS + 1)
        } else {
            let width = (longest + 4).max(MIN_WIDTH);
            let wanted = (lines.len() as u16).saturating_add(CHROME_ROWS);
            (width, wanted.min(max_height))
        };
        let height = height.min(rows);

        let rect = BoxRect {
            left: (cols / 2).saturating_sub(width / 2),
            top: (rows / 2).saturating_sub(height / 2),
            width,
            height,
        };

        debug!(
            "Message box {}x{} at ({}, {}) for {} lines",
            rect.width,
            rect.height,
            rect.left,
            rect.top,
            lines.len()
        );

        Ok(MessageBoxSession {
            lines,
            scroll: 0,
            selected: self.responses.default_response(),
            responses: self.responses,
            rect,
        })
    }

    /// Show `message` and block until the user answers
    pub fn show(&self, screen: &mut dyn Screen, message: &str) -> Result<Response> {
        let (cols, rows) = screen.size();
        let mut session = self.layout(message, cols, rows)?;

        session.draw_frame(screen, &self.title, self.border)?;
        loop {
            session.draw_message(screen)?;
            session.draw_responses(screen)?;
            screen.flush()?;

            let key = screen.read_key()?;
            if let Some(response) = session.handle_key(key) {
                session.draw_responses(screen)?;
                screen.flush()?;
                debug!("Message box answered {:?}", response);
                return Ok(response);
            }
        }
    }
}

/// State of one open message box
#[derive(Debug, Clone)]
pub struct MessageBoxSession {
    lines: Vec<String>,
    scroll: usize,
    selected: Response,
    responses: ResponseSet,
    rect: BoxRect,
}

impl MessageBoxSession {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn selected(&self) -> Response {
        self.selected
    }

    pub fn rect(&self) -> BoxRect {
        self.rect
    }

    /// Message lines that fit at once
    pub fn visible_lines(&self) -> usize {
        self.rect.height.saturating_sub(CHROME_ROWS) as usize
    }

    /// Apply one key. Returns the answer once the box is done.
    pub fn handle_key(&mut self, key: Key) -> Option<Response> {
        match key {
            Key::Enter => return Some(self.selected),
            Key::Escape => {
                self.selected = self.responses.escape_response(self.selected);
                return Some(self.selected);
            }
            k if k.is_up() => self.scroll = self.scroll.saturating_sub(1),
            k if k.is_down() => {
                if self.scroll + 1 < self.lines.len() {
                    self.scroll += 1;
                }
            }
            k if k.is_left() => self.step_response(-1),
            k if k.is_right() => self.step_response(1),
            _ => {}
        }
        None
    }

    fn step_response(&mut self, step: isize) {
        let order = self.responses.responses();
        let Some(pos) = order.iter().position(|r| *r == self.selected) else {
            return;
        };
        let next = pos as isize + step;
        if next >= 0 && (next as usize) < order.len() {
            self.selected = order[next as usize];
        }
    }

    /// Frame, title, separator and a blank interior
    pub fn draw_frame(&self, screen: &mut dyn Screen, title: &str, border: BorderStyle) -> Result<()> {
        let chars = border.chars();
        let BoxRect { left, top, width, height } = self.rect;
        if width < 2 || height < 4 {
            return Ok(());
        }
        let (x1, x2, y2) = (left, self.rect.right(), self.rect.bottom());
        let inner = (width - 2) as usize;

        for y in top + 1..y2 - 1 {
            screen.move_to(x1 + 1, y)?;
            screen.fill(' ', inner)?;
        }

        let line = |l: char, r: char| {
            let mut s = String::with_capacity(width as usize * 3);
            s.push(l);
            s.extend(std::iter::repeat(chars.h).take(inner));
            s.push(r);
            s
        };
        screen.write_at(x1, top, &line(chars.tl, chars.tr))?;
        screen.write_at(x1, y2 - 3, &line(chars.lt, chars.rt))?;
        screen.write_at(x1, y2 - 1, &line(chars.bl, chars.br))?;

        let v = chars.v.to_string();
        for y in (top + 1..y2 - 3).chain(std::iter::once(y2 - 2)) {
            screen.write_at(x1, y, &v)?;
            screen.write_at(x2 - 1, y, &v)?;
        }

        if !title.is_empty() {
            let room = width.saturating_sub(7) as usize;
            let shown: String = if title.chars().count() > room {
                title.chars().take(room).chain(MORE.chars()).collect()
            } else {
                title.to_string()
            };
            screen.write_at(x1 + 2, top, &shown)?;
        }
        Ok(())
    }

    /// Visible window of message lines plus the scroll markers
    pub fn draw_message(&self, screen: &mut dyn Screen) -> Result<()> {
        let BoxRect { left, top, width, .. } = self.rect;
        let (x2, y2) = (self.rect.right(), self.rect.bottom());
        if width < 6 || self.rect.height < CHROME_ROWS {
            return Ok(());
        }

        for y in top + 1..y2 - 3 {
            screen.move_to(left + 1, y)?;
            screen.fill(' ', (width - 2) as usize)?;
        }

        if self.scroll > 0 {
            screen.write_at(x2 - 5, top + 1, MORE)?;
        }

        let visible = self.visible_lines();
        for (i, line) in self.lines.iter().skip(self.scroll).take(visible).enumerate() {
            screen.write_at(left + 2, top + 2 + i as u16, line)?;
        }

        if self.scroll + visible < self.lines.len() {
            screen.write_at(x2 - 5, y2 - 4, MORE)?;
        }
        Ok(())
    }

    /// Response labels, right aligned, selected one in swapped colors
    pub fn draw_responses(&self, screen: &mut dyn Screen) -> Result<()> {
        let order = self.responses.responses();
        let y = self.rect.bottom().saturating_sub(2);
        let mut x = self.rect.right().saturating_sub(2 + self.responses.row_len());

        for response in order {
            let label = response.label();
            if *response == self.selected {
                let (fg, bg) = (screen.foreground(), screen.background());
                screen.swap_colors()?;
                screen.write_at(x, y, label)?;
                screen.set_colors(fg, bg)?;
            } else {
                screen.write_at(x, y, label)?;
            }
            x += label.len() as u16 + 1;
        }
        Ok(())
    }
}
