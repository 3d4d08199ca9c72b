//! ANSI Screen
//!
//! Writes cursor moves, SGR colors and text straight to a writer and reads
//! keys from a reader through the input parser.
//! - 16 colors (standard ANSI) plus terminal default
//! - Viewport size is fixed at construction; resizing is the caller's job

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use super::Screen;
use crate::core::Color;
use crate::error::{Error, Result};
use crate::input::{InputParser, Key};

/// ANSI escape sequences
const CSI: &str = "\x1b[";

/// Screen backed by an ANSI terminal
pub struct AnsiScreen<R: Read, W: Write> {
    reader: R,
    writer: W,
    parser: InputParser,
    pending: VecDeque<Key>,
    /// Display dimensions
    cols: u16,
    rows: u16,
    /// Track cursor position
    cursor_x: u16,
    cursor_y: u16,
    /// Colors requested by the caller
    fg: Color,
    bg: Color,
    /// Colors last sent to the terminal, to minimize escape codes
    emitted: Option<(Color, Color)>,
}

impl AnsiScreen<io::Stdin, io::Stdout> {
    /// Screen on the process's stdin/stdout, sized from the terminal
    pub fn stdio() -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        log::debug!("Terminal size {}x{}", cols, rows);
        Ok(Self::new(io::stdin(), io::stdout(), cols, rows))
    }
}

impl<R: Read, W: Write> AnsiScreen<R, W> {
    /// Create a new screen with specified dimensions
    pub fn new(reader: R, writer: W, cols: u16, rows: u16) -> Self {
        Self {
            reader,
            writer,
            parser: InputParser::new(),
            pending: VecDeque::new(),
            cols,
            rows,
            cursor_x: 0,
            cursor_y: 0,
            fg: Color::Default,
            bg: Color::Default,
            emitted: None,
        }
    }

    /// Update the viewport size after the terminal was resized
    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Clear the screen and home the cursor
    pub fn clear(&mut self) -> Result<()> {
        self.sync_colors()?;
        write!(self.writer, "{}2J{}H", CSI, CSI)?;
        self.cursor_x = 0;
        self.cursor_y = 0;
        Ok(())
    }

    /// Hide or show the cursor
    pub fn show_cursor(&mut self, visible: bool) -> Result<()> {
        let code = if visible { 'h' } else { 'l' };
        write!(self.writer, "{}?25{}", CSI, code)?;
        Ok(())
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Emit SGR if the requested colors differ from what the terminal has
    fn sync_colors(&mut self) -> io::Result<()> {
        if self.emitted == Some((self.fg, self.bg)) {
            return Ok(());
        }

        let mut codes: Vec<u8> = Vec::new();
        match self.emitted {
            Some((fg, bg)) => {
                if fg != self.fg {
                    codes.push(self.fg.fg_code());
                }
                if bg != self.bg {
                    codes.push(self.bg.bg_code());
                }
            }
            None => {
                codes.push(0);
                codes.push(self.fg.fg_code());
                codes.push(self.bg.bg_code());
            }
        }

        let code_strs: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        write!(self.writer, "{}{}m", CSI, code_strs.join(";"))?;
        self.emitted = Some((self.fg, self.bg));
        Ok(())
    }
}

impl<R: Read, W: Write> Screen for AnsiScreen<R, W> {
    fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    fn move_to(&mut self, col: u16, row: u16) -> Result<()> {
        self.cursor_x = col;
        self.cursor_y = row;
        write!(self.writer, "{}{};{}H", CSI, row as u32 + 1, col as u32 + 1)?;
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
        if text.is_empty() {
            return Ok(());
        }
        self.sync_colors()?;
        // Sanitize control characters to prevent terminal corruption
        let clean: String = text
            .chars()
            .map(|c| if c < ' ' || c == '\x7f' { ' ' } else { c })
            .collect();
        self.writer.write_all(clean.as_bytes())?;

        let advanced = clean.chars().count().min(u16::MAX as usize) as u16;
        self.cursor_x = self.cursor_x.saturating_add(advanced).min(self.cols);
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        self.writer.flush()?;
        let mut buf = [0u8; 64];

        loop {
            if let Some(key) = self.pending.pop_front() {
                return Ok(key);
            }

            let n = self.reader.read(&mut buf)?;
            if n == 0 {
                return Err(Error::InputClosed);
            }

            self.pending.extend(self.parser.parse(&buf[..n]));
            if self.pending.is_empty() {
                if let Some(key) = self.parser.take_lone_escape() {
                    return Ok(key);
                }
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
