//! Cellgrid DropDownMenu - modal single choice anchored at the cursor
//!
//! The anchor line shows the current choice (or `<Select>`). Options open
//! below the anchor when they fit, above it when they fit there, and
//! otherwise scroll on whichever side has more room.

use log::debug;

use crate::error::{Error, Result};
use crate::input::Key;
use crate::screen::Screen;

/// Shown on the anchor line while nothing is selected
pub const PLACEHOLDER: &str = "<Select>";

const MORE: &str = "...";

/// Where the option list opens relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropLayout {
    /// Every option below the anchor
    Down,
    /// Every option above the anchor
    Up,
    /// Below the anchor, scrolled so the selection stays visible
    DownScrolled,
    /// Above the anchor, scrolled so the selection stays visible
    UpScrolled,
}

impl DropLayout {
    /// Pick the orientation for `count` options anchored on row `top` of a
    /// viewport `height` rows tall.
    pub fn choose(count: usize, top: u16, height: u16) -> Self {
        let below = height.saturating_sub(top).saturating_sub(1) as usize;
        let above = top as usize;
        if below > count {
            DropLayout::Down
        } else if above > count {
            DropLayout::Up
        } else if below > above {
            DropLayout::DownScrolled
        } else {
            DropLayout::UpScrolled
        }
    }
}

/// Drop-down settings: the options and the choice Escape falls back to
#[derive(Debug, Clone)]
pub struct DropDownMenu {
    options: Vec<String>,
    default: Option<usize>,
}

impl DropDownMenu {
    pub fn new<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Initial selection, also restored on Escape
    pub fn with_default(mut self, default: Option<usize>) -> Self {
        self.default = default;
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Lay the menu out for an anchor at `(left, top)` in a `cols` x `rows`
    /// viewport. Options too wide for the space right of the anchor are
    /// shortened here, once.
    pub fn open(&self, left: u16, top: u16, cols: u16, rows: u16) -> Result<DropDownSession> {
        if self.options.is_empty() {
            return Err(Error::NoOptions);
        }
        if let Some(index) = self.default {
            if index >= self.options.len() {
                return Err(Error::SelectionOutOfRange {
                    index,
                    len: self.options.len(),
                });
            }
        }

        let room = cols.saturating_sub(left) as usize;
        let options: Vec<String> = self
            .options
            .iter()
            .map(|o| {
                if o.chars().count() > room {
                    o.chars()
                        .take(room.saturating_sub(4))
                        .chain(MORE.chars())
                        .take(room)
                        .collect()
                } else {
                    o.clone()
                }
            })
            .collect();

        let longest = options
            .iter()
            .map(|o| o.chars().count())
            .max()
            .unwrap_or(0)
            .max(PLACEHOLDER.len());

        let layout = DropLayout::choose(options.len(), top, rows);
        debug!(
            "Drop-down with {} options at ({}, {}) opens {:?}",
            options.len(),
            left,
            top,
            layout
        );

        Ok(DropDownSession {
            options,
            left,
            top,
            rows,
            width: longest,
            selected: self.default,
            default: self.default,
            layout,
        })
    }

    /// Open at the screen cursor and block until Enter or Escape.
    ///
    /// Returns the committed index, or the default on Escape.
    pub fn show(&self, screen: &mut dyn Screen) -> Result<Option<usize>> {
        let (left, top) = screen.cursor();
        let (cols, rows) = screen.size();
        let mut session = self.open(left, top, cols, rows)?;

        loop {
            session.draw(screen)?;
            screen.flush()?;
            let key = screen.read_key()?;
            if session.handle_key(key) {
                session.draw_anchor(screen)?;
                screen.flush()?;
                debug!("Drop-down committed {:?}", session.selected());
                return Ok(session.selected());
            }
        }
    }
}

/// State of one open drop-down
#[derive(Debug, Clone)]
pub struct DropDownSession {
    options: Vec<String>,
    left: u16,
    top: u16,
    rows: u16,
    /// Menu width in characters, options padded to it
    width: usize,
    selected: Option<usize>,
    default: Option<usize>,
    layout: DropLayout,
}

impl DropDownSession {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn layout(&self) -> DropLayout {
        self.layout
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Apply one key. Returns true once the menu is closed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let last = self.options.len() - 1;
        match key {
            Key::Enter => return true,
            Key::Escape => {
                self.selected = self.default;
                return true;
            }
            Key::PageUp => self.selected = Some(0),
            Key::PageDown => self.selected = Some(last),
            k if k.is_up() => {
                self.selected = match self.selected {
                    Some(i) if i > 0 => Some(i - 1),
                    _ => Some(last),
                }
            }
            k if k.is_down() => {
                self.selected = match self.selected {
                    Some(i) if i < last => Some(i + 1),
                    _ => Some(0),
                }
            }
            _ => {}
        }
        false
    }

    /// Options shown at once
    pub fn visible_count(&self) -> usize {
        let n = self.options.len();
        match self.layout {
            DropLayout::Down | DropLayout::Up => n,
            DropLayout::DownScrolled => {
                (self.rows.saturating_sub(self.top).saturating_sub(1) as usize).min(n)
            }
            DropLayout::UpScrolled => (self.top as usize).min(n),
        }
    }

    /// Index of the first visible option
    pub fn first_visible(&self) -> usize {
        let n = self.options.len();
        let visible = self.visible_count();
        match self.layout {
            DropLayout::Down | DropLayout::Up => 0,
            DropLayout::DownScrolled => match self.selected {
                Some(sel) if sel >= visible => sel + 1 - visible,
                _ => 0,
            },
            DropLayout::UpScrolled => match self.selected {
                Some(sel) => sel.min(n - visible),
                None => n - visible,
            },
        }
    }

    /// Screen row of the first visible option
    fn first_row(&self) -> u16 {
        match self.layout {
            DropLayout::Down | DropLayout::DownScrolled => self.top + 1,
            DropLayout::Up => self.top - self.options.len() as u16,
            DropLayout::UpScrolled => 0,
        }
    }

    /// Anchor line: the selected option or the placeholder, padded
    pub fn draw_anchor(&self, screen: &mut dyn Screen) -> Result<()> {
        let text = self
            .selected
            .and_then(|i| self.options.get(i))
            .map_or(PLACEHOLDER, String::as_str);
        screen.move_to(self.left, self.top)?;
        write_padded(screen, text, self.width)
    }

    /// Anchor line and the visible options.
    ///
    /// Option text is drawn in swapped colors, padding in the normal ones.
    /// The selected option and the one after it form a band drawn wholly in
    /// the normal colors.
    pub fn draw(&self, screen: &mut dyn Screen) -> Result<()> {
        self.draw_anchor(screen)?;

        let first = self.first_visible();
        let row = self.first_row();
        let band = self.selected.map(|s| s..=s + 1);

        for (i, option) in self
            .options
            .iter()
            .enumerate()
            .skip(first)
            .take(self.visible_count())
        {
            let in_band = band.as_ref().is_some_and(|b| b.contains(&i));
            screen.move_to(self.left, row + (i - first) as u16)?;
            if in_band {
                write_padded(screen, option, self.width)?;
            } else {
                let (fg, bg) = (screen.foreground(), screen.background());
                screen.swap_colors()?;
                screen.write_str(option)?;
                screen.set_colors(fg, bg)?;
                screen.fill(' ', self.width.saturating_sub(option.chars().count()))?;
            }
        }
        Ok(())
    }
}

fn write_padded(screen: &mut dyn Screen, text: &str, width: usize) -> Result<()> {
    screen.write_str(text)?;
    screen.fill(' ', width.saturating_sub(text.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::screen::MemoryScreen;

    fn menu() -> DropDownMenu {
        DropDownMenu::new(["alpha", "beta", "gamma"])
    }

    fn numbered(n: usize) -> DropDownMenu {
        DropDownMenu::new((0..n).map(|i| format!("opt{}", i)))
    }

    #[test]
    fn test_layout_choice() {
        assert_eq!(DropLayout::choose(5, 2, 10), DropLayout::Down);
        assert_eq!(DropLayout::choose(5, 8, 10), DropLayout::Up);
        assert_eq!(DropLayout::choose(10, 3, 10), DropLayout::DownScrolled);
        assert_eq!(DropLayout::choose(10, 6, 10), DropLayout::UpScrolled);
        // Exactly as many rows below as options is not enough
        assert_eq!(DropLayout::choose(5, 4, 10), DropLayout::DownScrolled);
    }

    #[test]
    fn test_empty_and_bad_default_rejected() {
        let empty = DropDownMenu::new(Vec::<String>::new());
        assert!(matches!(empty.open(0, 0, 20, 10), Err(Error::NoOptions)));
        assert!(matches!(
            menu().with_default(Some(3)).open(0, 0, 20, 10),
            Err(Error::SelectionOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut s = menu().open(0, 0, 20, 10).unwrap();
        s.handle_key(Key::Up);
        assert_eq!(s.selected(), Some(2));
        s.handle_key(Key::Down);
        assert_eq!(s.selected(), Some(0));
        s.handle_key(Key::Char('k'));
        assert_eq!(s.selected(), Some(2));
        s.handle_key(Key::PageUp);
        assert_eq!(s.selected(), Some(0));
        s.handle_key(Key::PageDown);
        assert_eq!(s.selected(), Some(2));

        let mut s = menu().open(0, 0, 20, 10).unwrap();
        s.handle_key(Key::Char('j'));
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn test_show_commits_selection() {
        let mut screen = MemoryScreen::with_keys(20, 10, [Key::Down, Key::Down, Key::Enter]);
        screen.move_to(2, 2).unwrap();
        let choice = menu().show(&mut screen).unwrap();

        assert_eq!(choice, Some(1));
        assert_eq!(screen.text_at(2, 2, 8), "beta    ");
    }

    #[test]
    fn test_escape_restores_default() {
        let mut screen = MemoryScreen::with_keys(20, 10, [Key::Up, Key::Escape]);
        let choice = menu().with_default(Some(1)).show(&mut screen).unwrap();
        assert_eq!(choice, Some(1));

        let mut screen = MemoryScreen::with_keys(20, 10, [Key::Down, Key::Escape]);
        assert_eq!(menu().show(&mut screen).unwrap(), None);
    }

    #[test]
    fn test_drop_down_draws_band() {
        let mut screen = MemoryScreen::new(20, 10);
        screen.set_colors(Color::White, Color::Black).unwrap();
        let s = menu().with_default(Some(0)).open(2, 2, 20, 10).unwrap();
        s.draw(&mut screen).unwrap();

        assert_eq!(screen.text_at(2, 2, 8), "alpha   ");
        assert_eq!(screen.text_at(2, 3, 8), "alpha   ");
        assert_eq!(screen.text_at(2, 4, 8), "beta    ");
        assert_eq!(screen.text_at(2, 5, 8), "gamma   ");

        assert_eq!(screen.glyph(2, 3).unwrap().bg, Color::Black);
        assert_eq!(screen.glyph(2, 4).unwrap().bg, Color::Black);
        assert_eq!(screen.glyph(2, 5).unwrap().bg, Color::White);
        // Padding keeps the normal colors
        assert_eq!(screen.glyph(9, 5).unwrap().bg, Color::Black);
        assert_eq!((screen.foreground(), screen.background()), (Color::White, Color::Black));
    }

    #[test]
    fn test_band_visible_in_terminal_colors() {
        let mut screen = MemoryScreen::new(20, 10);
        let s = menu().with_default(Some(0)).open(2, 2, 20, 10).unwrap();
        s.draw(&mut screen).unwrap();

        let band = screen.glyph(2, 3).unwrap();
        let other = screen.glyph(2, 5).unwrap();
        assert_eq!((band.fg, band.bg), (Color::Default, Color::Default));
        assert_eq!((other.fg, other.bg), (Color::Black, Color::White));
        assert_eq!((screen.foreground(), screen.background()), (Color::Default, Color::Default));
    }

    #[test]
    fn test_placeholder_without_selection() {
        let mut screen = MemoryScreen::new(20, 10);
        let s = DropDownMenu::new(["a", "b"]).open(0, 0, 20, 10).unwrap();
        s.draw(&mut screen).unwrap();
        assert_eq!(screen.text_at(0, 0, 8), "<Select>");
        assert_eq!(screen.text_at(0, 1, 8), "a       ");
    }

    #[test]
    fn test_drop_up() {
        let mut screen = MemoryScreen::new(20, 10);
        let s = menu().open(0, 8, 20, 10).unwrap();
        assert_eq!(s.layout(), DropLayout::Up);
        s.draw(&mut screen).unwrap();
        assert_eq!(screen.text_at(0, 5, 5), "alpha");
        assert_eq!(screen.text_at(0, 7, 5), "gamma");
        assert_eq!(screen.text_at(0, 8, 8), "<Select>");
    }

    #[test]
    fn test_scrolled_down_keeps_selection_visible() {
        let mut screen = MemoryScreen::new(20, 10);
        let s = numbered(10).with_default(Some(8)).open(0, 3, 20, 10).unwrap();
        assert_eq!(s.layout(), DropLayout::DownScrolled);
        assert_eq!(s.visible_count(), 6);
        assert_eq!(s.first_visible(), 3);
        s.draw(&mut screen).unwrap();
        assert_eq!(screen.text_at(0, 4, 4), "opt3");
        assert_eq!(screen.text_at(0, 9, 4), "opt8");
    }

    #[test]
    fn test_scrolled_up_window() {
        let mut screen = MemoryScreen::new(20, 10);
        let mut s = numbered(10).with_default(Some(1)).open(0, 6, 20, 10).unwrap();
        assert_eq!(s.layout(), DropLayout::UpScrolled);
        assert_eq!(s.first_visible(), 1);
        s.draw(&mut screen).unwrap();
        assert_eq!(screen.text_at(0, 0, 4), "opt1");
        assert_eq!(screen.text_at(0, 5, 4), "opt6");

        s.handle_key(Key::PageDown);
        assert_eq!(s.first_visible(), 4);
    }

    #[test]
    fn test_long_options_truncated_once() {
        let s = DropDownMenu::new(["abcdefghijklmnop", "short"])
            .open(2, 0, 12, 10)
            .unwrap();
        assert_eq!(s.options()[0], "abcdef...");
        assert_eq!(s.options()[1], "short");

        let s = DropDownMenu::new(["abcdef"]).open(8, 0, 10, 10).unwrap();
        assert_eq!(s.options()[0], "..");
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut screen = MemoryScreen::new(20, 10);
        let s = numbered(10).with_default(Some(5)).open(0, 3, 20, 10).unwrap();
        s.draw(&mut screen).unwrap();
        let first = screen.lines();
        s.draw(&mut screen).unwrap();
        assert_eq!(screen.lines(), first);
    }
}
