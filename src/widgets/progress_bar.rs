//! Cellgrid ProgressBar - `"87%  [#########   ]"`
//!
//! The percentage sits at `left`, the bracketed bar starts at `left + 5` and
//! holds `length - 6` cells between the brackets.

use crate::error::{Error, Result};
use crate::screen::Screen;
use crate::widget::Widget;

/// Shortest bar that still has room for the percentage and brackets
pub const MIN_LENGTH: u16 = 8;

/// Columns before the opening bracket
const LABEL_WIDTH: usize = 5;

#[derive(Debug, Clone)]
pub struct ProgressBar {
    min: i64,
    max: i64,
    value: i64,
    left: u16,
    top: u16,
    length: u16,
    auto_draw: bool,
    prevent_overdraw: bool,
    drawn_percent: Option<u8>,
}

/// Map `value` from `[from_min, from_max]` onto `[0, to]`, truncating.
/// An empty source range counts as complete.
fn map_range(value: i64, from_min: i64, from_max: i64, to: i64) -> i64 {
    let span = from_max as i128 - from_min as i128;
    if span <= 0 {
        return to;
    }
    ((value as i128 - from_min as i128) * to as i128 / span) as i64
}

impl ProgressBar {
    /// Bar at `(left, top)` with its value at `min`
    pub fn new(min: i64, max: i64, left: u16, top: u16, length: u16) -> Result<Self> {
        if max < min {
            return Err(Error::InvalidRange { min, max });
        }
        if length < MIN_LENGTH {
            return Err(Error::BarTooShort(length));
        }
        Ok(Self {
            min,
            max,
            value: min,
            left,
            top,
            length,
            auto_draw: false,
            prevent_overdraw: true,
            drawn_percent: None,
        })
    }

    pub fn with_auto_draw(mut self, auto_draw: bool) -> Self {
        self.auto_draw = auto_draw;
        self
    }

    /// Skip auto redraws that would not change the percentage
    pub fn with_prevent_overdraw(mut self, prevent_overdraw: bool) -> Self {
        self.prevent_overdraw = prevent_overdraw;
        self
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Set the progress, clamped into `[min, max]`
    pub fn set_value(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn set_range(&mut self, min: i64, max: i64) -> Result<()> {
        if max < min {
            return Err(Error::InvalidRange { min, max });
        }
        self.min = min;
        self.max = max;
        self.value = self.value.clamp(min, max);
        Ok(())
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn set_length(&mut self, length: u16) -> Result<()> {
        if length < MIN_LENGTH {
            return Err(Error::BarTooShort(length));
        }
        self.length = length;
        // Geometry changed, the next auto draw must happen
        self.drawn_percent = None;
        Ok(())
    }

    pub fn set_position(&mut self, left: u16, top: u16) {
        self.left = left;
        self.top = top;
        self.drawn_percent = None;
    }

    pub fn set_auto_draw(&mut self, auto_draw: bool) {
        self.auto_draw = auto_draw;
    }

    pub fn set_prevent_overdraw(&mut self, prevent_overdraw: bool) {
        self.prevent_overdraw = prevent_overdraw;
    }

    /// Completion in whole percent
    pub fn percent(&self) -> u8 {
        map_range(self.value, self.min, self.max, 100) as u8
    }

    /// Filled cells between the brackets
    fn filled(&self) -> usize {
        let inner = self.length as i64 - 6;
        map_range(self.value, self.min, self.max, inner) as usize
    }

    /// The bar as it appears on screen
    pub fn render(&self) -> String {
        let inner = self.length as usize - 6;
        let filled = self.filled().min(inner);
        let label = format!("{}%", self.percent());
        format!(
            "{:<width$}[{}{}]",
            label,
            "#".repeat(filled),
            " ".repeat(inner - filled),
            width = LABEL_WIDTH
        )
    }

    /// Draw somewhere other than the configured position
    pub fn draw_at(&mut self, screen: &mut dyn Screen, left: u16, top: u16) -> Result<()> {
        screen.write_at(left, top, &self.render())?;
        self.drawn_percent = Some(self.percent());
        Ok(())
    }
}

impl Widget for ProgressBar {
    fn draw(&mut self, screen: &mut dyn Screen) -> Result<()> {
        self.draw_at(screen, self.left, self.top)
    }

    fn auto_draw(&self) -> bool {
        self.auto_draw && (!self.prevent_overdraw || self.drawn_percent != Some(self.percent()))
    }
}
