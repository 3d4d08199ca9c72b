//! Cellgrid ColoredText - runs of text with their own colors
//!
//! A `ColoredText` is an ordered list of segments. Positions and lengths are
//! counted in characters, never bytes, so slicing is safe for any UTF-8.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::defaults::default_colors;
use crate::error::Result;
use crate::screen::Screen;

/// A contiguous run of text sharing one color pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub fg: Color,
    pub bg: Color,
}

impl Segment {
    pub fn new(text: impl Into<String>, fg: Color, bg: Color) -> Self {
        Self { text: text.into(), fg, bg }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Ordered sequence of colored segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredText {
    segments: Vec<Segment>,
}

impl ColoredText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single segment in the current default colors
    pub fn plain(text: impl Into<String>) -> Self {
        let mut out = Self::new();
        out.push_default(text);
        out
    }

    /// Single segment with explicit colors
    pub fn colored(text: impl Into<String>, fg: Color, bg: Color) -> Self {
        let mut out = Self::new();
        out.push(text, fg, bg);
        out
    }

    /// Append a segment
    pub fn push(&mut self, text: impl Into<String>, fg: Color, bg: Color) {
        self.segments.push(Segment::new(text, fg, bg));
    }

    /// Append a segment in the current default colors
    pub fn push_default(&mut self, text: impl Into<String>) {
        let (fg, bg) = default_colors();
        self.push(text, fg, bg);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    /// Total length in characters
    pub fn len(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    /// True when there is no text at all (empty segments count as nothing)
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Segment::is_empty)
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Colors of the first segment
    pub fn first_colors(&self) -> Option<(Color, Color)> {
        self.segments.first().map(|s| (s.fg, s.bg))
    }

    /// The segments covering `[skip, skip + take)` of the concatenated text.
    ///
    /// Segments are split at the range boundaries and keep their colors.
    /// `take == None` runs to the end.
    pub fn slice(&self, skip: usize, take: Option<usize>) -> ColoredText {
        let end = take.map(|t| skip.saturating_add(t));
        let mut out = ColoredText::new();
        let mut pos = 0usize;

        for seg in &self.segments {
            let seg_len = seg.len();
            let seg_start = pos;
            let seg_end = pos + seg_len;
            pos = seg_end;

            if seg_end <= skip {
                continue;
            }
            if let Some(end) = end {
                if seg_start >= end {
                    break;
                }
            }

            let from = skip.saturating_sub(seg_start);
            let to = match end {
                Some(end) => end.min(seg_end) - seg_start,
                None => seg_len,
            };
            let text: String = seg.text.chars().skip(from).take(to - from).collect();
            out.push(text, seg.fg, seg.bg);
        }

        out
    }

    /// Write `[skip, skip + take)` at the screen cursor, segment by segment.
    ///
    /// The screen's colors before the call are restored afterwards.
    /// Returns the number of characters written.
    pub fn render<S: Screen + ?Sized>(
        &self,
        screen: &mut S,
        skip: usize,
        take: Option<usize>,
    ) -> Result<usize> {
        let saved = (screen.foreground(), screen.background());
        let mut written = 0;

        for seg in self.slice(skip, take).segments {
            screen.set_colors(seg.fg, seg.bg)?;
            screen.write_str(&seg.text)?;
            written += seg.len();
        }

        screen.set_colors(saved.0, saved.1)?;
        Ok(written)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            f.write_str(&seg.text)?;
        }
        Ok(())
    }
}

impl From<&str> for ColoredText {
    fn from(text: &str) -> Self {
        ColoredText::plain(text)
    }
}

impl From<String> for ColoredText {
    fn from(text: String) -> Self {
        ColoredText::plain(text)
    }
}
