//! Cellgrid Core Module
//!
//! Leaf data structures for the engine:
//! - Color: console palette and process-wide defaults
//! - ColoredText: runs of colored text
//! - Grid: glyph buffer behind the in-memory screen
//! - BorderStyle: frame characters for dialogs

pub mod border;
pub mod color;
pub mod defaults;
pub mod grid;
pub mod text;

pub use border::BorderStyle;
pub use color::Color;
pub use defaults::{default_colors, defaults, set_defaults, set_force_console_color, ColorDefaults};
pub use grid::{box_styles, BoxChars, Glyph, Grid};
pub use text::{ColoredText, Segment};
