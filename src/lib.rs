//! Cellgrid - cell-addressed terminal tables and modal dialogs
//!
//! Everything is drawn straight onto a cursor-addressable [`Screen`]; there
//! is no frame buffer and no diffing. Cellgrid provides:
//! - Colored text runs and fixed-position cells, rows and tables
//! - A modal message box and a drop-down selector driven by key input
//! - A progress bar and an inline yes/no prompt
//! - An ANSI screen for real terminals and an in-memory screen for tests
//!
//! # Example
//!
//! ```no_run
//! use cellgrid::{ColumnHeader, HeaderRow, MemoryScreen, Table, TableRow, Widget};
//!
//! let header = HeaderRow::new(vec![ColumnHeader::new("Name", 10), ColumnHeader::new("Qty", 5)]);
//! let rows = vec![TableRow::new(vec!["apples".into(), 3i64.into()])];
//! let mut table = Table::with_headers(0, 0, header, rows);
//!
//! let mut screen = MemoryScreen::new(80, 24);
//! table.draw(&mut screen).unwrap();
//! println!("{}", screen.row_text(1));
//! ```

pub mod config;
pub mod core;
pub mod entry;
pub mod error;
pub mod input;
pub mod screen;
pub mod table;
pub mod widget;
pub mod widgets;

// Re-export commonly used types
pub use config::Theme;
pub use core::{BorderStyle, Color, ColorDefaults, ColoredText, Segment};
pub use entry::Entry;
pub use error::{Error, Result};
pub use input::{InputParser, Key};
pub use screen::{AnsiScreen, MemoryScreen, Screen};
pub use table::{Cell, ColorScheme, ColumnHeader, HeaderRow, Row, RowHighlight, Table, TableRow};
pub use widget::Widget;
pub use widgets::{DropDownMenu, DropLayout, MessageBox, ProgressBar, Response, ResponseSet, YesNo};
