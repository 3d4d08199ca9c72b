//! Cellgrid Table Module
//!
//! Fixed-position tabular output, leaf first:
//! - Cell: one rectangle of colored text with typed accessors
//! - Row: cells side by side, checkerboard colored
//! - Table: optional header plus body rows, with one highlighted position

pub mod cell;
pub mod row;
pub mod scheme;
#[allow(clippy::module_inception)]
pub mod table;

pub use cell::Cell;
pub use row::Row;
pub use scheme::ColorScheme;
pub use table::{ColumnHeader, HeaderRow, RowHighlight, Table, TableRow};
