//! Cellgrid errors
//!
//! Contract violations are reported at the call that breaks them. Drawing
//! itself only fails when the screen does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("screen I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("key input closed")]
    InputClosed,

    #[error("viewport {available_cols}x{available_rows} is smaller than the required {required_cols}x{required_rows}")]
    ViewportTooSmall {
        required_cols: u16,
        required_rows: u16,
        available_cols: u16,
        available_rows: u16,
    },

    #[error("highlighted cell {index} is out of range for a row of {len} values")]
    CellOutOfRange { index: usize, len: usize },

    #[error("highlighted row {index} is out of range for a table of {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("highlighted column {index} is out of range for a table of {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    #[error("table has no header row")]
    NoHeaderRow,

    #[error("drop-down menu needs at least one option")]
    NoOptions,

    #[error("default selection {index} is out of range for {len} options")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("max ({max}) can not be less than min ({min})")]
    InvalidRange { min: i64, max: i64 },

    #[error("progress bar length {0} is less than 8")]
    BarTooShort(u16),

    #[error("invalid theme: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
