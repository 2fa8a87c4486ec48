//! Error types
//!
//! None of these are fatal: the session always recovers to `Idle` and keeps
//! the last good grid.

use thiserror::Error;

use crate::core::Coord;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Grid configuration and layout mask rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(
        "invalid grid configuration: {sections} sections x {rows} rows x {cols} cols \
         (allowed 1-10 sections, 1-20 rows, 1-10 cols)"
    )]
    InvalidConfiguration { sections: u32, rows: u32, cols: u32 },

    #[error("layout mask is {actual_rows}x{actual_cols}, grid is {expected_rows}x{expected_cols}")]
    MaskDimensionMismatch {
        expected_rows: u32,
        expected_cols: u32,
        actual_rows: u32,
        actual_cols: u32,
    },

    #[error("layout JSON: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("no route of active cells from {start} to {end}")]
    NotFound { start: Coord, end: Coord },
}

/// Failures reported by a ledger collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("no ledger attached")]
    Detached,

    #[error("ledger write failed at row {row}: {message}")]
    Write { row: u32, message: String },

    #[error("ledger row {0} does not exist")]
    NoSuchRow(u32),

    #[error("ledger has no measurements")]
    Empty,

    #[error("ledger backend: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        GridError::Json(e.to_string())
    }
}
