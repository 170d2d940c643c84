//! Error types for the puzzle crate

use thiserror::Error;

/// Main error type for the puzzle crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing dimension line")]
    MissingDimension,

    #[error("invalid dimension '{input}' (expected a positive integer)")]
    InvalidDimension { input: String },

    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row} has {got} columns (expected {expected})")]
    ColumnCount {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid tile '{token}' in row {row}")]
    InvalidTile { token: String, row: usize },

    #[error("tile {value} out of range for a {dimension}x{dimension} board")]
    TileOutOfRange { value: u32, dimension: usize },

    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u32 },

    #[error("twin is undefined for a {dimension}x{dimension} board (need at least 2x2)")]
    TwinUndefined { dimension: usize },

    #[error("search limit reached after {expansions} expansions")]
    SearchLimit { expansions: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "read board".to_string(),
            source,
        }
    }
}
