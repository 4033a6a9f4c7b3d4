//! Error type shared by the engine, the seeding helpers and the terminal front end.

/// Errors that can occur while building or driving a board.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A board needs at least one row and one column, and its padded
    /// buffer must fit in memory addressing.
    #[error("invalid board dimensions {rows}x{cols}: both must be positive and addressable")]
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },

    /// A write addressed a cell outside the interior.
    #[error("cell ({x}, {y}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        /// 1-based row.
        x: usize,
        /// 1-based column.
        y: usize,
        /// Number of rows of the board.
        rows: usize,
        /// Number of columns of the board.
        cols: usize,
    },

    /// Seed input (RLE data or a coordinate line) could not be parsed.
    #[error("malformed pattern: {0}")]
    Pattern(String),

    /// Terminal or stdin failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
