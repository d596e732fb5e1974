//! Error type for coordinates, board sizes and move notation.

use thiserror::Error;

/// Errors raised when building squares or boards from invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Board size is even or outside the supported range.
    #[error("invalid board size {0}: must be odd and between 3 and 27")]
    InvalidBoardSize(usize),

    /// Column does not fit on the board.
    #[error("column {col} out of range for a {size}x{size} board")]
    ColumnOutOfRange { col: usize, size: usize },

    /// Row does not fit on the board.
    #[error("row {row} out of range for a {size}x{size} board")]
    RowOutOfRange { row: usize, size: usize },

    /// Index lies outside the padded grid.
    #[error("index {index} out of range for a {size}x{size} board")]
    IndexOutOfRange { index: isize, size: usize },

    /// Text could not be read as a coordinate or move.
    #[error("'{0}' is invalid format")]
    InvalidNotation(String),
}
