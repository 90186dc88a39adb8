//! Errors produced while interpreting a coordinate.

use thiserror::Error;

/// Reason why some input could not be used as a move.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidCoordinateReason {
    /// The input was not a row letter followed by a column number.
    #[error("expected a row letter followed by a column number")]
    Malformed,
    /// The row letter or column number does not name a cell on the board.
    #[error("no such cell on the board")]
    OutOfRange,
    /// The cell has already been claimed.
    #[error("the cell is already occupied")]
    Occupied,
}

/// Error returned when input does not name an available cell.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid coordinate {input:?}: {reason}")]
pub struct InvalidCoordinateError {
    /// Why the input was rejected.
    reason: InvalidCoordinateReason,

    /// The rejected input, trimmed.
    input: String,
}

impl InvalidCoordinateError {
    /// Construct an error with the given reason for the given input.
    pub(crate) fn new(reason: InvalidCoordinateReason, input: impl Into<String>) -> Self {
        Self {
            reason,
            input: input.into(),
        }
    }

    /// Get the reason the input was rejected.
    pub fn reason(&self) -> InvalidCoordinateReason {
        self.reason
    }

    /// Get the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}
