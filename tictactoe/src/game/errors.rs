//! Errors returned by [`Game`][super::Game].

use thiserror::Error;

use crate::{coordinate::InvalidCoordinateError, game::GameState};

/// Reason why a [`Game`][super::Game] operation was refused.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PlayError {
    /// The move did not name an available cell.
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinateError),

    /// A name was entered after both players were named.
    #[error("both players already have names, game is {0:?}")]
    NotAwaitingName(GameState),

    /// A move was attempted before both players were named or after the game ended.
    #[error("no move can be made while the game is {0:?}")]
    NotPlaying(GameState),
}

impl PlayError {
    /// Get the coordinate error if this error was caused by a bad move.
    pub fn invalid_coordinate(&self) -> Option<&InvalidCoordinateError> {
        match self {
            PlayError::InvalidCoordinate(err) => Some(err),
            _ => None,
        }
    }
}
