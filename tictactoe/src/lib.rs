//! Two-player tic-tac-toe played on a labeled grid.
//!
//! Players name cells with a row letter and a column number, such as `"b2"`. The
//! [`coordinate`] module turns those labels into positions in the rendered
//! [`board`], the [`game`] module tracks turns, open cells and three-in-a-row, and
//! [`session`] runs a whole game over any pair of text streams.
//!
//! ```no_run
//! use std::io;
//!
//! let stdin = io::stdin();
//! let stdout = io::stdout();
//! let mut session = tictactoe::Session::new(stdin.lock(), stdout.lock());
//! session.run()?;
//! # Ok::<(), io::Error>(())
//! ```

pub mod board;
pub mod coordinate;
pub mod game;
pub mod session;

pub use crate::{
    board::{Board, GridPosition, Mark},
    coordinate::{Coordinate, CoordinateMap, InvalidCoordinateError, InvalidCoordinateReason},
    game::{Game, GameState, MoveOutcome, PlayError, Player, Seat},
    session::{Outcome, Session},
};
