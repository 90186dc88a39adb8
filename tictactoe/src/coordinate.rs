//! Human-facing coordinates such as `"b2"` and their mapping onto the rendered grid.

use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::GridPosition;

pub use self::errors::{InvalidCoordinateError, InvalidCoordinateReason};

mod errors;

/// Row letters, top to bottom.
pub const ROW_LABELS: [char; 3] = ['a', 'b', 'c'];

/// Number of playable columns. Column numbers run from 1 to this value.
pub const COLUMN_COUNT: u32 = 3;

/// One of the nine playable cells, named by its row letter and column number.
///
/// Each variant is a single bit so a set of coordinates fits in a [`BitFlags`].
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u16)]
pub enum Coordinate {
    A1 = 0b000_000_001,
    A2 = 0b000_000_010,
    A3 = 0b000_000_100,
    B1 = 0b000_001_000,
    B2 = 0b000_010_000,
    B3 = 0b000_100_000,
    C1 = 0b001_000_000,
    C2 = 0b010_000_000,
    C3 = 0b100_000_000,
}

impl Coordinate {
    /// Every coordinate in label order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::A1,
        Coordinate::A2,
        Coordinate::A3,
        Coordinate::B1,
        Coordinate::B2,
        Coordinate::B3,
        Coordinate::C1,
        Coordinate::C2,
        Coordinate::C3,
    ];

    /// Look up the coordinate for a row letter and a 1-based column number.
    pub fn from_labels(row: char, column: u32) -> Result<Self, InvalidCoordinateError> {
        let row_index = ROW_LABELS.iter().position(|&label| label == row);
        match row_index {
            Some(r) if (1..=COLUMN_COUNT).contains(&column) => {
                Ok(Self::ALL[r * COLUMN_COUNT as usize + (column - 1) as usize])
            }
            _ => Err(InvalidCoordinateError::new(
                InvalidCoordinateReason::OutOfRange,
                format!("{}{}", row, column),
            )),
        }
    }

    /// Position of this coordinate in [`Coordinate::ALL`].
    fn index(self) -> usize {
        (self as u16).trailing_zeros() as usize
    }

    /// 0-based row of this coordinate in the logical 3x3 board.
    pub fn row(self) -> usize {
        self.index() / COLUMN_COUNT as usize
    }

    /// 0-based column of this coordinate in the logical 3x3 board.
    pub fn column(self) -> usize {
        self.index() % COLUMN_COUNT as usize
    }

    /// The row letter, `'a'` through `'c'`.
    pub fn row_label(self) -> char {
        ROW_LABELS[self.row()]
    }

    /// The 1-based column number.
    pub fn column_index(self) -> u32 {
        self.column() as u32 + 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.row_label(), self.column_index())
    }
}

impl FromStr for Coordinate {
    type Err = InvalidCoordinateError;

    /// Parse a label like `"b2"`. Surrounding whitespace is ignored and the row letter
    /// may be upper case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static LABEL: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(?P<row>[a-z])(?P<column>[0-9]+)$").unwrap());

        let input = s.trim();
        let normalized = input.to_ascii_lowercase();
        let captures = LABEL.captures(&normalized).ok_or_else(|| {
            InvalidCoordinateError::new(InvalidCoordinateReason::Malformed, input)
        })?;
        let out_of_range =
            || InvalidCoordinateError::new(InvalidCoordinateReason::OutOfRange, input);
        let row = captures["row"].chars().next().ok_or_else(out_of_range)?;
        // Only a single digit names a column, so "a01" or "a10" is out of range.
        let column = match captures["column"].as_bytes() {
            &[digit] => u32::from(digit - b'0'),
            _ => return Err(out_of_range()),
        };
        Coordinate::from_labels(row, column).map_err(|_| out_of_range())
    }
}

/// Set of coordinates, such as the cells still open for play.
pub type CoordinateSet = BitFlags<Coordinate>;

/// Maps coordinates onto positions in the rendered grid.
///
/// Row letters advance the grid row by `stride` and column numbers advance the grid
/// column by `stride`, starting from `origin` for `a1`. The gaps are where the board
/// draws its dividers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CoordinateMap {
    /// Grid position of `a1`.
    origin: GridPosition,
    /// Distance between neighbouring playable cells in the grid.
    stride: usize,
}

impl CoordinateMap {
    /// Map with the given origin for `a1` and spacing between cells.
    pub fn new(origin: GridPosition, stride: usize) -> Self {
        Self { origin, stride }
    }

    /// The map matching [`Board`][crate::board::Board]'s layout: `a1` at row 2, column
    /// 1, with one divider between neighbouring cells.
    pub fn standard() -> Self {
        Self::new(GridPosition::new(2, 1), 2)
    }

    /// Get the grid position of a coordinate.
    pub fn resolve(&self, coord: Coordinate) -> GridPosition {
        GridPosition::new(
            self.origin.row + coord.row() * self.stride,
            self.origin.column + coord.column() * self.stride,
        )
    }

    /// Get the grid position for a row letter and 1-based column number, failing if
    /// they do not name one of the nine cells.
    pub fn resolve_labels(
        &self,
        row: char,
        column: u32,
    ) -> Result<GridPosition, InvalidCoordinateError> {
        Coordinate::from_labels(row, column).map(|coord| self.resolve(coord))
    }

    /// Iterate every coordinate along with its grid position, in label order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Coordinate, GridPosition)> {
        Coordinate::ALL
            .iter()
            .map(move |&coord| (coord, self.resolve(coord)))
    }
}

impl Default for CoordinateMap {
    fn default() -> Self {
        Self::standard()
    }
}
