//! The rendered tic-tac-toe board.
//!
//! The board is stored exactly as it is drawn: a 7x6 grid of glyphs where the column
//! legend occupies row 0, row 1 is a spacer, and the playable rows 2, 4 and 6 are
//! separated by horizontal rules. Within a playable row, the row legend takes column 0
//! and the playable cells sit in the odd columns between vertical dividers. Callers
//! never compute these indices themselves; they get a [`GridPosition`] from the
//! [`CoordinateMap`][crate::coordinate::CoordinateMap].

use std::fmt;

use self::grid::Grid;
pub use self::position::GridPosition;

mod grid;
mod position;

/// Number of rows in the rendered grid.
pub const HEIGHT: usize = 7;
/// Number of glyphs in each rendered row.
pub const WIDTH: usize = 6;

/// Indentation written before every rendered line.
const INDENT: &str = "  ";

/// Symbol a player places on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mark {
    /// Mark of the player who moves first.
    X,
    /// Mark of the player who moves second.
    O,
}

impl Mark {
    /// Both marks, in turn order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

/// Contents of a single slot of the rendered grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Glyph {
    /// Three columns of padding in the legend and spacer rows.
    Gutter,
    /// Two columns of padding at the start of a rule row.
    Margin,
    /// Column number above a playable column.
    ColumnLegend(u32),
    /// Row letter at the start of a playable row.
    RowLegend(char),
    /// A playable cell nobody has claimed yet.
    Empty,
    /// A playable cell claimed by a player.
    Mark(Mark),
    /// Vertical divider between two playable cells.
    Divider,
    /// Horizontal rule below a playable cell.
    Rule,
    /// Crossing of a horizontal rule and a vertical divider.
    Junction,
}

impl Glyph {
    /// The mark in this slot, if it holds one.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Glyph::Mark(mark) => Some(mark),
            _ => None,
        }
    }

    /// Glyph found at the given position of a freshly-built board.
    fn initial(pos: GridPosition) -> Self {
        let playable_row = pos.row >= 2 && pos.row % 2 == 0;
        let odd_column = pos.column % 2 == 1;
        match (pos.row, pos.column) {
            (0, column) if odd_column => Glyph::ColumnLegend((column as u32 + 1) / 2),
            (0, _) | (1, _) => Glyph::Gutter,
            (row, 0) if playable_row => {
                Glyph::RowLegend((b'a' + (row / 2 - 1) as u8) as char)
            }
            _ if playable_row && odd_column => Glyph::Empty,
            _ if playable_row => Glyph::Divider,
            (_, 0) => Glyph::Margin,
            _ if odd_column => Glyph::Rule,
            _ => Glyph::Junction,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Glyph::Gutter => f.pad("   "),
            Glyph::Margin => f.pad("  "),
            Glyph::ColumnLegend(column) => write!(f, "{}", column),
            Glyph::RowLegend(row) => write!(f, "{:<3}", row),
            Glyph::Empty => f.pad(" "),
            Glyph::Mark(mark) => fmt::Display::fmt(mark, f),
            Glyph::Divider => f.pad(" | "),
            Glyph::Rule => f.pad("---"),
            Glyph::Junction => f.pad("+"),
        }
    }
}

/// Logical 3x3 view of the playable cells, indexed `[row][column]`.
pub type Cells = [[Option<Mark>; 3]; 3];

/// The board both players share.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid<Glyph>,
}

impl Board {
    /// Build an empty board with legends and dividers in place.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(HEIGHT, WIDTH, Glyph::initial),
        }
    }

    /// Get the glyph at the given position, or `None` if it is outside the grid.
    pub fn get(&self, pos: GridPosition) -> Option<Glyph> {
        self.grid.get(pos).copied()
    }

    /// Overwrite the glyph at the given position with a mark.
    ///
    /// No gameplay checks happen here: the position is expected to come from the
    /// [`CoordinateMap`][crate::coordinate::CoordinateMap]. Panics if the position is
    /// outside the grid.
    pub fn set(&mut self, pos: GridPosition, mark: Mark) {
        self.grid[pos] = Glyph::Mark(mark);
    }

    /// Read the marks out of the playable rows and columns, dropping legends and
    /// dividers.
    pub fn cells(&self) -> Cells {
        let mut cells = [[None; 3]; 3];
        let playable_rows = self.grid.rows().skip(2).step_by(2);
        for (logical, row) in cells.iter_mut().zip(playable_rows) {
            let playable = row.iter().skip(1).step_by(2);
            for (cell, glyph) in logical.iter_mut().zip(playable) {
                *cell = glyph.mark();
            }
        }
        cells
    }

    /// Count the marks placed so far.
    pub fn mark_count(&self) -> usize {
        self.grid.iter().filter(|glyph| glyph.mark().is_some()).count()
    }

    /// Render the board as display lines, top to bottom.
    pub fn render(&self) -> Vec<String> {
        self.grid
            .rows()
            .map(|row| {
                let body: String = row.iter().map(ToString::to_string).collect();
                format!("{}{}", INDENT, body)
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
