//! Three-in-a-row detection over the logical board.

use crate::board::{Cells, Mark};

/// A row, column or diagonal of three logical cells.
pub type Triplet = [Option<Mark>; 3];

/// Collect every line that can win: the three rows, then the three columns, then the
/// main diagonal and the anti-diagonal (read bottom-left to top-right).
pub fn triplets(cells: &Cells) -> [Triplet; 8] {
    let column = |c: usize| [cells[0][c], cells[1][c], cells[2][c]];
    [
        cells[0],
        cells[1],
        cells[2],
        column(0),
        column(1),
        column(2),
        [cells[0][0], cells[1][1], cells[2][2]],
        [cells[2][0], cells[1][1], cells[0][2]],
    ]
}

/// Returns true if any line is filled entirely with `mark`.
pub fn is_winner(cells: &Cells, mark: Mark) -> bool {
    triplets(cells)
        .iter()
        .any(|triplet| triplet.iter().all(|&cell| cell == Some(mark)))
}

/// Get the mark that has completed a line, if either has.
pub fn winner(cells: &Cells) -> Option<Mark> {
    Mark::ALL.iter().copied().find(|&mark| is_winner(cells, mark))
}
