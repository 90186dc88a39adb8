/// The position of a glyph in the rendered grid, including legend and divider slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridPosition {
    /// Index of the grid row, counting the legend row as row 0.
    pub row: usize,
    /// Index of the glyph within its row.
    pub column: usize,
}

impl GridPosition {
    /// Construct a [`GridPosition`] from the given `row` and `column`.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for GridPosition {
    /// Construct a [`GridPosition`] from the given `(row, column)` pair.
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<GridPosition> for (usize, usize) {
    /// Convert the [`GridPosition`] into a `(row, column)` pair.
    fn from(pos: GridPosition) -> Self {
        (pos.row, pos.column)
    }
}
