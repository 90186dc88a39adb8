//! Row-major backing storage for the board.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::GridPosition;

/// Fixed-size grid of glyphs, addressed by [`GridPosition`].
#[derive(Debug, Clone)]
pub(super) struct Grid<T> {
    /// Number of glyphs in each row.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cells in row-major order.
    cells: Box<[T]>,
}

impl<T> Grid<T> {
    /// Build a grid of the given size, asking `fill` for the initial contents of every
    /// position.
    pub(super) fn new(height: usize, width: usize, fill: impl FnMut(GridPosition) -> T) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |column| GridPosition::new(row, column)))
            .map(fill)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Convert a position to an index into `cells`, or `None` if it is out of bounds.
    #[inline]
    fn try_linearize(&self, pos: &GridPosition) -> Option<usize> {
        if pos.row < self.height && pos.column < self.width {
            Some(pos.row * self.width + pos.column)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`GridPosition`].
    pub(super) fn get<B: Borrow<GridPosition>>(&self, pos: B) -> Option<&T> {
        self.try_linearize(pos.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`GridPosition`].
    pub(super) fn get_mut<B: Borrow<GridPosition>>(&mut self, pos: B) -> Option<&mut T> {
        self.try_linearize(pos.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate the rows of the grid from top to bottom.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    /// Iterate every cell in row-major order.
    pub(super) fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T, B: Borrow<GridPosition>> Index<B> for Grid<T> {
    type Output = T;

    fn index(&self, pos: B) -> &Self::Output {
        self.get(pos).expect("grid position out of bounds")
    }
}

impl<T, B: Borrow<GridPosition>> IndexMut<B> for Grid<T> {
    fn index_mut(&mut self, pos: B) -> &mut Self::Output {
        self.get_mut(pos).expect("grid position out of bounds")
    }
}
