//! Square grid with a three-layer (EMPTY / MAX / MIN) indicator view.

use super::{Action, Cell};

/// A `size x size` board. Every cell holds exactly one `Cell` state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    /// Cached per-layer counts, indexed by `Cell::index`
    counts: [usize; 3],
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            counts: [size * size, 0, 0],
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at (row, col); `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Get the cell at (row, col). Panics when out of bounds.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Empty)
    }

    /// Indicator for one layer: true iff the cell is in state `layer`
    #[inline]
    #[must_use]
    pub fn layer(&self, layer: Cell, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(layer)
    }

    /// Number of cells in state `layer`
    #[inline]
    #[must_use]
    pub fn layer_count(&self, layer: Cell) -> usize {
        self.counts[layer.index()]
    }

    #[inline]
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.layer_count(Cell::Empty)
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Overwrite a cell, keeping layer counts consistent
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = row * self.size + col;
        let old = self.cells[idx];
        self.counts[old.index()] -= 1;
        self.counts[cell.index()] += 1;
        self.cells[idx] = cell;
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(move |(i, _)| Action(i / self.size, i % self.size))
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.max(1))
    }
}
