//! Line orientations along which windows are counted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four line directions of a window.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Top-left to bottom-right
    DiagDownRight,
    /// Top-right to bottom-left
    DiagDownLeft,
}

impl Orientation {
    /// All orientations in scan order
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagDownRight,
        Orientation::DiagDownLeft,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
            Orientation::DiagDownRight => 2,
            Orientation::DiagDownLeft => 3,
        }
    }

    /// (row, column) step from one window cell to the next
    #[inline]
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagDownRight => (1, 1),
            Orientation::DiagDownLeft => (1, -1),
        }
    }

    /// Cell at `offset` steps from the window origin, if on the board.
    #[inline]
    #[must_use]
    pub fn cell_at(
        self,
        row: usize,
        col: usize,
        offset: usize,
        board_size: usize,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = self.step();
        let r = row as isize + dr * offset as isize;
        let c = col as isize + dc * offset as isize;
        let n = board_size as isize;
        if (0..n).contains(&r) && (0..n).contains(&c) {
            Some((r as usize, c as usize))
        } else {
            None
        }
    }

    /// Whether a window of `win_size` cells starting at (row, col) fits.
    #[inline]
    #[must_use]
    pub fn fits(self, row: usize, col: usize, win_size: usize, board_size: usize) -> bool {
        win_size > 0 && self.cell_at(row, col, win_size - 1, board_size).is_some()
    }
}
