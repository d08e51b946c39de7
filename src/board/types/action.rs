//! Board coordinates and moves.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A move: the (row, column) of the cell to place a stone on.
///
/// An action is legal iff the referenced cell is empty in the state it is
/// applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Action(pub usize, pub usize); // (row, column)

impl Action {
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Row-major index on a board of the given size
    #[inline]
    #[must_use]
    pub const fn as_index(self, board_size: usize) -> usize {
        self.0 * board_size + self.1
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Action(row, col)
    }
}
