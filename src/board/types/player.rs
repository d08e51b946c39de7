//! Player and cell types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides. MAX maximizes the score, MIN minimizes it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    Max,
    Min,
}

impl Player {
    /// Both players in index order (Max=0, Min=1)
    pub const BOTH: [Player; 2] = [Player::Max, Player::Min];

    /// Returns the opposite player
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Scoring sign (+1 for Max, -1 for Min)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Player::Max => 1,
            Player::Min => -1,
        }
    }

    /// The cell state a stone of this player occupies
    #[inline]
    #[must_use]
    pub const fn stone(self) -> Cell {
        match self {
            Player::Max => Cell::Max,
            Player::Min => Cell::Min,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Max => write!(f, "MAX"),
            Player::Min => write!(f, "MIN"),
        }
    }
}

/// Occupancy of a single board cell.
///
/// Exactly one of the three indicator layers is set for every cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Max,
    Min,
}

impl Cell {
    /// All layers in index order (Empty=0, Max=1, Min=2)
    pub const LAYERS: [Cell; 3] = [Cell::Empty, Cell::Max, Cell::Min];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Max => 1,
            Cell::Min => 2,
        }
    }

    /// Owner of the stone in this cell, if any
    #[inline]
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Max => Some(Player::Max),
            Cell::Min => Some(Player::Min),
        }
    }

    /// Parse a cell from its diagram character (`.`, `X`, `O`)
    #[must_use]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Max),
            'O' | 'o' => Some(Cell::Min),
            _ => None,
        }
    }

    /// Diagram character for this cell
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Max => 'X',
            Cell::Min => 'O',
        }
    }
}
