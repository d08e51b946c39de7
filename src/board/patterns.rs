//! Sliding-window pattern counts.
//!
//! For every window of `win_size` consecutive cells along each of the four
//! orientations, tally how many cells are empty, MAX-owned and MIN-owned.
//! Windows that would run off the board are never materialized.

use super::{Board, Cell, Orientation, Player};

/// Occupancy tally of one window. `empty + max + min == win_size`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WindowCounts {
    pub empty: usize,
    pub max: usize,
    pub min: usize,
}

impl WindowCounts {
    /// Stones of `player` in the window
    #[inline]
    #[must_use]
    pub const fn of(self, player: Player) -> usize {
        match player {
            Player::Max => self.max,
            Player::Min => self.min,
        }
    }

    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.empty + self.max + self.min
    }
}

/// A materialized window: its orientation, origin and counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
    pub counts: WindowCounts,
}

/// Table of window counts indexed by (orientation, origin row, origin column).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternCounts {
    board_size: usize,
    win_size: usize,
    /// Dense per-orientation grids; `None` where no window starts
    table: [Vec<Option<WindowCounts>>; 4],
}

impl PatternCounts {
    /// Count every window on `board`.
    ///
    /// Produces an empty table when `board_size < win_size` or `win_size == 0`.
    #[must_use]
    pub fn compute(board: &Board, win_size: usize) -> Self {
        let n = board.size();
        let mut table: [Vec<Option<WindowCounts>>; 4] = Default::default();

        for orientation in Orientation::ALL {
            let grid = &mut table[orientation.index()];
            grid.resize(n * n, None);
            if win_size == 0 || n < win_size {
                continue;
            }
            for row in 0..n {
                for col in 0..n {
                    if !orientation.fits(row, col, win_size, n) {
                        continue;
                    }
                    let mut counts = WindowCounts::default();
                    for k in 0..win_size {
                        let Some((r, c)) = orientation.cell_at(row, col, k, n) else {
                            break;
                        };
                        match board.cell(r, c) {
                            Cell::Empty => counts.empty += 1,
                            Cell::Max => counts.max += 1,
                            Cell::Min => counts.min += 1,
                        }
                    }
                    grid[row * n + col] = Some(counts);
                }
            }
        }

        PatternCounts {
            board_size: n,
            win_size,
            table,
        }
    }

    #[inline]
    #[must_use]
    pub fn win_size(&self) -> usize {
        self.win_size
    }

    #[inline]
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Counts for the window starting at (row, col), if it exists
    #[inline]
    #[must_use]
    pub fn get(&self, orientation: Orientation, row: usize, col: usize) -> Option<WindowCounts> {
        if row >= self.board_size || col >= self.board_size {
            return None;
        }
        self.table[orientation.index()][row * self.board_size + col]
    }

    /// All windows in scan order: orientation, then row, then column.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        let n = self.board_size;
        Orientation::ALL.into_iter().flat_map(move |orientation| {
            self.table[orientation.index()]
                .iter()
                .enumerate()
                .filter_map(move |(i, counts)| {
                    counts.map(|counts| Window {
                        orientation,
                        row: i / n,
                        col: i % n,
                        counts,
                    })
                })
        })
    }

    /// Number of materialized windows
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.iter().flatten().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any window is fully owned by `player`
    #[must_use]
    pub fn has_complete(&self, player: Player) -> bool {
        self.windows()
            .any(|w| w.counts.of(player) == self.win_size)
    }

    /// Per-cell pressure: for each cell, the sum of MAX and MIN stones over
    /// every window passing through it. Row-major, `board_size^2` entries.
    #[must_use]
    pub fn pressure(&self) -> Vec<usize> {
        let n = self.board_size;
        let mut pressure = vec![0usize; n * n];
        for window in self.windows() {
            let stones = window.counts.max + window.counts.min;
            if stones == 0 {
                continue;
            }
            for k in 0..self.win_size {
                if let Some((r, c)) = window.orientation.cell_at(window.row, window.col, k, n) {
                    pressure[r * n + c] += stones;
                }
            }
        }
        pressure
    }
}
