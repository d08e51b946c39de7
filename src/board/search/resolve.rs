//! Resolve a pattern window to a concrete cell.

use crate::board::{Action, GameState, Orientation};

/// First empty cell of the window starting at (row, col), scanning in the
/// window's own direction. `None` if the window has no empty cell or does
/// not fit on the board.
#[must_use]
pub fn resolve(
    state: &GameState,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> Option<Action> {
    let n = state.board_size();
    let board = state.board();
    (0..state.win_size())
        .map_while(|k| orientation.cell_at(row, col, k, n))
        .find(|&(r, c)| board.is_empty(r, c))
        .map(Action::from)
}
