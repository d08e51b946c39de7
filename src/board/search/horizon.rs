//! Lower bound on the plies left before any terminal state is reachable.

use crate::board::{GameState, Player};

/// Minimal number of plies before the game could possibly end.
///
/// A window is completable by a player when it holds only that player's
/// stones and empty cells. Filling its `e` empties takes `2e - 1` plies when
/// that player is to move and `2e` otherwise. The result is the minimum over
/// all completable windows, capped by the empty-cell count; with no
/// completable window it is the empty-cell count itself.
#[must_use]
pub fn minimal_plies_to_terminal(state: &GameState) -> usize {
    let empties = state.board().empty_count();
    let win_size = state.win_size();
    let to_move = state.current_player();

    let fastest = state
        .corr()
        .windows()
        .flat_map(|w| {
            Player::BOTH.into_iter().filter_map(move |p| {
                if w.counts.empty + w.counts.of(p) != win_size {
                    return None;
                }
                plies_to_fill(w.counts.empty, p == to_move)
            })
        })
        .min();

    match fastest {
        Some(plies) => plies.min(empties),
        None => empties,
    }
}

/// Plies for one player to place `empty` stones, alternating with the
/// opponent. A window that is already complete yields `None` when its owner
/// is to move.
fn plies_to_fill(empty: usize, owner_to_move: bool) -> Option<usize> {
    let plies = 2 * empty;
    if owner_to_move {
        plies.checked_sub(1)
    } else {
        Some(plies)
    }
}
