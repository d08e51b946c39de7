//! Move ordering for search.
//!
//! Candidate moves are ranked by pattern pressure: for every empty cell,
//! the stones of both players summed over all windows through it. Equal
//! pressures are ordered by a tie-break key drawn from an injectable source.

use rand::RngCore;

use crate::board::{Action, GameState};

/// Source of tie-break keys among equally ranked moves.
pub trait TieBreak {
    fn next_key(&mut self) -> u64;
}

/// Random tie-break backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RandomTieBreak<R>(pub R);

impl<R: RngCore> TieBreak for RandomTieBreak<R> {
    #[inline]
    fn next_key(&mut self) -> u64 {
        self.0.next_u64()
    }
}

/// Deterministic tie-break: equal pressures stay in board-position order.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardOrder;

impl TieBreak for BoardOrder {
    #[inline]
    fn next_key(&mut self) -> u64 {
        0
    }
}

/// Legal actions, highest pressure first.
#[must_use]
pub fn rank_actions<T: TieBreak + ?Sized>(state: &GameState, tie_break: &mut T) -> Vec<Action> {
    let n = state.board_size();
    let pressure = state.corr().pressure();

    let mut scored: Vec<(usize, u64, Action)> = state
        .valid_actions()
        .into_iter()
        .map(|a| (pressure[a.as_index(n)], tie_break.next_key(), a))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, _, a)| a).collect()
}
