//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `patterns.rs` - Pattern counting against a brute-force recount
//! - `search.rs` - Move selection, tactical shortcuts and pruning equivalence
//! - `proptest.rs` - Property-based tests

mod proptest;

use rand::prelude::*;

use super::search::{
    evaluate, minimal_plies_to_terminal, rank_actions, BoardOrder, SCORE_INFINITY,
};
use super::{Action, GameState};

/// Play `moves` random legal moves from the empty board, stopping early
/// once the game is over.
pub(super) fn random_state(size: usize, win: usize, moves: usize, seed: u64) -> GameState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new(size, win);
    for _ in 0..moves {
        if state.is_game_over() {
            break;
        }
        let actions = state.valid_actions();
        let action = actions[rng.gen_range(0..actions.len())];
        state = state.perform(action);
    }
    state
}

/// Plain minimax over the same node rules as the engine, without pruning.
pub(super) fn exhaustive_minimax(state: &GameState, depth: u32) -> (i32, Option<Action>) {
    let verdict = evaluate(state);
    if verdict.score != 0 {
        return (verdict.score, verdict.action);
    }
    if state.is_game_over() {
        return (state.current_score(), None);
    }
    let ranked = rank_actions(state, &mut BoardOrder);
    let top = ranked.first().copied();
    if depth == 0 {
        return (state.current_score(), top);
    }
    if minimal_plies_to_terminal(state) > depth as usize {
        return (0, top);
    }

    let maximizing = state.is_max_turn();
    let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
    let mut best_action = None;
    for action in ranked {
        let (value, _) = exhaustive_minimax(&state.perform(action), depth - 1);
        if (maximizing && value > best) || (!maximizing && value < best) {
            best = value;
            best_action = Some(action);
        }
    }
    (best, best_action)
}
