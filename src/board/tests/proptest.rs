//! Property-based tests using proptest.

use proptest::prelude::*;

use super::{exhaustive_minimax, random_state};
use crate::board::search::{
    minimal_plies_to_terminal, BoardOrder, SearchContext, SCORE_INFINITY,
};
use crate::board::{Agent, PatternCounts, SearchError, SearchParams};

/// Strategy to generate (board_size, win_size), including boards smaller
/// than the window
fn dims_strategy() -> impl Strategy<Value = (usize, usize)> {
    (3..=5usize, 2..=4usize)
}

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    0..=25usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Property: every materialized window tallies exactly win_size cells
    #[test]
    fn prop_window_counts_sum_to_win_size(
        (size, win) in dims_strategy(),
        moves in move_count_strategy(),
        seed in seed_strategy(),
    ) {
        let state = random_state(size, win, moves, seed);
        for window in state.corr().windows() {
            prop_assert_eq!(window.counts.total(), win);
        }
        if size < win {
            prop_assert!(state.corr().is_empty());
        }
    }

    /// Property: pattern counting is a pure function of the board
    #[test]
    fn prop_pattern_counts_idempotent(
        (size, win) in dims_strategy(),
        moves in move_count_strategy(),
        seed in seed_strategy(),
    ) {
        let state = random_state(size, win, moves, seed);
        let first = PatternCounts::compute(state.board(), win);
        let second = PatternCounts::compute(state.board(), win);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, state.corr());
    }

    /// Property: the horizon never exceeds the number of empty cells
    #[test]
    fn prop_horizon_bounded_by_empties(
        (size, win) in dims_strategy(),
        moves in move_count_strategy(),
        seed in seed_strategy(),
    ) {
        let state = random_state(size, win, moves, seed);
        prop_assert!(minimal_plies_to_terminal(&state) <= state.board().empty_count());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: select_move always returns a currently legal action
    #[test]
    fn prop_select_move_is_legal(
        (size, win) in dims_strategy(),
        moves in move_count_strategy(),
        seed in seed_strategy(),
        depth in 0..=2u32,
    ) {
        let state = random_state(size, win, moves, seed);
        let params = SearchParams::new(size, win, depth).unwrap().with_seed(seed);
        let result = Agent::new(params).select_move(&state);
        if state.board().is_full() {
            prop_assert_eq!(result, Err(SearchError::NoLegalMoves));
        } else {
            let action = result.unwrap();
            prop_assert!(state.valid_actions().contains(&action));
        }
    }

    /// Property: alpha-beta pruning changes the work, never the result
    #[test]
    fn prop_alphabeta_equivalence(
        moves in 1..=8usize,
        seed in seed_strategy(),
        depth in 0..=3u32,
    ) {
        let state = random_state(4, 3, moves, seed);
        let mut order = BoardOrder;
        let mut ctx = SearchContext::new(&mut order);
        let pruned = ctx.minimax(&state, depth, -SCORE_INFINITY, SCORE_INFINITY);
        prop_assert_eq!(pruned, exhaustive_minimax(&state, depth));
    }
}
