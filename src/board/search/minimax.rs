//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Per node:
//! 1. Tactical verdict (immediate win / forced loss) returns at once
//! 2. Finished games return their terminal score
//! 3. Depth 0 returns the current score and the top-ranked move
//! 4. Horizon cutoff: a node that cannot reach a terminal state within the
//!    remaining depth is a draw at this depth
//! 5. Otherwise recurse over ranked moves with alpha-beta pruning

use log::trace;

use crate::board::{Action, GameState};

use super::constants::SCORE_INFINITY;
use super::horizon::minimal_plies_to_terminal;
use super::move_order::{rank_actions, TieBreak};
use super::terminal::evaluate;
use super::SearchStats;

/// Search context for a single root call. Holds only the tie-break source
/// and observational counters; alpha, beta and depth travel by value.
pub(crate) struct SearchContext<'a, T: TieBreak + ?Sized> {
    pub tie_break: &'a mut T,
    pub stats: SearchStats,
}

impl<'a, T: TieBreak + ?Sized> SearchContext<'a, T> {
    pub fn new(tie_break: &'a mut T) -> Self {
        SearchContext {
            tie_break,
            stats: SearchStats::default(),
        }
    }

    /// Score `state` to `depth` plies, returning the value and best action.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Action>) {
        self.stats.nodes += 1;

        let verdict = evaluate(state);
        if verdict.score != 0 {
            self.stats.tactical_hits += 1;
            trace!(
                "tactical {:?} at depth {depth}: score {} action {:?}",
                verdict.kind,
                verdict.score,
                verdict.action
            );
            return (verdict.score, verdict.action);
        }

        if state.is_game_over() {
            return (state.current_score(), None);
        }

        let ranked = rank_actions(state, &mut *self.tie_break);
        let top = ranked.first().copied();

        if depth == 0 {
            return (state.current_score(), top);
        }

        let horizon = minimal_plies_to_terminal(state);
        if horizon > depth as usize {
            self.stats.horizon_cutoffs += 1;
            trace!("horizon cutoff: {horizon} plies needed, {depth} left");
            return (0, top);
        }

        let maximizing = state.is_max_turn();
        let mut value = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
        let mut best_action = None;

        for action in ranked {
            let Ok(child) = state.try_perform(action) else {
                continue;
            };
            let (utility, _) = self.minimax(&child, depth - 1, alpha, beta);

            if maximizing {
                if utility > value {
                    value = utility;
                    best_action = Some(action);
                }
                if value >= beta {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
                alpha = alpha.max(value);
            } else {
                if utility < value {
                    value = utility;
                    best_action = Some(action);
                }
                if value <= alpha {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
                beta = beta.min(value);
            }
        }

        (value, best_action)
    }
}
