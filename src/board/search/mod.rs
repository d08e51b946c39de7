//! Search module implementing depth-bounded minimax with alpha-beta pruning.
//!
//! Features:
//! - Closed-form detection of immediate wins and forced losses at every node
//! - Horizon cutoff for nodes that cannot reach a terminal state in time
//! - Move ordering by pattern pressure with an injectable tie-break
//! - Alpha-beta pruning with pass-by-value bounds

mod constants;
mod horizon;
mod minimax;
mod move_order;
mod params;
mod resolve;
mod terminal;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::SearchError;
use super::{Action, GameState};

pub use constants::{DEFAULT_BOARD_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_WIN_SIZE, SCORE_INFINITY};
pub use horizon::minimal_plies_to_terminal;
pub(crate) use minimax::SearchContext;
pub use move_order::{rank_actions, BoardOrder, RandomTieBreak, TieBreak};
pub use params::SearchParams;
pub use resolve::resolve;
pub use terminal::{evaluate, Verdict, VerdictKind};

/// Statistics tracked during one root search. Observational only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    /// Nodes answered by an immediate win or forced-loss verdict
    pub tactical_hits: u64,
    /// Nodes pruned because no terminal state was within the remaining depth
    pub horizon_cutoffs: u64,
    /// Alpha-beta cutoffs at either side
    pub beta_cutoffs: u64,
}

/// Result of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The best action found; `None` only for finished positions
    pub action: Option<Action>,
    /// Minimax value from MAX's point of view
    pub score: i32,
    pub stats: SearchStats,
}

/// The move-selection agent.
///
/// # Example
/// ```
/// use gomoku_minimax::board::{Action, Agent, GameState, SearchParams};
///
/// let params = SearchParams::new(5, 4, 4).unwrap().with_seed(1);
/// let mut agent = Agent::new(params);
/// let state: GameState = "win=4
///     .....
///     ....O
///     XXX..
///     .....
///     O.O..".parse().unwrap();
/// assert_eq!(agent.select_move(&state), Ok(Action(2, 3)));
/// ```
#[derive(Clone, Debug)]
pub struct Agent<T = RandomTieBreak<StdRng>> {
    params: SearchParams,
    tie_break: T,
}

impl Agent {
    /// Agent with a random tie-break, seeded from `params.seed` when set.
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Agent {
            params,
            tie_break: RandomTieBreak(rng),
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl<T: TieBreak> Agent<T> {
    /// Agent with a caller-supplied tie-break source.
    #[must_use]
    pub fn with_tie_break(params: SearchParams, tie_break: T) -> Self {
        Agent { params, tie_break }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Run the search on `state` to `max_depth` plies.
    pub fn decide(&mut self, state: &GameState, max_depth: u32) -> SearchOutcome {
        if state.board_size() != self.params.board_size || state.win_size() != self.params.win_size
        {
            warn!(
                "state is {}x{} win {}, agent configured for {}x{} win {}",
                state.board_size(),
                state.board_size(),
                state.win_size(),
                self.params.board_size,
                self.params.board_size,
                self.params.win_size
            );
        }

        let mut ctx = SearchContext::new(&mut self.tie_break);
        let (score, action) = ctx.minimax(state, max_depth, -SCORE_INFINITY, SCORE_INFINITY);
        let stats = ctx.stats;
        debug!(
            "depth {max_depth}: action {action:?} score {score} nodes {} tactical {} horizon {} cutoffs {}",
            stats.nodes, stats.tactical_hits, stats.horizon_cutoffs, stats.beta_cutoffs
        );

        SearchOutcome {
            action,
            score,
            stats,
        }
    }

    /// Choose a legal move for the side to move at the configured depth.
    ///
    /// A search result that is not currently legal is replaced by the first
    /// legal action. Fails only when the board has no empty cell.
    pub fn select_move(&mut self, state: &GameState) -> Result<Action, SearchError> {
        let outcome = self.decide(state, self.params.max_depth);
        match outcome.action {
            Some(action) if state.is_legal(action) => Ok(action),
            other => {
                debug!("search returned {other:?}, falling back to first legal action");
                state
                    .valid_actions()
                    .first()
                    .copied()
                    .ok_or(SearchError::NoLegalMoves)
            }
        }
    }
}
