//! Deterministic move selection for generalized Gomoku.
//!
//! Two players alternate placing stones on a square board; the first to
//! complete an unbroken line of `win_size` stones wins. The [`board::Agent`]
//! picks a legal move with depth-bounded minimax and alpha-beta pruning,
//! short-circuited by closed-form win/loss detection and a horizon bound on
//! how soon the game could possibly end.

pub mod board;

pub use board::{Action, Agent, GameState, Player, SearchParams};
