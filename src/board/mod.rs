//! Board representation, game state and the move-selection search.
//!
//! Positions are immutable values: every move produces a fresh child state
//! carrying its own sliding-window pattern counts.
//!
//! # Example
//! ```
//! use gomoku_minimax::board::{Agent, GameState, SearchParams};
//!
//! let params = SearchParams::new(7, 4, 2).unwrap().with_seed(42);
//! let mut agent = Agent::new(params);
//! let state = GameState::new(7, 4);
//! let action = agent.select_move(&state).unwrap();
//! assert!(state.is_legal(action));
//! ```

mod builder;
mod error;
mod grid;
mod notation;
mod patterns;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameStateBuilder;
pub use error::{ConfigError, PositionError, SearchError};
pub use grid::Board;
pub use patterns::{PatternCounts, Window, WindowCounts};
pub use state::GameState;
pub use types::{Action, Cell, Orientation, Player};

// Public API - search and configuration
pub use search::{Agent, SearchOutcome, SearchParams, SearchStats, DEFAULT_WIN_SIZE};
