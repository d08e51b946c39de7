//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use gomoku_minimax::board::prelude::*;
//! ```

pub use super::{
    Action, Agent, Cell, GameState, GameStateBuilder, Player, PositionError, SearchError,
    SearchParams,
};
