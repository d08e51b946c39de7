//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Player` and `Cell` - sides and per-cell occupancy
//! - `Action` - a (row, column) move
//! - `Orientation` - the four window directions

mod action;
mod orientation;
mod player;

pub use action::Action;
pub use orientation::Orientation;
pub use player::{Cell, Player};
