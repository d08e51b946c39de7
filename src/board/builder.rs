//! Fluent builder for constructing positions.
//!
//! Allows creating positions stone by stone rather than replaying a move
//! sequence or parsing a diagram.
//!
//! # Example
//! ```
//! use gomoku_minimax::board::{Action, GameStateBuilder, Player};
//!
//! let state = GameStateBuilder::new(5, 4)
//!     .stone(Action(2, 0), Player::Max)
//!     .stone(Action(4, 4), Player::Min)
//!     .build()
//!     .unwrap();
//! assert!(state.is_max_turn());
//! ```

use super::error::PositionError;
use super::{Action, Board, Cell, GameState, Player};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    board_size: usize,
    win_size: usize,
    stones: Vec<(Action, Player)>,
}

impl GameStateBuilder {
    /// Create a builder for an empty `board_size x board_size` board.
    #[must_use]
    pub fn new(board_size: usize, win_size: usize) -> Self {
        GameStateBuilder {
            board_size,
            win_size,
            stones: Vec::new(),
        }
    }

    /// Place a stone. Placing two stones on one cell fails in `build()`.
    #[must_use]
    pub fn stone(mut self, action: Action, player: Player) -> Self {
        self.stones.push((action, player));
        self
    }

    /// Place several stones for one player.
    #[must_use]
    pub fn stones<I>(self, actions: I, player: Player) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .fold(self, |builder, action| builder.stone(action, player))
    }

    /// Remove every stone placed on a cell.
    #[must_use]
    pub fn clear(mut self, action: Action) -> Self {
        self.stones.retain(|(a, _)| *a != action);
        self
    }

    /// Build the position.
    ///
    /// Fails if a stone is off the board or on an occupied cell, the window
    /// length is zero, or the stone counts could not arise from alternating
    /// play starting with MAX.
    pub fn build(self) -> Result<GameState, PositionError> {
        if self.win_size == 0 {
            return Err(PositionError::ZeroWinSize);
        }
        let mut board = Board::new(self.board_size);
        for (action, player) in self.stones {
            let (row, col) = (action.row(), action.col());
            match board.get(row, col) {
                None => {
                    return Err(PositionError::OutOfBounds {
                        row,
                        col,
                        board_size: self.board_size,
                    });
                }
                Some(Cell::Empty) => {}
                Some(_) => return Err(PositionError::Occupied { row, col }),
            }
            board.set(action.row(), action.col(), player.stone());
        }
        validate_counts(&board)?;
        Ok(GameState::from_board(board, self.win_size))
    }
}

/// MIN stones must equal MAX stones (MAX to move) or MAX - 1 (MIN to move).
pub(crate) fn validate_counts(board: &Board) -> Result<(), PositionError> {
    let max = board.layer_count(Cell::Max);
    let min = board.layer_count(Cell::Min);
    if min == max || min + 1 == max {
        Ok(())
    } else {
        Err(PositionError::BadStoneCounts { max, min })
    }
}
