//! Immutable game state.

use std::sync::Arc;

use super::error::PositionError;
use super::{Action, Board, Cell, PatternCounts, Player};

/// A position: board, configured window length and its pattern counts.
///
/// States never mutate in place; `perform` returns a fresh child state.
/// The side to move is derived from stone counts: MAX moves when both sides
/// have placed the same number of stones.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    win_size: usize,
    corr: Arc<PatternCounts>,
}

impl GameState {
    /// Create the empty starting position
    #[must_use]
    pub fn new(board_size: usize, win_size: usize) -> Self {
        Self::from_board(Board::new(board_size), win_size)
    }

    /// Wrap an existing board, computing its pattern counts
    #[must_use]
    pub(crate) fn from_board(board: Board, win_size: usize) -> Self {
        let corr = Arc::new(PatternCounts::compute(&board, win_size));
        GameState {
            board,
            win_size,
            corr,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Precomputed window counts for this board
    #[inline]
    #[must_use]
    pub fn corr(&self) -> &PatternCounts {
        &self.corr
    }

    #[inline]
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    #[must_use]
    pub fn win_size(&self) -> usize {
        self.win_size
    }

    #[inline]
    #[must_use]
    pub fn is_max_turn(&self) -> bool {
        self.board.layer_count(Cell::Max) == self.board.layer_count(Cell::Min)
    }

    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Player {
        if self.is_max_turn() {
            Player::Max
        } else {
            Player::Min
        }
    }

    /// Legal actions in board-position (row-major) order
    #[must_use]
    pub fn valid_actions(&self) -> Vec<Action> {
        self.board.empty_cells().collect()
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, action: Action) -> bool {
        self.board.is_empty(action.row(), action.col())
    }

    /// Play `action` for the side to move, returning the child state.
    ///
    /// Returns an error if the cell is occupied or off the board.
    pub fn try_perform(&self, action: Action) -> Result<GameState, PositionError> {
        if !self.is_legal(action) {
            return Err(PositionError::IllegalAction { action });
        }
        let mut board = self.board.clone();
        board.set(action.row(), action.col(), self.current_player().stone());
        Ok(Self::from_board(board, self.win_size))
    }

    /// Play `action` for the side to move. Panics on an illegal action.
    #[must_use]
    pub fn perform(&self, action: Action) -> GameState {
        match self.try_perform(action) {
            Ok(child) => child,
            Err(err) => panic!("{err}"),
        }
    }

    /// The player owning a complete window, if any
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::BOTH
            .into_iter()
            .find(|&p| self.corr.has_complete(p))
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    /// Terminal score: `sign(winner) * (empties + 1)`, or 0 when nobody has won.
    ///
    /// Faster wins leave more empty cells and score higher in magnitude.
    #[must_use]
    pub fn current_score(&self) -> i32 {
        match self.winner() {
            Some(p) => p.sign() * (self.board.empty_count() as i32 + 1),
            None => 0,
        }
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.win_size == other.win_size && self.board == other.board
    }
}

impl Eq for GameState {}
