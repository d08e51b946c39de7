use crate::board::error::ConfigError;

use super::constants::{DEFAULT_BOARD_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_WIN_SIZE};

/// Agent configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub board_size: usize,
    pub win_size: usize,
    /// Search depth cutoff in plies
    pub max_depth: u32,
    /// Fixed tie-break seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            board_size: DEFAULT_BOARD_SIZE,
            win_size: DEFAULT_WIN_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: None,
        }
    }
}

impl SearchParams {
    /// Validated configuration. `board_size < win_size` is allowed; such a
    /// board simply has no winning windows.
    pub fn new(board_size: usize, win_size: usize, max_depth: u32) -> Result<Self, ConfigError> {
        if board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if win_size == 0 {
            return Err(ConfigError::ZeroWinSize);
        }
        Ok(SearchParams {
            board_size,
            win_size,
            max_depth,
            seed: None,
        })
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
