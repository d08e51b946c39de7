//! Search constants.

// ============================================================================
// SCORE BOUNDS
// ============================================================================

/// Bound used for the initial alpha-beta window. Real scores never exceed
/// `board_size^2 + 1` in magnitude.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// Default search depth in plies
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Default board side length
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Default window length
pub const DEFAULT_WIN_SIZE: usize = 5;
