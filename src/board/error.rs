//! Error types for position construction, configuration and search.

use std::fmt;

use super::Action;

/// Error type for building or parsing positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Diagram contains no rows
    Empty,
    /// A row's length differs from the first row's
    RaggedRow { row: usize, len: usize, expected: usize },
    /// Diagram has a different number of rows than columns
    NotSquare { rows: usize, cols: usize },
    /// Invalid cell character in a diagram
    InvalidCell { char: char },
    /// Coordinate outside the board
    OutOfBounds { row: usize, col: usize, board_size: usize },
    /// Cell already holds a stone
    Occupied { row: usize, col: usize },
    /// Stone counts do not correspond to alternating play from MAX
    BadStoneCounts { max: usize, min: usize },
    /// Window length must be at least 1
    ZeroWinSize,
    /// `win=` header value is not a number
    InvalidWinHeader { value: String },
    /// Action is not legal in the position it was applied to
    IllegalAction { action: Action },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::Empty => write!(f, "Board diagram has no rows"),
            PositionError::RaggedRow { row, len, expected } => {
                write!(f, "Row {row} has {len} cells, expected {expected}")
            }
            PositionError::NotSquare { rows, cols } => {
                write!(f, "Board must be square, found {rows} rows and {cols} columns")
            }
            PositionError::InvalidCell { char } => {
                write!(f, "Invalid cell character '{char}' in diagram")
            }
            PositionError::OutOfBounds {
                row,
                col,
                board_size,
            } => {
                write!(f, "Cell ({row}, {col}) is outside a {board_size}x{board_size} board")
            }
            PositionError::Occupied { row, col } => {
                write!(f, "Cell ({row}, {col}) is already occupied")
            }
            PositionError::BadStoneCounts { max, min } => {
                write!(
                    f,
                    "Invalid stone counts: {max} MAX and {min} MIN (MIN must equal MAX or MAX - 1)"
                )
            }
            PositionError::ZeroWinSize => write!(f, "Win size must be at least 1"),
            PositionError::InvalidWinHeader { value } => {
                write!(f, "Invalid win size '{value}' in diagram header")
            }
            PositionError::IllegalAction { action } => {
                write!(f, "Illegal action {action}")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for invalid search configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size must be at least 1
    ZeroBoardSize,
    /// Win size must be at least 1
    ZeroWinSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBoardSize => write!(f, "Board size must be at least 1"),
            ConfigError::ZeroWinSize => write!(f, "Win size must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error type for move selection failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The position has no empty cell; a full board was passed as playable
    NoLegalMoves,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves => write!(f, "No legal moves: the board is full"),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_error_invalid_cell() {
        let err = PositionError::InvalidCell { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_position_error_ragged_row() {
        let err = PositionError::RaggedRow {
            row: 2,
            len: 4,
            expected: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains('2'));
        assert!(msg.contains('4'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_position_error_illegal_action() {
        let err = PositionError::IllegalAction {
            action: Action(1, 3),
        };
        assert!(err.to_string().contains("(1, 3)"));
    }

    #[test]
    fn test_position_error_win_header() {
        let err = PositionError::InvalidWinHeader {
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("'abc'"));
        assert!(PositionError::ZeroWinSize.to_string().contains("at least 1"));
    }

    #[test]
    fn test_position_error_equality() {
        let err1 = PositionError::Occupied { row: 0, col: 1 };
        let err2 = PositionError::Occupied { row: 0, col: 1 };
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_config_error_display() {
        assert!(ConfigError::ZeroBoardSize.to_string().contains("Board size"));
        assert!(ConfigError::ZeroWinSize.to_string().contains("Win size"));
    }

    #[test]
    fn test_search_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SearchError::NoLegalMoves);
        assert!(err.to_string().contains("full"));
    }
}
