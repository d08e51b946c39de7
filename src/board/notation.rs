//! Text diagrams for positions.
//!
//! One line per row, top to bottom: `.` empty, `X` MAX, `O` MIN. Spaces
//! inside a row are ignored. An optional first line `win=<n>` sets the
//! window length; `FromStr` falls back to `DEFAULT_WIN_SIZE` without it.
//!
//! ```text
//! win=4
//! . . . . .
//! . . . . O
//! X X X . .
//! . . . . .
//! O . O . .
//! ```

use std::fmt;
use std::str::FromStr;

use super::builder::validate_counts;
use super::error::PositionError;
use super::search::DEFAULT_WIN_SIZE;
use super::{Board, Cell, GameState};

impl GameState {
    /// Parse a diagram with an explicit window length.
    ///
    /// A `win=` header in `diagram`, if present, takes precedence.
    pub fn try_from_diagram(diagram: &str, win_size: usize) -> Result<Self, PositionError> {
        let mut win_size = win_size;
        let mut rows: Vec<Vec<Cell>> = Vec::new();

        for line in diagram.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(value) = line.strip_prefix("win=") {
                let value = value.trim();
                win_size = value
                    .parse()
                    .map_err(|_| PositionError::InvalidWinHeader {
                        value: value.to_string(),
                    })?;
                continue;
            }
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| Cell::from_char(c).ok_or(PositionError::InvalidCell { char: c }))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        if win_size == 0 {
            return Err(PositionError::ZeroWinSize);
        }
        let Some(first) = rows.first() else {
            return Err(PositionError::Empty);
        };
        let cols = first.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(PositionError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: cols,
                });
            }
        }
        if rows.len() != cols {
            return Err(PositionError::NotSquare {
                rows: rows.len(),
                cols,
            });
        }

        let mut board = Board::new(cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell != Cell::Empty {
                    board.set(r, c, cell);
                }
            }
        }
        validate_counts(&board)?;
        Ok(GameState::from_board(board, win_size))
    }

    /// Render the position as a diagram, including the `win=` header.
    #[must_use]
    pub fn to_diagram(&self) -> String {
        self.to_string()
    }
}

impl FromStr for GameState {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::try_from_diagram(s, DEFAULT_WIN_SIZE)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "win={}", self.win_size())?;
        for row in self.board().rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
