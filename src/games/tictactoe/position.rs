//! Board coordinates for tic-tac-toe moves.

use super::action::{Axis, GameError};
use super::types::SIZE;
use tracing::instrument;

/// A validated square on the board.
///
/// Rows are labelled `A`..`C` and columns `1`..`3` when displayed, so the
/// top-left square prints as `A1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position, checking both coordinates are on the board.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfRange` naming the first offending axis.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, GameError> {
        if row >= SIZE {
            return Err(GameError::OutOfRange {
                axis: Axis::Row,
                value: row,
            });
        }
        if column >= SIZE {
            return Err(GameError::OutOfRange {
                axis: Axis::Column,
                value: column,
            });
        }
        Ok(Self { row, column })
    }

    /// Builds a position from coordinates already known to be in range.
    pub(crate) const fn from_parts(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Zero-based row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column index.
    pub fn column(self) -> usize {
        self.column
    }

    /// Row label (`A`, `B` or `C`).
    pub fn row_label(self) -> char {
        char::from(b'A' + self.row as u8)
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |column| Position::from_parts(row, column)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row_label(), self.column + 1)
    }
}
