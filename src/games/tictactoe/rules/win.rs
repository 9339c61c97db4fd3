//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Every winning line: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [
        Position::from_parts(0, 0),
        Position::from_parts(0, 1),
        Position::from_parts(0, 2),
    ],
    [
        Position::from_parts(1, 0),
        Position::from_parts(1, 1),
        Position::from_parts(1, 2),
    ],
    [
        Position::from_parts(2, 0),
        Position::from_parts(2, 1),
        Position::from_parts(2, 2),
    ],
    // Columns
    [
        Position::from_parts(0, 0),
        Position::from_parts(1, 0),
        Position::from_parts(2, 0),
    ],
    [
        Position::from_parts(0, 1),
        Position::from_parts(1, 1),
        Position::from_parts(2, 1),
    ],
    [
        Position::from_parts(0, 2),
        Position::from_parts(1, 2),
        Position::from_parts(2, 2),
    ],
    // Diagonals
    [
        Position::from_parts(0, 0),
        Position::from_parts(1, 1),
        Position::from_parts(2, 2),
    ],
    [
        Position::from_parts(0, 2),
        Position::from_parts(1, 1),
        Position::from_parts(2, 0),
    ],
];

/// Checks whether `player` holds a full row, column or diagonal.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}
