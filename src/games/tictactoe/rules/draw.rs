//! Draw detection logic for tic-tac-toe.

use super::super::{AREA, Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|s| *s != Square::Empty)
}

/// Checks whether the given turn is the one that places the last mark.
///
/// Turns advance by exactly one per accepted move and squares are never
/// cleared, so turn `AREA` is the move that fills the board.
pub fn turn_fills_board(turn_number: usize) -> bool {
    turn_number == AREA
}
