//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use tracing::instrument;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// Number of squares on the board.
pub const AREA: usize = SIZE * SIZE;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is on the given 1-based turn.
    pub fn for_turn(turn_number: usize) -> Self {
        if turn_number % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Square {
    /// Empty square.
    #[default]
    #[display(" ")]
    Empty,
    /// Square occupied by a player.
    #[display("{_0}")]
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row()][pos.column()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns the squares row by row.
    pub fn rows(&self) -> &[[Square; SIZE]; SIZE] {
        &self.squares
    }

    pub(super) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.row()][pos.column()] = square;
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Every square was filled without a winner.
    Draw,
    /// A player quit before the game finished.
    Abandoned,
}

impl GameStatus {
    /// Returns true once the game can accept no more moves.
    pub fn is_done(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_alternates_by_turn() {
        assert_eq!(Player::for_turn(1), Player::X);
        assert_eq!(Player::for_turn(2), Player::O);
        assert_eq!(Player::for_turn(9), Player::X);
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::Empty.to_string(), " ");
        assert_eq!(Square::Occupied(Player::O).to_string(), "O");
    }

    #[test]
    fn test_board_set_and_get() {
        let mut board = Board::new();
        let center = Position::new(1, 1).unwrap();
        assert!(board.is_empty(center));

        board.set(center, Square::Occupied(Player::X));
        assert_eq!(board.get(center), Square::Occupied(Player::X));
        assert!(!board.is_empty(center));
    }
}
