//! Move actions and contract errors for tic-tac-toe.

use super::{Player, Position};
use derive_more::{Display, Error};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Board axis named by an out-of-range error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Axis {
    /// Row index.
    #[display("row")]
    Row,
    /// Column index.
    #[display("column")]
    Column,
}

/// A broken precondition on the game model.
///
/// Interactive play never triggers these; they indicate a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A coordinate lies outside the board.
    #[display("{axis} {value} is outside the board (expected 0..3)")]
    OutOfRange {
        /// Which coordinate was wrong.
        axis: Axis,
        /// The rejected value.
        value: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {position} is already occupied by {occupant}")]
    SquareOccupied {
        /// The targeted square.
        position: Position,
        /// Who holds it.
        occupant: Player,
    },

    /// It's not this player's turn.
    #[display("It's {expected}'s turn, not {found}'s")]
    WrongPlayer {
        /// The player whose turn it is.
        expected: Player,
        /// The player that tried to move.
        found: Player,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
