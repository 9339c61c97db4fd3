//! Game model for tic-tac-toe.
//!
//! The model owns the board, the turn counter and the game status. The
//! player to move is always derived from the turn number, so there is no
//! second field that could fall out of step with it.

use super::Position;
use super::action::{GameError, Move};
use super::rules;
use super::types::{Board, GameStatus, Player, SIZE, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn_number: usize,
    status: GameStatus,
}

impl Game {
    /// Creates a new game: empty board, turn 1, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn_number: 1,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the 1-based turn number, counting the pending move.
    pub fn turn_number(&self) -> usize {
        self.turn_number
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has been won, drawn or abandoned.
    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Number of rows on the board.
    pub fn row_count(&self) -> usize {
        SIZE
    }

    /// Number of columns on the board.
    pub fn column_count(&self) -> usize {
        SIZE
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn_number)
    }

    /// Returns the square at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfRange` if either coordinate is off the board.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Square, GameError> {
        Ok(self.board.get(Position::new(row, column)?))
    }

    /// Checks whether `player` holds a full row, column or diagonal.
    pub fn is_winner(&self, player: Player) -> bool {
        rules::is_winner(&self.board, player)
    }

    /// Checks whether the current turn is the one that fills the board.
    ///
    /// This is derived from the turn counter, not from counting squares,
    /// so it only means "tie" once play has actually reached that turn.
    pub fn is_tie(&self) -> bool {
        rules::turn_fills_board(self.turn_number)
    }

    /// Places the current player's mark at the given coordinates.
    ///
    /// # Errors
    ///
    /// See [`Game::place`].
    #[instrument(skip(self), fields(turn = self.turn_number))]
    pub fn apply_move(&mut self, row: usize, column: usize) -> Result<GameStatus, GameError> {
        self.set_cell(row, column, self.current_player())
    }

    /// Places `player`'s mark at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfRange` for coordinates off the board, and
    /// otherwise whatever [`Game::place`] rejects.
    #[instrument(skip(self), fields(turn = self.turn_number))]
    pub fn set_cell(
        &mut self,
        row: usize,
        column: usize,
        player: Player,
    ) -> Result<GameStatus, GameError> {
        let position = Position::new(row, column)?;
        self.place(Move::new(player, position))
    }

    /// Applies a move and returns the resulting status.
    ///
    /// After placing the mark the game is won if the mover completed a
    /// line, drawn if this was the last square, and otherwise the turn
    /// number advances by one.
    ///
    /// # Errors
    ///
    /// - `GameError::GameOver` if the game is already done
    /// - `GameError::WrongPlayer` if it is not `mov.player`'s turn
    /// - `GameError::SquareOccupied` if the square already holds a mark
    #[instrument(skip(self), fields(turn = self.turn_number))]
    pub fn place(&mut self, mov: Move) -> Result<GameStatus, GameError> {
        if self.is_done() {
            return Err(GameError::GameOver);
        }

        let expected = self.current_player();
        if mov.player != expected {
            return Err(GameError::WrongPlayer {
                expected,
                found: mov.player,
            });
        }

        if let Square::Occupied(occupant) = self.board.get(mov.position) {
            return Err(GameError::SquareOccupied {
                position: mov.position,
                occupant,
            });
        }

        self.board.set(mov.position, Square::Occupied(mov.player));
        debug!(%mov, "Mark placed");

        if self.is_winner(mov.player) {
            self.status = GameStatus::Won(mov.player);
            info!(winner = %mov.player, turn = self.turn_number, "Game won");
        } else if self.is_tie() {
            debug_assert!(rules::is_full(&self.board), "last turn left empty squares");
            self.status = GameStatus::Draw;
            info!(turn = self.turn_number, "Game drawn");
        } else {
            self.turn_number += 1;
        }

        Ok(self.status)
    }

    /// Ends an in-progress game without a winner.
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` if the game had already finished.
    #[instrument(skip(self), fields(turn = self.turn_number))]
    pub fn quit(&mut self) -> Result<(), GameError> {
        if self.is_done() {
            return Err(GameError::GameOver);
        }
        self.status = GameStatus::Abandoned;
        info!("Game abandoned");
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
