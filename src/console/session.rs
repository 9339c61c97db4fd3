//! Interactive game session over line-based text streams.

use super::board::write_board;
use super::input::{MoveInput, classify};
use crate::games::tictactoe::{Game, GameError, GameStatus, Move, Square};
use derive_more::{Display, Error, From};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

/// First line printed when a session starts.
pub const WELCOME: &str = "Welcome to Tic-Tac-Toe!";

/// Failure that ends a session early.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),
    /// The game model rejected an operation the session made.
    #[display("Game contract violated: {_0}")]
    Game(GameError),
}

/// A single game played over a text input and output.
///
/// Each prompt blocks on one line of input, which is fully handled before
/// the next prompt is written.
#[derive(derive_new::new)]
pub struct Session<R, W> {
    input: R,
    output: W,
    /// Write each line read back to the output, for non-terminal input.
    echo: bool,
    #[new(default)]
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the game is won, drawn or abandoned.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the streams fail, and
    /// `SessionError::Game` if the model reports a contract violation.
    #[instrument(skip_all, fields(echo = self.echo))]
    pub fn run(&mut self) -> Result<GameStatus, SessionError> {
        info!("Starting session");
        writeln!(self.output, "{WELCOME}")?;
        writeln!(self.output)?;

        while !self.game.is_done() {
            write_board(&mut self.output, self.game.board())?;
            self.take_turn()?;
        }

        self.show_results()?;
        self.output.flush()?;

        let status = self.game.status();
        info!(?status, turn = self.game.turn_number(), "Session finished");
        Ok(status)
    }

    /// Prompts until a move is accepted or the game ends.
    #[instrument(skip_all, fields(turn = self.game.turn_number()))]
    fn take_turn(&mut self) -> Result<(), SessionError> {
        while !self.game.is_done() {
            write!(
                self.output,
                "{}) {}'s move: ",
                self.game.turn_number(),
                self.game.current_player()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!("Input ended before the game finished");
                writeln!(self.output)?;
                self.game.quit()?;
                break;
            };
            let text = line.trim();

            match classify(&line) {
                MoveInput::Quit => {
                    self.game.quit()?;
                }
                MoveInput::Empty => {}
                MoveInput::Invalid(_) => {
                    writeln!(self.output, "{text:?} is not a valid space on the board.")?;
                    writeln!(self.output)?;
                }
                MoveInput::Space(position) => {
                    let square = self.game.board().get(position);
                    if let Square::Occupied(occupant) = square {
                        debug!(%position, %occupant, "Square already taken");
                        writeln!(
                            self.output,
                            "{text:?} is already taken by {:?}.",
                            occupant.to_string()
                        )?;
                        writeln!(self.output)?;
                    } else {
                        let mover = self.game.current_player();
                        self.game.place(Move::new(mover, position))?;
                        writeln!(self.output)?;
                        return Ok(());
                    }
                }
            }
        }
        Ok(())
    }

    /// Reads one line, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become replacement characters, so the text
    /// is rejected as a move instead of ending the session.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        if self.echo {
            writeln!(self.output, "{}", line.trim_end_matches(['\r', '\n']))?;
        }
        Ok(Some(line))
    }

    fn show_results(&mut self) -> Result<(), SessionError> {
        match self.game.status() {
            GameStatus::Won(winner) => {
                write_board(&mut self.output, self.game.board())?;
                writeln!(self.output, "{winner} wins!")?;
            }
            GameStatus::Draw => {
                write_board(&mut self.output, self.game.board())?;
                writeln!(self.output, "No more moves. It's a tie!")?;
            }
            GameStatus::Abandoned | GameStatus::InProgress => {}
        }
        writeln!(self.output)?;
        Ok(())
    }
}
