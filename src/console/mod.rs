//! Terminal front end: move parsing, board rendering and the game loop.

mod board;
mod input;
mod session;

pub use board::{render_board, write_board};
pub use input::{EXIT_COMMAND, MoveInput, ParseError, classify, parse_position};
pub use session::{Session, SessionError, WELCOME};
