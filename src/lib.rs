//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe model (board, turns, win/tie detection)
//! - **Console**: move parsing, board rendering and the interactive loop
//! - **Config / CLI**: TOML settings and command-line arguments
//!
//! # Example
//!
//! ```
//! use tictactoe_cli::{GameStatus, Session};
//!
//! let input: &[u8] = b"1a\n1b\n2a\n2b\n3a\n";
//! let mut session = Session::new(input, Vec::new(), false);
//! assert_eq!(session.run().unwrap(), GameStatus::Won(tictactoe_cli::Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod games;

// Crate-level exports - CLI
pub use cli::{Cli, wait_for_profiler};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, EchoMode, GameConfig};

// Crate-level exports - Console front end
pub use console::{
    EXIT_COMMAND, MoveInput, ParseError, Session, SessionError, WELCOME, classify, parse_position,
    render_board, write_board,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AREA, Axis, Board, Game, GameError, GameStatus, Move, Player, Position, SIZE, Square, rules,
};
