//! Tic-tac-toe game model.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Axis, GameError, Move};
pub use game::Game;
pub use position::Position;
pub use types::{AREA, Board, GameStatus, Player, SIZE, Square};
