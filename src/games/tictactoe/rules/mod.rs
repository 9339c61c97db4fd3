//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the model and its tests can share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, turn_fills_board};
pub use win::{LINES, is_winner};
