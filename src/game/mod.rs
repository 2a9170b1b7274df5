//! Core Connect Four game logic: board representation, player types, and
//! win/draw detection.

mod board;
mod player;
mod rules;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use player::Player;
pub use rules::{is_winner, outcome, Outcome};
