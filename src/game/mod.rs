//! Core Connect Four game logic: board representation with gravity drops and
//! win detection, player types, and a turn-taking state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_CONNECT, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
