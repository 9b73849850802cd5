//! A computer opponent for the board game 'Gomoku' (five in a row)
//!
//! The agent combines direct tactical checks (take a win, block a loss)
//! with a hand-tuned line heuristic and a time-bounded minimax search.
//! Three difficulty tiers compose these pieces differently.
//!
//! # Basic Usage
//!
//! ```
//! use gomoku_ai::{board::Move, choose_ai_move, new_game, strategy::Difficulty, Player};
//!
//! let mut board = new_game();
//! board.apply_move(Move::new(7, 7), Player::Human);
//!
//! let reply = choose_ai_move(&mut board, Difficulty::Easy).unwrap();
//! assert!(board.is_legal_move(reply.x as i32, reply.y as i32));
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluation;

pub mod tactics;

pub mod search;

pub mod strategy;

pub mod advice;

pub mod game;

pub mod narration;


pub use board::{Board, Cell, Move, Player};
pub use strategy::{choose_ai_move, Difficulty};

/// The width and height of the game board in cells
pub const BOARD_SIZE: usize = 14;

/// The number of consecutive stones needed to win
pub const WIN_LENGTH: usize = 5;

// a winning line has to fit on the board, and coordinates are stored as u8
const_assert!(BOARD_SIZE >= WIN_LENGTH);
const_assert!(BOARD_SIZE <= u8::MAX as usize);

/// Creates a fresh, empty board
pub fn new_game() -> Board {
    Board::new()
}
