//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_CELLS, Board, Cell, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
