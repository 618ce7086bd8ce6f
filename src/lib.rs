//! Noughts and crosses against an unbeatable opponent
//!
//! This crate provides:
//! - The 3x3 board model with win and terminal detection
//! - An exhaustive minimax search with alpha-beta pruning that never loses
//! - Agents and a match pipeline for playing many games between them
//! - The `noughts` command-line game and its evaluation tools

pub mod cli;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use engine::{Minimax, SearchResult, SearchStats, Turn, best_move};
pub use error::{Error, Result};
pub use tictactoe::{Board, Cell, Game, GameOutcome, Player};
