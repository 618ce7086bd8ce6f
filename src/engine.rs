//! Decision engine: exhaustive adversarial search over the 3x3 game tree

pub mod minimax;
pub mod stats;

pub use minimax::{Minimax, SearchResult, Turn, WIN_SCORE, best_move};
pub use stats::SearchStats;
