//! Full-depth minimax with alpha-beta pruning
//!
//! Scores are always from the AI's point of view. A win found `d` plies
//! below the root scores `10 - d` and a loss scores `d - 10`, so faster wins
//! and slower losses rank higher. Children are visited in ascending index
//! order and only a strictly better score replaces the current best, which
//! makes the chosen move deterministic: the lowest index among equals.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::stats::SearchStats;
use crate::{
    Error, Result,
    tictactoe::{Board, Player},
};

/// Score of an immediate win at the root's child; deeper wins score less.
pub const WIN_SCORE: i32 = 10;

/// Whose choice is being modelled at a search node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Maximizing node
    Ai,
    /// Minimizing node
    Human,
}

impl Turn {
    pub fn other(self) -> Turn {
        match self {
            Turn::Ai => Turn::Human,
            Turn::Human => Turn::Ai,
        }
    }
}

/// Score of a position and the move that achieves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: i32,
    /// `None` at terminal positions
    pub best_move: Option<usize>,
}

/// Minimax searcher for a fixed AI/human assignment
#[derive(Debug, Clone)]
pub struct Minimax {
    ai: Player,
    human: Player,
    stats: SearchStats,
}

impl Minimax {
    /// Create a searcher.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when both sides are the same
    /// player.
    pub fn new(ai: Player, human: Player) -> Result<Self> {
        if ai == human {
            return Err(Error::InvalidConfiguration {
                message: format!("AI and human must be different players (both are {ai})"),
            });
        }
        Ok(Self {
            ai,
            human,
            stats: SearchStats::default(),
        })
    }

    /// Searcher for `ai` against its opponent
    pub fn for_player(ai: Player) -> Self {
        Self {
            ai,
            human: ai.opponent(),
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent top-level call
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `board` with the AI to move.
    ///
    /// The board is explored in place on a scratch copy; `board` itself is
    /// never modified.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.stats = SearchStats::default();
        let mut scratch = *board;
        let result = self.minimax(&mut scratch, 0, i32::MIN, i32::MAX, Turn::Ai);
        debug_assert_eq!(&scratch, board, "search left the board modified");
        debug!(
            ai = %self.ai,
            board = %board.encode(),
            score = result.score,
            best_move = ?result.best_move,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search complete"
        );
        result
    }

    /// Optimal move for the AI on `board`.
    ///
    /// If the search yields no move (the board is already decided) the lowest
    /// empty index is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] only when the board has no empty cell.
    pub fn best_move(&mut self, board: &Board) -> Result<usize> {
        match self.search(board).best_move {
            Some(position) => Ok(position),
            None => {
                let fallback = board
                    .available_moves()
                    .first()
                    .copied()
                    .ok_or(Error::NoValidMoves)?;
                warn!(
                    board = %board.encode(),
                    position = fallback,
                    "search found no move, falling back to first empty cell"
                );
                Ok(fallback)
            }
        }
    }

    /// Minimax score of every available AI move, in ascending move order.
    ///
    /// Each child is searched with a full window so the scores are exact,
    /// unlike the pruned siblings inside [`Minimax::search`]. Returns an
    /// empty list for terminal boards.
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<(usize, i32)> {
        self.stats = SearchStats::default();
        if board.is_terminal() {
            return Vec::new();
        }

        let mut scratch = *board;
        let mut scored = Vec::new();
        for mv in board.available_moves() {
            scratch.set(mv, self.ai);
            let child = self.minimax(&mut scratch, 1, i32::MIN, i32::MAX, Turn::Human);
            scratch.clear(mv);
            scored.push((mv, child.score));
        }
        debug_assert_eq!(&scratch, board);
        scored
    }

    fn terminal_score(&self, board: &Board, depth: i32) -> Option<i32> {
        match board.winner() {
            Some(p) if p == self.ai => Some(WIN_SCORE - depth),
            Some(_) => Some(depth - WIN_SCORE),
            None if board.is_full() => Some(0),
            None => None,
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        turn: Turn,
    ) -> SearchResult {
        self.stats.record_node(depth as usize);

        if let Some(score) = self.terminal_score(board, depth) {
            return SearchResult {
                score,
                best_move: None,
            };
        }

        let (mark, mut best_score) = match turn {
            Turn::Ai => (self.ai, i32::MIN),
            Turn::Human => (self.human, i32::MAX),
        };
        let mut best_move = None;

        for mv in board.available_moves() {
            board.set(mv, mark);
            let child = self.minimax(board, depth + 1, alpha, beta, turn.other());
            board.clear(mv);

            match turn {
                Turn::Ai => {
                    if child.score > best_score {
                        best_score = child.score;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(child.score);
                }
                Turn::Human => {
                    if child.score < best_score {
                        best_score = child.score;
                        best_move = Some(mv);
                    }
                    beta = beta.min(child.score);
                }
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }
}

/// Optimal move for `ai_player` on `board`.
///
/// # Errors
///
/// Returns error if the two players are equal or the board has no empty cell.
pub fn best_move(board: &Board, ai_player: Player, human_player: Player) -> Result<usize> {
    Minimax::new(ai_player, human_player)?.best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        let engine = Minimax::for_player(Player::X);
        assert_eq!(engine.terminal_score(&board("XXXOO...."), 3), Some(7));
        assert_eq!(engine.terminal_score(&board("OOOXX.X.."), 4), Some(-6));
        assert_eq!(engine.terminal_score(&board("XOXXOOOXX"), 9), Some(0));
        assert_eq!(engine.terminal_score(&Board::new(), 0), None);
    }

    #[test]
    fn test_search_at_terminal_has_no_move() {
        let mut engine = Minimax::for_player(Player::O);
        let result = engine.search(&board("XXXOO...."));
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -WIN_SCORE);
    }

    #[test]
    fn test_takes_immediate_win() {
        // XX.
        // OO.
        // ...
        let mut engine = Minimax::for_player(Player::X);
        let result = engine.search(&board("XX.OO...."));
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn test_blocks_opponent_win() {
        // XX.
        // .O.
        // ...
        let mut engine = Minimax::for_player(Player::O);
        assert_eq!(engine.best_move(&board("XX..O....")).unwrap(), 2);
    }

    #[test]
    fn test_rejects_same_players() {
        assert!(matches!(
            Minimax::new(Player::X, Player::X),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_fallback_on_decided_board() {
        let mut engine = Minimax::for_player(Player::O);
        assert_eq!(engine.best_move(&board("XXXOO....")).unwrap(), 5);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut engine = Minimax::for_player(Player::X);
        assert!(matches!(
            engine.best_move(&board("XOXXOOOXX")),
            Err(Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_pruning_counts() {
        let mut engine = Minimax::for_player(Player::X);
        engine.search(&Board::new());
        let stats = engine.stats();
        assert!(stats.nodes > 0);
        assert!(stats.cutoffs > 0);
        // Unpruned tree has 549,946 nodes.
        assert!(stats.nodes < 549_946);
        assert_eq!(stats.max_depth, 9);
    }

    #[test]
    fn test_evaluate_moves_scores() {
        let mut engine = Minimax::for_player(Player::X);
        let scores = engine.evaluate_moves(&board("XX.OO...."));
        // Blocking at 5 forces a draw; 6, 7 and 8 let O complete the middle row.
        assert_eq!(
            scores,
            vec![
                (2, WIN_SCORE - 1),
                (5, 0),
                (6, 2 - WIN_SCORE),
                (7, 2 - WIN_SCORE),
                (8, 2 - WIN_SCORE),
            ]
        );
    }

    #[test]
    fn test_turn_other() {
        assert_eq!(Turn::Ai.other(), Turn::Human);
        assert_eq!(Turn::Human.other(), Turn::Ai);
    }
}
