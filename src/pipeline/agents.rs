//! Agent implementations used by matches and the interactive game

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::debug;

use crate::{
    Error, Result,
    engine::{Minimax, SearchStats},
    ports::Agent,
    tictactoe::{Board, Player},
};

/// Optimal agent backed by the alpha-beta search
pub struct MinimaxAgent {
    name: String,
    last_stats: Option<SearchStats>,
}

impl MinimaxAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_stats: None,
        }
    }

    /// Search statistics of the last move this agent chose
    pub fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        let mut engine = Minimax::for_player(player);
        let position = engine.best_move(board)?;
        self.last_stats = Some(engine.stats());
        debug!(agent = %self.name, %player, position, "minimax agent chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random baseline
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent seeded from system entropy
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let position = moves[self.rng.random_range(0..moves.len())];
        debug!(agent = %self.name, %player, position, "random agent chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_picks_empty_cell() {
        let mut agent = RandomAgent::with_seed("Random", 7);
        let board = Board::from_string("XOXOX....").unwrap();
        for _ in 0..20 {
            let mv = agent.select_move(&board, Player::O).unwrap();
            assert!(board.is_empty(mv));
        }
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed("a", 42);
        let mut b = RandomAgent::new("b");
        b.set_rng_seed(42).unwrap();
        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, Player::X).unwrap(),
                b.select_move(&board, Player::X).unwrap()
            );
        }
    }

    #[test]
    fn test_random_agent_on_full_board() {
        let mut agent = RandomAgent::with_seed("Random", 1);
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(matches!(
            agent.select_move(&board, Player::X),
            Err(Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_minimax_agent_opening() {
        let mut agent = MinimaxAgent::new("Minimax");
        let mv = agent.select_move(&Board::new(), Player::X).unwrap();
        assert!([0, 2, 4, 6, 8].contains(&mv));
        assert!(agent.last_stats().is_some_and(|s| s.nodes > 0));
    }
}
