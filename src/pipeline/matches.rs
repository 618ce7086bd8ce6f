//! Match pipeline: repeated games between two agents

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::{Agent, Observer},
    tictactoe::{Game, GameOutcome, Player},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: usize,

    /// Seed for agents that use randomness
    pub seed: Option<u64>,

    /// Side played by the evaluated agent
    pub agent_player: Player,

    /// Which player opens each game
    pub first_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: None,
            agent_player: Player::X,
            first_player: Player::X,
        }
    }
}

/// Tally of a match from the evaluated agent's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl MatchResult {
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays `num_games` games between an agent and an opponent
pub struct MatchPipeline {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchPipeline {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the match and return the tally for `agent`
    pub fn run(&mut self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }

        info!(
            agent = agent.name(),
            opponent = opponent.name(),
            games = self.config.num_games,
            agent_player = %self.config.agent_player,
            first_player = %self.config.first_player,
            "starting match"
        );

        for observer in &mut self.observers {
            observer.on_match_start(self.config.num_games)?;
        }

        let (mut wins, mut draws, mut losses) = (0, 0, 0);
        for game_num in 0..self.config.num_games {
            let game = self.play_game(game_num, agent, opponent)?;
            match game.outcome() {
                Some(GameOutcome::Win(winner)) if winner == self.config.agent_player => wins += 1,
                Some(GameOutcome::Win(_)) => losses += 1,
                Some(GameOutcome::Draw) | None => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, &game)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        let result = MatchResult::new(self.config.num_games, wins, draws, losses);
        info!(wins, draws, losses, "match finished");
        Ok(result)
    }

    fn play_game(
        &mut self,
        game_num: usize,
        agent: &mut dyn Agent,
        opponent: &mut dyn Agent,
    ) -> Result<Game> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut game = Game::new(self.config.first_player);
        let mut step_num = 0;

        while !game.is_over() {
            let player = game.to_move();
            let mover: &mut dyn Agent = if player == self.config.agent_player {
                agent
            } else {
                opponent
            };

            let board = *game.board();
            let position = mover.select_move(&board, player)?;

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, &board, player, position)?;
            }

            game.play(position)?;
            step_num += 1;
        }

        debug!(game_num, outcome = ?game.outcome(), moves = step_num, "game finished");
        Ok(game)
    }
}
