//! Observers for match pipelines
//!
//! Observers allow composable data collection during a match without
//! coupling the game loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Game, GameOutcome, Player},
};

/// One finished game as written to a JSON-lines log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_num: usize,
    pub first_player: Player,
    /// Positions in play order
    pub moves: Vec<usize>,
    pub outcome: Option<GameOutcome>,
    /// Final board, e.g. `XOX.O.X..`
    pub final_board: String,
}

impl GameRecord {
    pub fn from_game(game_num: usize, game: &Game) -> Self {
        Self {
            game_num,
            first_player: game.first_player(),
            moves: game.moves().iter().map(|m| m.position).collect(),
            outcome: game.outcome(),
            final_board: game.board().encode(),
        }
    }
}

/// Progress bar observer
pub struct ProgressObserver {
    agent_player: Player,
    progress_bar: Option<ProgressBar>,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Counts wins and losses from `agent_player`'s side
    pub fn new(agent_player: Player) -> Self {
        Self {
            agent_player,
            progress_bar: None,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn summary(&self) -> String {
        format!("{} D:{} L:{}", self.wins, self.draws, self.losses)
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        match game.outcome() {
            Some(GameOutcome::Win(p)) if p == self.agent_player => self.wins += 1,
            Some(GameOutcome::Win(_)) => self.losses += 1,
            Some(GameOutcome::Draw) | None => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.summary());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.summary());
        }
        Ok(())
    }
}

/// Metrics observer - game lengths across a match.
///
/// Clones share the same tally, so a caller can keep one handle and give
/// another to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    game_lengths: Arc<Mutex<Vec<usize>>>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn lengths(&self) -> MutexGuard<'_, Vec<usize>> {
        self.game_lengths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Average number of plies per finished game
    pub fn average_length(&self) -> f64 {
        let lengths = self.lengths();
        if lengths.is_empty() {
            return 0.0;
        }
        lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
    }
}

impl Observer for MetricsObserver {
    fn on_game_end(&mut self, _game_num: usize, game: &Game) -> Result<()> {
        self.lengths().push(game.moves().len());
        Ok(())
    }
}

/// Writes one [`GameRecord`] per line as JSON
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create game log {}", path.display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        let record = GameRecord::from_game(game_num, game);
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_game(moves: &[usize]) -> Game {
        let mut game = Game::new(Player::X);
        for &pos in moves {
            game.play(pos).unwrap();
        }
        game
    }

    #[test]
    fn test_metrics_observer() {
        let metrics = MetricsObserver::new();
        assert_eq!(metrics.average_length(), 0.0);

        let mut handle = metrics.clone();
        handle
            .on_game_end(0, &finished_game(&[0, 3, 1, 4, 2]))
            .unwrap();
        handle
            .on_game_end(1, &finished_game(&[0, 1, 2, 4, 3, 6, 5, 8, 7]))
            .unwrap();

        assert_eq!(metrics.average_length(), 7.0);
    }

    #[test]
    fn test_game_record() {
        let record = GameRecord::from_game(3, &finished_game(&[0, 3, 1, 4, 2]));
        assert_eq!(record.game_num, 3);
        assert_eq!(record.moves, vec![0, 3, 1, 4, 2]);
        assert_eq!(record.outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(record.final_board, "XXXOO....");
    }
}
