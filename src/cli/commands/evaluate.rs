//! Evaluate command - pit the engine against a baseline for many games

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use super::parse_player_token;
use crate::{
    cli::{
        config::{CliConfig, EvaluationConfig, OpponentKind},
        output::{format_share, print_kv, print_section},
    },
    pipeline::{
        Agent, JsonlObserver, MatchConfig, MatchPipeline, MatchResult, MetricsObserver,
        MinimaxAgent, ProgressObserver, RandomAgent,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate the minimax engine against a baseline")]
pub struct EvaluateArgs {
    /// Opponent to evaluate against
    #[arg(long, short = 'o', value_enum)]
    pub opponent: Option<OpponentKind>,

    /// Number of evaluation games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which token the engine controls (`x` or `o`)
    #[arg(long)]
    pub ai_player: Option<String>,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long)]
    pub first_player: Option<String>,

    /// Write every game as a JSON line to this file
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Export the summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl EvaluateArgs {
    /// Merge flags over the config file (or defaults)
    fn resolve(&self) -> Result<EvaluationConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?.evaluate,
            None => EvaluationConfig::default(),
        };

        if let Some(opponent) = self.opponent {
            config.opponent = opponent;
        }
        if let Some(games) = self.games {
            anyhow::ensure!(games > 0, "--games must be at least 1");
            config.games = games;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(value) = &self.ai_player {
            config.ai_player = parse_player_token(value, "--ai-player")?;
        }
        if let Some(value) = &self.first_player {
            config.first_player = parse_player_token(value, "--first-player")?;
        }
        if self.no_progress {
            config.progress = false;
        }
        Ok(config)
    }
}

/// Outcome of an evaluation run
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub result: MatchResult,
    /// Average plies per game
    pub average_length: f64,
}

/// Build and run the match described by `config`
pub fn run_evaluation(config: &EvaluationConfig, log: Option<&PathBuf>) -> Result<Evaluation> {
    let match_config = MatchConfig {
        num_games: config.games,
        seed: config.seed,
        agent_player: config.ai_player,
        first_player: config.first_player,
    };

    let metrics = MetricsObserver::new();
    let mut pipeline = MatchPipeline::new(match_config).with_observer(Box::new(metrics.clone()));
    if config.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new(config.ai_player)));
    }
    if let Some(path) = log {
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("Failed to open game log {}", path.display()))?;
        pipeline = pipeline.with_observer(Box::new(observer));
    }

    let mut engine = MinimaxAgent::new("Minimax");
    let mut opponent: Box<dyn Agent> = match config.opponent {
        OpponentKind::Random => Box::new(RandomAgent::new("Random")),
        OpponentKind::Minimax => Box::new(MinimaxAgent::new("Minimax-Opponent")),
    };

    let result = pipeline.run(&mut engine, opponent.as_mut())?;
    Ok(Evaluation {
        result,
        average_length: metrics.average_length(),
    })
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let config = args.resolve()?;

    print_section("Evaluation Configuration");
    print_kv("Opponent", &format!("{:?}", config.opponent));
    print_kv(
        "Engine plays as",
        &format!("{} (first player: {})", config.ai_player, config.first_player),
    );
    print_kv("Games", &config.games.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let Evaluation {
        result,
        average_length,
    } = run_evaluation(&config, args.log.as_ref())?;

    print_section("Evaluation Results");
    print_kv("Total games", &result.total_games.to_string());
    print_kv("Wins", &format_share(result.wins, result.win_rate));
    print_kv("Draws", &format_share(result.draws, result.draw_rate));
    print_kv("Losses", &format_share(result.losses, result.loss_rate));
    print_kv("Average game length", &format!("{average_length:.1} moves"));

    if result.losses > 0 {
        warn!(losses = result.losses, "engine lost games");
    }

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("Failed to export results to {}", path.display()))?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
