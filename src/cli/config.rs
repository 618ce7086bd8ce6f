//! Shared configuration types for CLI commands
//!
//! Every section has a `Default` so a config file only needs the keys it
//! changes. Command-line flags override values read from the file.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Configuration for the interactive game. X always opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Symbol for the human; asked interactively when unset
    pub human_symbol: Option<Player>,

    /// Print the 1-9 position guide before the first move
    pub show_guide: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_symbol: None,
            show_guide: true,
        }
    }
}

/// Baseline the engine is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Uniformly random moves
    Random,
    /// Another copy of the minimax engine
    Minimax,
}

/// Evaluation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Number of evaluation games
    pub games: usize,

    pub opponent: OpponentKind,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Side played by the engine
    pub ai_player: Player,

    pub first_player: Player,

    /// Whether to show a progress bar
    pub progress: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            opponent: OpponentKind::Random,
            seed: None,
            ai_player: Player::O,
            first_player: Player::X,
            progress: true,
        }
    }
}

/// Top-level layout of a JSON config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub play: PlayConfig,
    pub evaluate: EvaluationConfig,
}

impl CliConfig {
    /// Load a config file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON for
    /// this layout.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: CliConfig = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.evaluate.games == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "evaluate.games must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
