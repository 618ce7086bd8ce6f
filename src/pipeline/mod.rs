//! Match pipeline: agents, observers and the game loop that connects them

pub mod agents;
pub mod matches;
pub mod observers;

pub use agents::{MinimaxAgent, RandomAgent};
pub use matches::{MatchConfig, MatchPipeline, MatchResult};
pub use observers::{GameRecord, JsonlObserver, MetricsObserver, ProgressObserver};

pub use crate::ports::{Agent, Observer};
