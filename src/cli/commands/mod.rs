//! Subcommands of the `noughts` binary

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

pub mod analyze;
pub mod evaluate;
pub mod play;

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
