//! Observer port - hooks into a running match

use crate::{
    Result,
    tictactoe::{Board, Game, Player},
};

/// Observer for match progress.
///
/// Methods are called in this order:
/// 1. `on_match_start(total_games)`
/// 2. For each game: `on_game_start`, then `on_move` per ply, then `on_game_end`
/// 3. `on_match_end()`
///
/// Every method defaults to a no-op.
pub trait Observer: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a move is chosen and before it is applied; `board` is the
    /// position the mover saw.
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _player: Player,
        _position: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once the game has an outcome
    fn on_game_end(&mut self, _game_num: usize, _game: &Game) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
