//! Agent port - anything that can pick a move for one side of the board

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// A move chooser for one side of a game.
///
/// # Examples
///
/// ```no_run
/// use noughts::{
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// struct FirstEmpty;
///
/// impl Agent for FirstEmpty {
///     fn select_move(&mut self, board: &Board, _player: Player) -> noughts::Result<usize> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
/// ```
pub trait Agent: Send {
    /// Select a move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, e.g. the board is full or
    /// an interactive player quit.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Name used in logs and match summaries
    fn name(&self) -> &str;

    /// Seed the agent's random number generator.
    ///
    /// Deterministic agents ignore the seed.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
