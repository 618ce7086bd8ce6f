//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a finished board, `None` while play continues
    pub fn from_board(board: &Board) -> Option<Self> {
        match board.winner() {
            Some(winner) => Some(GameOutcome::Win(winner)),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

/// A single game: the board, whose turn it is, and the moves so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    first_player: Player,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game with `first_player` to open
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            first_player,
            to_move: first_player,
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns error if the game is finished or the position is not a legal
    /// empty cell. A rejected move leaves the game untouched.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move;
        self.board.place(position, player)?;
        self.moves.push(Move { position, player });
        self.outcome = GameOutcome::from_board(&self.board);
        self.to_move = player.opponent();

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
