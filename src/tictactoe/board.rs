//! Board representation and rule queries

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: s.to_string(),
            }),
        }
    }
}

/// The nine cells of a 3x3 board, indexed row-major (`row * 3 + col`).
///
/// A board carries no turn information; the side to move lives in
/// [`Game`](super::Game) or is supplied by the caller of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board directly from its cells
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Parse a board from a 9-character string.
    ///
    /// Whitespace is ignored, so `"XO. .X. ..O"` and `"XO..X...O"` are the
    /// same board. A space is never an empty cell. Empty cells are written as
    /// `.`, `_` or `-`; `0` is accepted for `O`.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly nine cell characters
    /// or contains a character that is not a cell.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Mark `pos` for `player`.
    ///
    /// # Errors
    ///
    /// Returns error if the position is off the board or already taken.
    pub fn place(&mut self, pos: usize, player: Player) -> crate::Result<()> {
        if pos >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Unchecked placement used by the search; every call is paired with
    /// [`Board::clear`] before the caller returns.
    pub(crate) fn set(&mut self, pos: usize, player: Player) {
        debug_assert!(self.is_empty(pos), "search placed on occupied cell {pos}");
        self.cells[pos] = player.to_cell();
    }

    pub(crate) fn clear(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
    }

    /// All empty positions in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Owner of the first completed line, scanning rows, then columns, then diagonals
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Compact single-line encoding, e.g. `XO..X...O`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
