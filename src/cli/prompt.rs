//! Reading the human's choices from a line-oriented input

use std::{
    io::{BufRead, Write},
    num::{IntErrorKind, ParseIntError},
};

use crate::{
    Error, Result,
    tictactoe::{BOARD_CELLS, Board, Player},
};

/// A line of move input that was understood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Zero-based board index
    Position(usize),
    Quit,
}

/// A line of move input that must be asked for again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    NotANumber,
    OutOfRange,
    Occupied,
}

impl InputProblem {
    pub fn message(self) -> &'static str {
        match self {
            InputProblem::NotANumber => "Please enter a number 1-9 or 'q' to quit.",
            InputProblem::OutOfRange => "Invalid position. Choose 1-9.",
            InputProblem::Occupied => "Cell already taken. Choose another.",
        }
    }
}

/// Interpret one line typed at the move prompt.
///
/// Positions are 1-based on input and 0-based in the result.
pub fn parse_move_input(raw: &str, board: &Board) -> std::result::Result<MoveInput, InputProblem> {
    let raw = raw.trim();
    if matches!(raw.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(MoveInput::Quit);
    }

    let number: i64 = raw.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputProblem::OutOfRange,
        _ => InputProblem::NotANumber,
    })?;
    if !(1..=BOARD_CELLS as i64).contains(&number) {
        return Err(InputProblem::OutOfRange);
    }

    let position = (number - 1) as usize;
    if !board.is_empty(position) {
        return Err(InputProblem::Occupied);
    }
    Ok(MoveInput::Position(position))
}

/// Accepts exactly `X` or `O`, case-insensitive
pub fn parse_symbol(raw: &str) -> Option<Player> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "X" => Some(Player::X),
        "O" => Some(Player::O),
        _ => None,
    }
}

/// Read one line, mapping end of input to [`Error::InputClosed`]
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }
    Ok(line)
}

/// Ask for the human's symbol until `X` or `O` is entered
pub fn prompt_symbol<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Player> {
    loop {
        write!(output, "Choose your symbol (X goes first). Enter X or O: ")?;
        output.flush()?;
        if let Some(player) = parse_symbol(&read_line(input)?) {
            return Ok(player);
        }
    }
}

/// Ask for a move until a legal one is entered.
///
/// # Errors
///
/// Returns [`Error::Quit`] when the human asks to quit and
/// [`Error::InputClosed`] at end of input.
pub fn prompt_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
    human: Player,
) -> Result<usize> {
    loop {
        write!(output, "Your move ({human}). Enter position 1-9: ")?;
        output.flush()?;
        match parse_move_input(&read_line(input)?, board) {
            Ok(MoveInput::Position(position)) => return Ok(position),
            Ok(MoveInput::Quit) => return Err(Error::Quit),
            Err(problem) => writeln!(output, "{}", problem.message())?,
        }
    }
}
