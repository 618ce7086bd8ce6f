//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line (in [`WINNING_LINES`] order) held entirely by one player
    pub fn winning_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
        WINNING_LINES.iter().copied().find(|&[a, b, c]| {
            cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c]
        })
    }

    /// Owner of the first completed line.
    ///
    /// Two completed lines at once cannot arise from legal play; such boards
    /// simply report whichever line is enumerated first.
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        Self::winning_line(cells).and_then(|[a, _, _]| cells[a].to_player())
    }

    /// Empty positions that would complete a line for `player`, ascending
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let target = player.to_cell();
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| {
                let empties: Vec<usize> = line
                    .iter()
                    .copied()
                    .filter(|&idx| cells[idx] == Cell::Empty)
                    .collect();
                let owned = line.iter().filter(|&&idx| cells[idx] == target).count();
                (owned == 2 && empties.len() == 1).then(|| empties[0])
            })
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(marks: &[usize], cell: Cell) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &idx in marks {
            cells[idx] = cell;
        }
        cells
    }

    #[test]
    fn test_every_line_detected() {
        for line in WINNING_LINES {
            let cells = with(&line, Cell::X);
            assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X), "{line:?}");
            assert_eq!(LineAnalyzer::winning_line(&cells), Some(line));

            let cells = with(&line, Cell::O);
            assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O), "{line:?}");
        }
    }

    #[test]
    fn test_no_winner_on_empty() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::winner(&cells), None);
        assert_eq!(LineAnalyzer::winning_line(&cells), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut cells = with(&[0, 1], Cell::X);
        cells[2] = Cell::O;
        assert_eq!(LineAnalyzer::winner(&cells), None);
    }

    #[test]
    fn test_winning_moves() {
        // XX.
        // X..
        // ...
        let cells = with(&[0, 1, 3], Cell::X);
        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![2, 6]);
        assert!(LineAnalyzer::winning_moves(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_blocked_line_has_no_winning_move() {
        let mut cells = with(&[0, 2], Cell::X);
        cells[1] = Cell::O;
        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }
}
