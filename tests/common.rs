//! Common test utilities: enumeration of reachable positions.

use std::collections::HashSet;

use noughts::tictactoe::{Board, Player};

/// Every position reachable by legal play from an empty board with `first`
/// to move, paired with the player to move in it. Terminal positions are
/// included with the player who would have moved next.
pub fn reachable_positions(first: Player) -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    visit(Board::new(), first, &mut seen, &mut out);
    out
}

fn visit(
    board: Board,
    to_move: Player,
    seen: &mut HashSet<Board>,
    out: &mut Vec<(Board, Player)>,
) {
    if !seen.insert(board) {
        return;
    }
    out.push((board, to_move));
    if board.is_terminal() {
        return;
    }
    for mv in board.available_moves() {
        let mut next = board;
        next.place(mv, to_move).expect("available move must be placeable");
        visit(next, to_move.opponent(), seen, out);
    }
}
