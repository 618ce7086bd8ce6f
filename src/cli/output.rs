//! Output formatting for the CLI

use crate::tictactoe::Board;

/// Render a board for a human player.
///
/// Empty cells show their 1-based position so the grid doubles as the input
/// guide:
///
/// ```text
///  X | 2 | 3
/// ---+---+---
///  4 | O | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
pub fn render_board(board: &Board) -> String {
    let cell = |i: usize| match board.get(i).to_player() {
        Some(player) => player.symbol(),
        None => char::from_digit(i as u32 + 1, 10).unwrap_or('?'),
    };

    (0..3)
        .map(|row| {
            let base = row * 3;
            format!(" {} | {} | {}", cell(base), cell(base + 1), cell(base + 2))
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a count with its share of the total, e.g. `12 (24.0%)`
pub fn format_share(count: usize, rate: f64) -> String {
    format!("{count} ({:.1}%)", rate * 100.0)
}
