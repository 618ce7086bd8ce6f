//! Analyze command - score every move of a position

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

use super::parse_player_token;
use crate::{
    cli::output::{print_kv, print_section, render_board},
    engine::{Minimax, SearchStats},
    tictactoe::{Board, LineAnalyzer, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show the optimal move and every move's score for a position")]
pub struct AnalyzeArgs {
    /// Board as 9 cells, e.g. `XO..X....` (`.`, `_` or `-` for empty)
    pub board: String,

    /// Side to analyze for; inferred from piece counts when omitted
    #[arg(long)]
    pub ai_player: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: i32,
}

/// Everything `analyze` reports about one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub board: String,
    pub ai_player: Player,
    pub winner: Option<Player>,
    pub terminal: bool,
    pub best_move: Option<usize>,
    pub score: Option<i32>,
    pub moves: Vec<MoveScore>,
    /// Cells that would win immediately for the AI
    pub winning_moves: Vec<usize>,
    /// Cells the human would win on next turn
    pub threats: Vec<usize>,
    pub stats: SearchStats,
}

/// X opens, so equal counts mean X to move
pub fn side_to_move(board: &Board) -> Player {
    let x = board.cells().iter().filter(|c| c.to_player() == Some(Player::X)).count();
    let o = board.cells().iter().filter(|c| c.to_player() == Some(Player::O)).count();
    if x <= o { Player::X } else { Player::O }
}

pub fn analyze_board(board: &Board, ai: Player) -> AnalysisReport {
    let mut engine = Minimax::for_player(ai);
    let terminal = board.is_terminal();

    let (best_move, score, stats) = if terminal {
        (None, None, SearchStats::default())
    } else {
        let result = engine.search(board);
        (result.best_move, Some(result.score), engine.stats())
    };

    let moves = engine
        .evaluate_moves(board)
        .into_iter()
        .map(|(position, score)| MoveScore { position, score })
        .collect();

    AnalysisReport {
        board: board.encode(),
        ai_player: ai,
        winner: board.winner(),
        terminal,
        best_move,
        score,
        moves,
        winning_moves: LineAnalyzer::winning_moves(board.cells(), ai),
        threats: LineAnalyzer::winning_moves(board.cells(), ai.opponent()),
        stats,
    }
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let ai = match &args.ai_player {
        Some(value) => parse_player_token(value, "--ai-player")?,
        None => side_to_move(&board),
    };

    let report = analyze_board(&board, ai);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    println!("{}", render_board(&board));
    print_kv("Analyzing for", &ai.to_string());

    if report.terminal {
        match report.winner {
            Some(winner) => print_kv("Winner", &winner.to_string()),
            None => print_kv("Result", "draw"),
        }
        return Ok(());
    }

    if let (Some(best), Some(score)) = (report.best_move, report.score) {
        print_kv(
            "Best move",
            &format!("position {} (row {}, col {})", best + 1, best / 3, best % 3),
        );
        print_kv("Score", &score.to_string());
    }
    if !report.winning_moves.is_empty() {
        print_kv("Immediate wins", &one_based(&report.winning_moves));
    }
    if !report.threats.is_empty() {
        print_kv("Must block", &one_based(&report.threats));
    }
    print_kv(
        "Nodes searched",
        &format!("{} ({} cutoffs)", report.stats.nodes, report.stats.cutoffs),
    );

    print_section("Move Scores");
    for entry in &report.moves {
        println!("  position {}: {:>3}", entry.position + 1, entry.score);
    }

    Ok(())
}

fn one_based(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
