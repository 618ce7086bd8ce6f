//! noughts - play tic-tac-toe against an AI that never loses
//!
//! Subcommands:
//! - `play`: interactive game in the terminal
//! - `evaluate`: engine against a baseline over many games
//! - `analyze`: optimal move and per-move scores for a position

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe against an unbeatable minimax AI", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the AI (default)
    Play(noughts::cli::commands::play::PlayArgs),

    /// Evaluate the engine against a baseline opponent
    Evaluate(noughts::cli::commands::evaluate::EvaluateArgs),

    /// Analyze a board position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play(args)) => noughts::cli::commands::play::execute(args),
        Some(Commands::Evaluate(args)) => noughts::cli::commands::evaluate::execute(args),
        Some(Commands::Analyze(args)) => noughts::cli::commands::analyze::execute(args),
        None => noughts::cli::commands::play::execute(noughts::cli::commands::play::PlayArgs {
            symbol: None,
            config: None,
        }),
    }
}
