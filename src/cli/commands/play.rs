//! Play command - interactive game against the minimax engine

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use super::parse_player_token;
use crate::{
    Error,
    cli::{
        config::{CliConfig, PlayConfig},
        output::render_board,
        prompt::{prompt_move, prompt_symbol},
    },
    engine::Minimax,
    tictactoe::{Board, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the unbeatable AI")]
pub struct PlayArgs {
    /// Your symbol (`x` or `o`); asked interactively when omitted
    #[arg(long, short = 's')]
    pub symbol: Option<String>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => CliConfig::load(path)?.play,
        None => PlayConfig::default(),
    };
    if let Some(symbol) = &args.symbol {
        config.human_symbol = Some(parse_player_token(symbol, "--symbol")?);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()?;
    Ok(())
}

/// One interactive game over arbitrary line input and text output
pub struct Session<R, W> {
    input: R,
    output: W,
    config: PlayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: PlayConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Play one game to completion.
    ///
    /// Returns `None` when the human quits or the input ends early.
    pub fn run(&mut self) -> crate::Result<Option<GameOutcome>> {
        match self.play() {
            Err(Error::Quit) => {
                writeln!(self.output, "Goodbye!")?;
                Ok(None)
            }
            Err(Error::InputClosed) => {
                writeln!(self.output, "\nGame interrupted. Goodbye!")?;
                Ok(None)
            }
            other => other.map(Some),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn play(&mut self) -> crate::Result<GameOutcome> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe (Unbeatable AI)")?;

        let human = match self.config.human_symbol {
            Some(player) => player,
            None => prompt_symbol(&mut self.input, &mut self.output)?,
        };
        let ai = human.opponent();
        let mut engine = Minimax::new(ai, human)?;
        let mut game = Game::new(Player::X);
        info!(%human, %ai, "starting interactive game");

        if self.config.show_guide {
            writeln!(self.output, "\nBoard positions: 1-9 as shown below")?;
            writeln!(self.output, "{}", render_board(&Board::new()))?;
            writeln!(self.output)?;
        }

        loop {
            writeln!(self.output, "{}", render_board(game.board()))?;

            if let Some(outcome) = game.outcome() {
                let message = match outcome {
                    GameOutcome::Draw => "It's a draw!",
                    GameOutcome::Win(p) if p == human => "You win! Congratulations!",
                    GameOutcome::Win(_) => "AI wins. Better luck next time.",
                };
                writeln!(self.output, "{message}")?;
                return Ok(outcome);
            }

            if game.to_move() == human {
                let position = prompt_move(&mut self.input, &mut self.output, game.board(), human)?;
                game.play(position)?;
            } else {
                writeln!(self.output, "AI ({ai}) is thinking...")?;
                let position = engine.best_move(game.board())?;
                game.play(position)?;
                writeln!(self.output, "AI plays position {}", position + 1)?;
            }

            writeln!(self.output)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(input: &str, config: PlayConfig) -> (Option<GameOutcome>, String) {
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), config);
        let outcome = session.run().unwrap();
        let text = String::from_utf8(session.into_output()).unwrap();
        (outcome, text)
    }

    #[test]
    fn test_ai_punishes_weak_play() {
        // Human X plays 1, 2, 4 (0, 1, 3). O takes center, blocks 3, then wins.
        let config = PlayConfig {
            human_symbol: Some(Player::X),
            ..PlayConfig::default()
        };
        let (outcome, text) = run_session("1\n2\n4\n8\n", config);
        assert_eq!(outcome, Some(GameOutcome::Win(Player::O)));
        assert!(text.contains("AI (O) is thinking..."));
        assert!(text.contains("AI wins. Better luck next time."));
    }

    #[test]
    fn test_symbol_prompt_then_quit() {
        let (outcome, text) = run_session("z\nO\nq\n", PlayConfig::default());
        assert_eq!(outcome, None);
        assert!(text.starts_with("Welcome to Tic-Tac-Toe (Unbeatable AI)"));
        assert!(text.contains("AI (X) is thinking..."));
        assert!(text.contains("AI plays position"));
        assert!(text.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn test_x_always_opens() {
        let config = PlayConfig {
            human_symbol: Some(Player::X),
            ..PlayConfig::default()
        };
        let (_, text) = run_session("5\nq\n", config);
        let human_prompt = text.find("Your move (X)").unwrap();
        let ai_turn = text.find("AI (O) is thinking...").unwrap();
        assert!(human_prompt < ai_turn);

        let config = PlayConfig {
            human_symbol: Some(Player::O),
            ..PlayConfig::default()
        };
        let (_, text) = run_session("q\n", config);
        let ai_turn = text.find("AI (X) is thinking...").unwrap();
        let human_prompt = text.find("Your move (O)").unwrap();
        assert!(ai_turn < human_prompt);
    }

    #[test]
    fn test_end_of_input() {
        let (outcome, text) = run_session("", PlayConfig::default());
        assert_eq!(outcome, None);
        assert!(text.contains("Game interrupted. Goodbye!"));
    }

    #[test]
    fn test_guide_is_optional() {
        let config = PlayConfig {
            human_symbol: Some(Player::X),
            show_guide: false,
            ..PlayConfig::default()
        };
        let (_, text) = run_session("q\n", config);
        assert!(!text.contains("Board positions"));
    }
}
