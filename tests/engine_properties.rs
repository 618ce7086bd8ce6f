//! Behavioural properties of the minimax engine

use noughts::{
    Error,
    engine::{Minimax, WIN_SCORE, best_move},
    tictactoe::{Board, Game, GameOutcome, Player},
};

mod common;

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

mod legality {
    use super::*;

    #[test]
    fn best_move_is_empty_on_every_reachable_position() {
        for (position, to_move) in common::reachable_positions(Player::X) {
            if position.is_terminal() {
                continue;
            }
            let mv = best_move(&position, to_move, to_move.opponent()).unwrap();
            assert!(
                position.is_empty(mv),
                "move {mv} is occupied on\n{position}"
            );
        }
    }

    #[test]
    fn reachable_position_count() {
        // 5,478 legal positions when X always opens.
        assert_eq!(common::reachable_positions(Player::X).len(), 5478);
    }

    #[test]
    fn equal_players_are_rejected() {
        assert!(matches!(
            best_move(&Board::new(), Player::O, Player::O),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}

mod never_loses {
    use super::*;

    /// Explore every human reply; the AI answers with its best move.
    fn assert_ai_never_loses(game: Game, ai: Player, engine: &mut Minimax) -> usize {
        if let Some(outcome) = game.outcome() {
            assert_ne!(
                outcome,
                GameOutcome::Win(ai.opponent()),
                "AI lost after moves {:?}",
                game.moves()
            );
            return 1;
        }

        if game.to_move() == ai {
            let mut next = game.clone();
            next.play(engine.best_move(game.board()).unwrap()).unwrap();
            assert_ai_never_loses(next, ai, engine)
        } else {
            game.board()
                .available_moves()
                .into_iter()
                .map(|mv| {
                    let mut next = game.clone();
                    next.play(mv).unwrap();
                    assert_ai_never_loses(next, ai, engine)
                })
                .sum()
        }
    }

    #[test]
    fn ai_as_x_moving_first() {
        let mut engine = Minimax::for_player(Player::X);
        let games = assert_ai_never_loses(Game::new(Player::X), Player::X, &mut engine);
        assert!(games > 0);
    }

    #[test]
    fn ai_as_o_moving_second() {
        let mut engine = Minimax::for_player(Player::O);
        let games = assert_ai_never_loses(Game::new(Player::X), Player::O, &mut engine);
        assert!(games > 0);
    }

    #[test]
    fn optimal_against_optimal_is_a_draw() {
        for first in [Player::X, Player::O] {
            let mut x = Minimax::for_player(Player::X);
            let mut o = Minimax::for_player(Player::O);
            let mut game = Game::new(first);
            while !game.is_over() {
                let engine = match game.to_move() {
                    Player::X => &mut x,
                    Player::O => &mut o,
                };
                let mv = engine.best_move(game.board()).unwrap();
                game.play(mv).unwrap();
            }
            assert_eq!(game.outcome(), Some(GameOutcome::Draw));
            assert_eq!(game.moves().len(), 9);
        }
    }
}

mod scoring {
    use super::*;

    #[test]
    fn takes_the_open_win() {
        // X . X
        // O O .
        // . . .
        let mut engine = Minimax::for_player(Player::X);
        let result = engine.search(&board("X.XOO...."));
        assert_eq!(result.best_move, Some(1));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn prefers_winning_over_blocking() {
        // O O .
        // X X .
        // X . .
        let mut engine = Minimax::for_player(Player::O);
        let result = engine.search(&board("OO.XX.X.."));
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn delays_a_forced_loss() {
        // X O .
        // . X .
        // . . .
        // Blocking at 8 only postpones X's fork; every other move loses next ply.
        let mut engine = Minimax::for_player(Player::O);
        let result = engine.search(&board("XO..X...."));
        assert_eq!(result.best_move, Some(8));
        assert_eq!(result.score, 4 - WIN_SCORE);

        let scores = engine.evaluate_moves(&board("XO..X...."));
        for (mv, score) in scores {
            let expected = if mv == 8 { 4 - WIN_SCORE } else { 2 - WIN_SCORE };
            assert_eq!(score, expected, "move {mv}");
        }
    }

    #[test]
    fn opening_is_corner_or_center() {
        let mv = best_move(&Board::new(), Player::X, Player::O).unwrap();
        assert!([0, 2, 4, 6, 8].contains(&mv), "opened on edge {mv}");
        let result = Minimax::for_player(Player::X).search(&Board::new());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn answers_corner_opening_with_center() {
        let mv = best_move(&board("X........"), Player::O, Player::X).unwrap();
        assert_eq!(mv, 4);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn repeated_calls_agree_and_leave_board_untouched() {
        let positions = ["", "X........", "X...O...X", "XO..X....", "OX.XO...."];
        for s in positions {
            let position = if s.is_empty() { Board::new() } else { board(s) };
            let before = position;
            let ai = if position.occupied_count() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            let first = best_move(&position, ai, ai.opponent()).unwrap();
            let second = best_move(&position, ai, ai.opponent()).unwrap();
            assert_eq!(first, second);
            assert_eq!(position, before);
        }
    }

    #[test]
    fn equal_scores_resolve_to_lowest_index() {
        let mut engine = Minimax::for_player(Player::X);
        let scores = engine.evaluate_moves(&Board::new());
        let best = scores.iter().map(|&(_, s)| s).max().unwrap();
        let first_best = scores.iter().find(|&&(_, s)| s == best).unwrap().0;
        assert_eq!(engine.best_move(&Board::new()).unwrap(), first_best);
    }
}
