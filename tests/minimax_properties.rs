//! Properties of the minimax agent over the whole tic-tac-toe game tree.

mod common;

use common::{board, outcome, play_out, reachable_boards};
use noughts::{
    Error,
    pipeline::{MinimaxAgent, RandomAgent},
    search::{LOSS_SCORE, WIN_SCORE, choose_action, choose_scored_action, evaluate_moves},
    tictactoe::{Game, GameOutcome, LineAnalyzer, Player},
};

mod self_play {
    use super::*;

    #[test]
    fn empty_board_self_play_is_a_draw() {
        let mut x = MinimaxAgent::new("X".to_string());
        let mut o = MinimaxAgent::new("O".to_string());

        let game = play_out(Game::new(), &mut x, &mut o);
        assert_eq!(outcome(&game), GameOutcome::Draw);
        assert_eq!(game.moves.len(), 9);
    }

    #[test]
    fn every_opening_move_leads_to_a_draw() {
        for first in 0..9 {
            let mut game = Game::new();
            game.play(first).unwrap();

            let mut x = MinimaxAgent::new("X".to_string());
            let mut o = MinimaxAgent::new("O".to_string());
            let game = play_out(game, &mut x, &mut o);

            assert_eq!(
                outcome(&game),
                GameOutcome::Draw,
                "opening at {first} did not draw: {:?}",
                game.positions()
            );
        }
    }
}

mod against_random {
    use super::*;

    #[test]
    fn never_loses_as_x() {
        for seed in 0..20 {
            let mut agent = MinimaxAgent::new("Minimax".to_string());
            let mut random = RandomAgent::with_seed("Random".to_string(), seed);

            let game = play_out(Game::new(), &mut agent, &mut random);
            assert_ne!(
                outcome(&game),
                GameOutcome::Win(Player::O),
                "minimax (X) lost with seed {seed}:\n{}",
                game.board()
            );
        }
    }

    #[test]
    fn never_loses_as_o() {
        for seed in 0..20 {
            let mut agent = MinimaxAgent::new("Minimax".to_string());
            let mut random = RandomAgent::with_seed("Random".to_string(), seed + 1000);

            let game = play_out(Game::new(), &mut random, &mut agent);
            assert_ne!(
                outcome(&game),
                GameOutcome::Win(Player::X),
                "minimax (O) lost with seed {seed}:\n{}",
                game.board()
            );
        }
    }
}

mod fixtures {
    use super::*;

    #[test]
    fn takes_the_immediate_win() {
        let mut b = board("XX. OO. ...");
        assert_eq!(b.legal_moves(), vec![2, 5, 6, 7, 8]);
        assert_eq!(choose_action(&mut b, Player::X, Player::O).unwrap(), 2);
    }

    #[test]
    fn last_cell_completes_a_draw() {
        let mut b = board("XOX XOO OX.");
        assert!(!b.is_terminal());
        assert_eq!(choose_action(&mut b, Player::X, Player::O).unwrap(), 8);

        b.place(8, Player::X).unwrap();
        assert!(!b.has_won(Player::X));
        assert!(!b.has_won(Player::O));
        assert!(b.is_draw());
    }

    #[test]
    fn wins_before_blocking_a_column() {
        // X O .
        // X O .
        // . . .
        let mut b = board("XO. XO. ...");
        assert_eq!(choose_action(&mut b, Player::X, Player::O).unwrap(), 6);
    }

    #[test]
    fn blocks_a_column_threat() {
        // X . .
        // . O .
        // . O X
        let mut b = board("X.. .O. .OX");
        assert_eq!(choose_action(&mut b, Player::X, Player::O).unwrap(), 1);
    }

    #[test]
    fn blocks_the_top_row() {
        let mut b = board("X.X .O. ...");
        assert_eq!(choose_action(&mut b, Player::O, Player::X).unwrap(), 1);
    }

    #[test]
    fn winning_beats_blocking() {
        let mut b = board("XX. OO. X..");
        assert_eq!(choose_action(&mut b, Player::O, Player::X).unwrap(), 5);
    }

    #[test]
    fn fork_is_a_forced_loss() {
        // X . X
        // . O .
        // X . O
        let mut b = board("X.X .O. X.O");
        let scores = evaluate_moves(&mut b, Player::O, Player::X);
        assert!(scores.iter().all(|s| s.score == LOSS_SCORE));
        // Equal scores resolve to the lowest cell.
        assert_eq!(choose_action(&mut b, Player::O, Player::X).unwrap(), 1);
    }

    #[test]
    fn full_board_fails_fast() {
        let mut b = board("XOX XOO OXX");
        assert!(matches!(
            choose_action(&mut b, Player::X, Player::O),
            Err(Error::NoLegalMoves)
        ));
    }
}

mod exhaustive {
    use super::*;

    #[test]
    fn at_most_one_winner_on_reachable_boards() {
        let boards = reachable_boards();
        // 5478 legal positions including the empty board
        assert_eq!(boards.len(), 5478);
        for b in &boards {
            assert!(
                !(b.has_won(Player::X) && b.has_won(Player::O)),
                "both players won on\n{b}"
            );
        }
    }

    #[test]
    fn place_then_remove_restores_every_board() {
        for b in reachable_boards() {
            let mover = match b.next_player() {
                Ok(player) => player,
                Err(e) => panic!("unreachable board counts: {e}"),
            };
            for position in b.legal_moves() {
                let mut copy = b;
                copy.place(position, mover).unwrap();
                assert_ne!(copy, b);
                copy.remove(position);
                assert_eq!(copy, b);

                let mut scoped = b;
                drop(scoped.scoped_place(position, mover));
                assert_eq!(scoped, b);
            }
        }
    }

    #[test]
    fn always_wins_or_blocks_when_it_must() {
        for b in reachable_boards() {
            if b.is_terminal() || b.piece_count().empty > 6 {
                continue;
            }
            let me = b.next_player().unwrap();
            let them = me.opponent();
            let my_wins = LineAnalyzer::winning_moves(&b.cells, me);
            let their_wins = LineAnalyzer::winning_moves(&b.cells, them);

            let mut scratch = b;
            let best = choose_scored_action(&mut scratch, me, them).unwrap();
            assert_eq!(scratch, b, "search did not restore\n{b}");

            if !my_wins.is_empty() {
                assert_eq!(best.score, WIN_SCORE, "missed a win on\n{b}");
            } else if their_wins.len() == 1 && best.score > LOSS_SCORE {
                // A lost position scores every move alike; otherwise only the block survives.
                assert_eq!(best.position, their_wins[0], "did not block on\n{b}");
            }
        }
    }
}
