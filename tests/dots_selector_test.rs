//! Tests for AI move selection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_dots::{Board, Match, Move, MoveSelector, PlayerId, SelectError, Strategy};
use strum::IntoEnumIterator;

#[test]
fn test_selection_is_total_over_whole_games() {
    for strategy in Strategy::iter() {
        for seed in 0..5 {
            let mut selector = MoveSelector::seeded(strategy, seed);
            let mut game = Match::new(4).unwrap();
            while !game.is_over() {
                let legal = game.legal_moves();
                let mv = selector.select(game.board()).unwrap();
                assert!(legal.contains(&mv), "{strategy} picked {mv}");
                game.submit_move(mv).unwrap();
            }
            assert_eq!(
                game.score(PlayerId::One) + game.score(PlayerId::Two),
                9
            );
        }
    }
}

#[test]
fn test_terminal_board_reports_no_moves() {
    let mut board = Board::new(3).unwrap();
    for mv in board.legal_moves() {
        board.place(mv, PlayerId::Two).unwrap();
    }
    for strategy in Strategy::iter() {
        let mut selector = MoveSelector::seeded(strategy, 1);
        assert_eq!(selector.select(&board), Err(SelectError::NoLegalMoves));
    }
}

#[test]
fn test_greedy_prefers_first_completing_move() {
    // Boxes (0, 0) and (1, 1) each need one more line.
    let mut board = Board::new(3).unwrap();
    for mv in [
        Move::horizontal(0, 0),
        Move::horizontal(1, 0),
        Move::vertical(0, 0),
        Move::horizontal(1, 1),
        Move::horizontal(2, 1),
        Move::vertical(1, 2),
    ] {
        board.place(mv, PlayerId::One).unwrap();
    }

    let mut selector = MoveSelector::seeded(Strategy::Greedy, 99);
    // v(0, 1) closes (0, 0) and precedes v(1, 1) in enumeration order.
    assert_eq!(selector.select(&board), Ok(Move::vertical(0, 1)));
}

#[test]
fn test_greedy_falls_back_when_every_move_is_unsafe() {
    // On 2x2 dots every open line either closes the box or gives it a
    // third side.
    let mut board = Board::new(2).unwrap();
    board.place(Move::horizontal(0, 0), PlayerId::One).unwrap();
    board.place(Move::horizontal(1, 0), PlayerId::Two).unwrap();

    let mut selector = MoveSelector::seeded(Strategy::Greedy, 4);
    let mv = selector.select(&board).unwrap();
    assert!([Move::vertical(0, 0), Move::vertical(0, 1)].contains(&mv));
}

#[test]
fn test_heuristic_scores_stay_in_bands() {
    let mut board = Board::new(4).unwrap();
    for mv in [
        Move::horizontal(0, 0),
        Move::horizontal(1, 0),
        Move::vertical(0, 0),
        Move::horizontal(2, 2),
    ] {
        board.place(mv, PlayerId::One).unwrap();
    }

    let mut selector = MoveSelector::seeded(Strategy::Heuristic, 2024);
    let scored = selector.score_moves(&board);
    assert_eq!(scored.len(), board.legal_moves().len());

    for entry in scored {
        let base = match (entry.completes, entry.creates_opportunity) {
            (true, false) => 100,
            (true, true) => 50,
            (false, false) => 0,
            (false, true) => -50,
        };
        assert!((base - 10..base + 10).contains(&entry.score()));
    }
}

#[test]
fn test_custom_rng_is_reproducible() {
    let board = Board::new(6).unwrap();
    let mut a = MoveSelector::with_rng(Strategy::Random, StdRng::seed_from_u64(5));
    let mut b = MoveSelector::with_rng(Strategy::Random, StdRng::seed_from_u64(5));
    for _ in 0..10 {
        assert_eq!(a.select(&board), b.select(&board));
    }
}

#[test]
fn test_strategy_can_change_between_calls() {
    let mut board = Board::new(3).unwrap();
    for mv in [
        Move::horizontal(0, 0),
        Move::horizontal(1, 0),
        Move::vertical(0, 0),
    ] {
        board.place(mv, PlayerId::One).unwrap();
    }

    let mut selector = MoveSelector::seeded(Strategy::Random, 0);
    selector.set_strategy(Strategy::Greedy);
    assert_eq!(selector.strategy(), Strategy::Greedy);
    assert_eq!(selector.select(&board), Ok(Move::vertical(0, 1)));
}
