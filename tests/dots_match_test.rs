//! Tests for the Dots and Boxes match state machine.

use strictly_dots::{
    DotsInvariants, InvariantSet, Match, MatchError, MatchStatus, Move, Outcome, PlayerId,
};

/// Twelve-line 3x3-dot game that ends 2-2 with a double completion.
fn drawn_game() -> Vec<Move> {
    vec![
        Move::horizontal(2, 1),
        Move::vertical(0, 1),
        Move::horizontal(0, 0),
        Move::vertical(0, 2),
        Move::horizontal(1, 1),
        Move::vertical(1, 1),
        Move::horizontal(2, 0),
        Move::vertical(1, 0),
        Move::horizontal(0, 1),
        Move::vertical(1, 2),
        Move::vertical(0, 0),
        Move::horizontal(1, 0),
    ]
}

/// 3x3-dot game that player 1 sweeps 4-0, closing two boxes on each of the
/// last two moves.
fn sweep_game() -> Vec<Move> {
    vec![
        Move::vertical(0, 2),
        Move::vertical(1, 2),
        Move::horizontal(2, 0),
        Move::horizontal(0, 0),
        Move::vertical(0, 0),
        Move::horizontal(2, 1),
        Move::horizontal(0, 1),
        Move::vertical(1, 1),
        Move::vertical(0, 1),
        Move::vertical(1, 0),
        Move::horizontal(1, 0),
        Move::horizontal(1, 1),
    ]
}

#[test]
fn test_first_box_on_four_by_four() {
    let mut game = Match::new(4).unwrap();
    game.submit_move(Move::horizontal(0, 0)).unwrap();
    game.submit_move(Move::horizontal(1, 0)).unwrap();
    game.submit_move(Move::vertical(0, 0)).unwrap();
    assert_eq!(game.active_player(), Some(PlayerId::Two));

    let report = game.submit_move(Move::vertical(0, 1)).unwrap();

    assert_eq!(report.completed.len(), 1);
    assert_eq!((report.completed[0].row, report.completed[0].col), (0, 0));
    assert_eq!(report.completed[0].owner, Some(PlayerId::Two));
    assert_eq!(game.board().box_cell(0, 0).unwrap().owner, Some(PlayerId::Two));
    assert_eq!(game.score(PlayerId::Two), 1);
    assert_eq!(game.score(PlayerId::One), 0);
    assert_eq!(game.active_player(), Some(PlayerId::Two));
    assert_eq!(game.board().completed_count(), 1);
}

#[test]
fn test_full_board_draw() {
    let game = Match::replay(3, &drawn_game()).unwrap();

    assert!(game.board().is_terminal());
    assert!(game.board().legal_moves().is_empty());
    assert_eq!(game.score(PlayerId::One), 2);
    assert_eq!(game.score(PlayerId::Two), 2);
    assert_eq!(game.status(), MatchStatus::GameOver(Outcome::Draw));
    assert!(game.outcome().unwrap().is_draw());
}

#[test]
fn test_final_move_double_completion_ends_game() {
    let moves = drawn_game();
    let (last, opening) = moves.split_last().unwrap();
    let mut game = Match::replay(3, opening).unwrap();
    assert_eq!(game.active_player(), Some(PlayerId::Two));

    let report = game.submit_move(*last).unwrap();

    assert_eq!(report.completed.len(), 2);
    assert!(!report.extra_turn);
    assert!(game.is_over());
    assert_eq!(game.active_player(), None);
}

#[test]
fn test_winner_keeps_turn_until_board_full() {
    let moves = sweep_game();
    let mut game = Match::new(3).unwrap();
    let mut reports = Vec::new();
    for mv in &moves {
        reports.push(game.submit_move(*mv).unwrap());
    }

    let penultimate = &reports[reports.len() - 2];
    assert_eq!(penultimate.player, PlayerId::One);
    assert!(penultimate.extra_turn);

    let last = reports.last().unwrap();
    assert_eq!(last.player, PlayerId::One);
    assert_eq!(last.completed.len(), 2);
    assert_eq!(game.score(PlayerId::One), 4);
    assert_eq!(game.outcome(), Some(Outcome::Winner(PlayerId::One)));
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut game = Match::replay(3, &sweep_game()).unwrap();
    let before = game.clone();
    assert_eq!(
        game.submit_move(Move::horizontal(0, 0)),
        Err(MatchError::GameAlreadyOver)
    );
    assert_eq!(game, before);
}

#[test]
fn test_invariants_hold_after_every_move() {
    let mut game = Match::new(3).unwrap();
    for mv in drawn_game() {
        let completed_before = game.board().completed_count();
        let active_before = game.active_player();
        let report = game.submit_move(mv).unwrap();

        assert!(DotsInvariants::check_all(&game).is_ok());
        assert_eq!(
            game.score(PlayerId::One) + game.score(PlayerId::Two),
            game.board().completed_count() as u32
        );
        assert_eq!(
            game.board().completed_count(),
            completed_before + report.completed.len()
        );
        if !game.is_over() {
            let expected = if report.completed.is_empty() {
                active_before.map(PlayerId::opponent)
            } else {
                active_before
            };
            assert_eq!(game.active_player(), expected);
        }
    }
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut game = Match::new(4).unwrap();
    game.submit_move(Move::horizontal(0, 0)).unwrap();
    let before = game.clone();

    for mv in [
        Move::horizontal(0, 0),
        Move::horizontal(4, 0),
        Move::horizontal(0, 3),
        Move::vertical(3, 0),
        Move::vertical(0, 4),
    ] {
        assert_eq!(game.submit_move(mv), Err(MatchError::RejectedMove(mv)));
    }
    assert_eq!(game, before);
}

#[test]
fn test_restart_after_game_over() {
    let mut game = Match::replay(3, &sweep_game()).unwrap();
    game.restart();

    assert_eq!(game.status(), MatchStatus::AwaitingMove(PlayerId::One));
    assert_eq!(game.legal_moves().len(), 12);
    assert!(game.submit_move(Move::horizontal(0, 0)).is_ok());
}

#[test]
fn test_snapshot_serializes() {
    let game = Match::replay(3, &drawn_game()[..5]).unwrap();
    let json = serde_json::to_string(&game).unwrap();
    let restored: Match = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert!(restored.verify_scores().is_ok());
}
