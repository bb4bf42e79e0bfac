//! Tests for the live game session.

use noughts_board::{GameOutcome, GameSession, Marker, PlayOutcome, validate_markers};

fn x_first() -> GameSession {
    let mut session = GameSession::new();
    session.setup("Nadya", Marker::x(), "DOM", Marker::o());
    session
}

#[test]
fn test_illegal_move_leaves_grid_unchanged() {
    let mut session = x_first();
    assert_eq!(session.play_at(0), PlayOutcome::Placed(Marker::x()));
    let grid = session.grid().clone();

    let outcome = session.play_at(0);
    assert_eq!(outcome, PlayOutcome::Illegal);
    assert_eq!(outcome.to_string(), "ILLEGAL");
    assert_eq!(session.grid(), &grid);
    assert_eq!(session.current_turn(), 2);
}

#[test]
fn test_full_grid_is_a_draw_and_closes_play() {
    let mut session = x_first();
    // X O X / X O O / O X X
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(session.play_at(pos).is_placed());
    }

    assert_eq!(session.winner(), GameOutcome::Draw);
    assert_eq!(session.winner().to_string(), "DRAW");
    assert!(!session.can_play());
    assert_eq!(session.play_at(0), PlayOutcome::Ignored);
    assert_eq!(session.play_at(0).to_string(), "");
}

#[test]
fn test_winner_reported_by_name() {
    let mut session = GameSession::new();
    session.setup("Nadya", Marker::o(), "DOM", Marker::x());
    // DOM (X) moves first and takes the left column.
    for pos in [0, 1, 3, 4, 6] {
        session.play_at(pos);
    }
    assert_eq!(session.winner(), GameOutcome::Winner("DOM".to_string()));
    assert!(!session.can_play());
}

#[test]
fn test_ongoing_game_has_no_result() {
    let mut session = x_first();
    session.play_at(4);
    assert_eq!(session.winner(), GameOutcome::Ongoing);
    assert!(session.can_play());
}

#[test]
fn test_turns_alternate_after_every_accepted_move() {
    let mut session = x_first();
    let mut expected = 1;
    for pos in [4, 0, 8, 2] {
        assert_eq!(session.current_turn(), expected);
        session.play_at(pos);
        expected = 3 - expected;
    }
    assert_eq!(session.current_turn(), 1);
}

#[test]
fn test_caller_validates_markers_before_setup() {
    assert!(validate_markers(&Marker::x(), &Marker::x()).is_err());
    assert!(validate_markers(&Marker::x(), &Marker::new("@").unwrap()).is_ok());
}
