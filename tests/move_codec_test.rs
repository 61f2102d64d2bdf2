//! Tests for the 4-/5-character move codec.

use chess_autopilot::{Move, ParseMoveError, PieceKind};

#[test]
fn test_plain_move_round_trip() {
    let mv: Move = "e2e4".parse().unwrap();
    assert_eq!(mv.from.to_string(), "e2");
    assert_eq!(mv.to.to_string(), "e4");
    assert!(mv.promotion.is_none());
    assert_eq!(mv.to_string(), "e2e4");
    assert_eq!(mv.to_string().len(), 4);
}

#[test]
fn test_promotion_round_trip() {
    let mv: Move = "e7e8q".parse().unwrap();
    assert_eq!(mv.promotion, Some(PieceKind::Queen));
    assert_eq!(mv.to_string(), "e7e8q");

    let back: Move = mv.to_string().parse().unwrap();
    assert_eq!(back, mv);
}

#[test]
fn test_all_promotion_letters() {
    for (code, kind) in [
        ("a7a8q", PieceKind::Queen),
        ("a7a8r", PieceKind::Rook),
        ("a7a8b", PieceKind::Bishop),
        ("a7a8n", PieceKind::Knight),
    ] {
        let mv: Move = code.parse().unwrap();
        assert_eq!(mv.promotion, Some(kind));
        assert_eq!(mv.to_string(), code);
    }
}

#[test]
fn test_wrong_length_is_rejected() {
    assert_eq!("e2e".parse::<Move>(), Err(ParseMoveError::Length(3)));
    assert_eq!("e2e4e5".parse::<Move>(), Err(ParseMoveError::Length(6)));
    assert_eq!("".parse::<Move>(), Err(ParseMoveError::Length(0)));
}

#[test]
fn test_bad_squares_are_rejected() {
    assert!(matches!(
        "i9e4".parse::<Move>(),
        Err(ParseMoveError::BadSquare(_))
    ));
    assert!(matches!(
        "e2x4".parse::<Move>(),
        Err(ParseMoveError::BadSquare(_))
    ));
}

#[test]
fn test_bad_promotion_letter_is_rejected() {
    assert_eq!(
        "e7e8x".parse::<Move>(),
        Err(ParseMoveError::BadPromotion('x'))
    );
}

#[test]
fn test_degenerate_move_is_rejected() {
    assert!(matches!(
        "e2e2".parse::<Move>(),
        Err(ParseMoveError::NullMove(_))
    ));
}

#[test]
fn test_non_ascii_code_is_rejected() {
    assert!(matches!(
        "é2e4".parse::<Move>(),
        Err(ParseMoveError::Length(_))
    ));
}
