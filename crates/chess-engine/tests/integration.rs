//! End-to-end scenarios through the public API.

use chess_core::{CastleSide, Color, Move, PieceId, PieceKind, Promotion, Square};
use chess_engine::{perft, Game, GameError, Position};
use proptest::prelude::*;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn id(s: &str) -> PieceId {
    PieceId::parse(s).unwrap()
}

#[test]
fn en_passant_after_double_step() {
    let mut game = Game::new();

    game.play("e2-e4").unwrap();
    let record = *game.position().registry().lookup(id("BP5")).unwrap();
    assert!(record.just_double_stepped);
    assert!(record.has_moved);

    game.play("a7-a6").unwrap();
    game.play("e4-e5").unwrap();
    game.play("d7-d5").unwrap();

    let ep = Move::en_passant(sq("e5"), sq("d6"));
    assert!(game.position().moves_for(id("BP5")).contains(&ep));

    assert_eq!(game.play("e5-d6").unwrap(), ep);
    let position = game.position();
    assert_eq!(position.board().get(sq("d6")), Some(id("BP5")));
    assert!(position.board().is_empty(sq("e5")));
    assert!(position.board().is_empty(sq("d5")));
    assert!(!position.contains(id("NP4")));
    assert_eq!(position.count_color(Color::Black), 15);
    assert!(position.is_consistent());
}

#[test]
fn en_passant_not_offered_after_single_steps() {
    let mut game = Game::new();
    for text in ["e2-e4", "d7-d6", "e4-e5", "d6-d5"] {
        game.play(text).unwrap();
    }
    assert!(!game
        .position()
        .moves_for(id("BP5"))
        .iter()
        .any(|m| matches!(m, Move::EnPassant { .. })));
    assert!(matches!(
        game.play("e5-d6"),
        Err(GameError::IllegalMove(_))
    ));
}

#[test]
fn kingside_castle_with_clear_corridor() {
    let mut game = Game::new();
    for text in ["e2-e4", "e7-e5", "g1-f3", "b8-c6", "f1-e2", "g8-f6"] {
        game.play(text).unwrap();
    }

    let castle = Move::castle(Color::White, CastleSide::Kingside);
    assert!(game.legal_moves().contains(&castle));
    game.play_move(castle).unwrap();

    let position = game.position();
    assert_eq!(position.board().get(sq("g1")), Some(id("BR1")));
    assert_eq!(position.board().get(sq("f1")), Some(id("BT2")));
    assert!(position.board().is_empty(sq("e1")));
    assert!(position.board().is_empty(sq("h1")));
    assert!(position.registry().lookup(id("BR1")).unwrap().has_moved);
    assert!(position.registry().lookup(id("BT2")).unwrap().has_moved);
    assert!(position.is_consistent());
}

#[test]
fn king_move_forfeits_castling_permanently() {
    let mut game = Game::new();
    for text in [
        "e2-e4", "e7-e5", "g1-f3", "b8-c6", "f1-e2", "g8-f6", "e1-f1", "a7-a6", "f1-e1", "a6-a5",
    ] {
        game.play(text).unwrap();
    }
    assert_eq!(game.position().locate(id("BR1")), Some(sq("e1")));
    assert!(!game.legal_moves().iter().any(|m| m.is_castle()));
    assert!(matches!(
        game.play("O-O"),
        Err(GameError::IllegalMove(_))
    ));
}

#[test]
fn promotion_numbers_the_new_piece() {
    let position = Position::from_layout(
        "... ... ... ... NR1 ... ... ...
         BP1 ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... ...
         BT1 ... ... ... BR1 ... ... BT2",
        Color::White,
    )
    .unwrap();

    let promotions: Vec<Move> = position
        .moves_for(id("BP1"))
        .into_iter()
        .filter(|m| matches!(m, Move::Promotion { .. }))
        .collect();
    assert_eq!(promotions.len(), 4);

    let mut game = Game::from_position(position);
    let mv = game.play("a7-a8=T").unwrap();
    assert_eq!(
        mv,
        Move::Promotion {
            from: sq("a7"),
            to: sq("a8"),
            piece: Promotion::Rook
        }
    );

    let position = game.position();
    assert_eq!(position.board().get(sq("a8")), Some(id("BT3")));
    assert!(!position.contains(id("BP1")));
    assert_eq!(position.count(Color::White, PieceKind::Rook), 3);
    assert_eq!(position.count(Color::White, PieceKind::Pawn), 0);
    assert!(position.registry().lookup(id("BT3")).unwrap().has_moved);
    assert!(position.is_consistent());
}

#[test]
fn promotion_never_duplicates_an_id() {
    let position = Position::from_layout(
        "... ... ... ... NR1 ... ... ...
         BP1 ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... ...
         ... ... ... ... ... ... ... BQ255
         ... ... ... ... BR1 ... ... ...",
        Color::White,
    )
    .unwrap();

    let mut game = Game::from_position(position);
    game.play("a7-a8=Q").unwrap();

    let position = game.position();
    let queens = position
        .board()
        .occupants()
        .filter(|(_, occupant)| *occupant == id("BQ255"))
        .count();
    assert_eq!(queens, 1);
    assert_eq!(position.board().get(sq("a8")), Some(id("BP1")));
    assert!(position.is_consistent());
}

#[test]
fn promotion_to_king_is_rejected() {
    assert!(Move::promotion(sq("a7"), sq("a8"), PieceKind::King).is_err());
    assert!(Move::promotion(sq("a7"), sq("a8"), PieceKind::Pawn).is_err());
}

#[test]
fn perft_startpos() {
    let position = Position::startpos();
    assert_eq!(perft(&position, 1), 20);
    assert_eq!(perft(&position, 2), 400);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random playouts keep the registry and the board describing the same
    /// pieces after every move.
    #[test]
    fn random_playouts_stay_consistent(choices in prop::collection::vec(any::<prop::sample::Index>(), 0..60)) {
        let mut position = Position::startpos();
        for choice in choices {
            let moves = position.candidate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice.index(moves.len())];
            position.apply(mv).unwrap();
            prop_assert!(position.is_consistent(), "after {}:\n{}", mv, position);
        }
    }
}
