//! Deck building tests.
//!
//! These tests verify the dealt board for every accepted card count:
//! - Exactly the requested number of cards
//! - Every chosen face appears exactly twice
//! - Invalid counts never produce a board

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memory_match::cards::{build_board, AmountBounds, Board, CardAmount, FaceCatalog, FaceId, Visibility};
use memory_match::core::{GameConfig, GameRng, SessionId};
use memory_match::GameError;

fn standard_bounds() -> AmountBounds {
    AmountBounds::for_catalog(&GameConfig::default(), &FaceCatalog::standard()).unwrap()
}

fn face_counts(board: &Board) -> FxHashMap<FaceId, usize> {
    let mut counts = FxHashMap::default();
    for card in board.iter() {
        *counts.entry(card.face).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Four cards from the seven-face deck: two faces, each twice.
#[test]
fn test_four_card_board() {
    let catalog = FaceCatalog::standard();
    let amount = CardAmount::parse("4", standard_bounds()).unwrap();
    let board = build_board(amount, &catalog, SessionId::new(1), &mut GameRng::new(7)).unwrap();

    assert_eq!(board.len(), 4);
    let counts = face_counts(&board);
    assert_eq!(counts.len(), 2);
    assert!(counts.values().all(|&n| n == 2));
    assert!(counts.keys().all(|&face| catalog.contains(face)));
}

/// Fourteen cards use the whole deck.
#[test]
fn test_full_board_uses_every_face() {
    let catalog = FaceCatalog::standard();
    let amount = CardAmount::parse("14", standard_bounds()).unwrap();
    let board = build_board(amount, &catalog, SessionId::new(1), &mut GameRng::new(7)).unwrap();

    let counts = face_counts(&board);
    assert_eq!(counts.len(), 7);
    for face in catalog.ids() {
        assert_eq!(counts.get(&face), Some(&2));
    }
}

/// Fresh boards are all face-down and tagged with their session.
#[test]
fn test_board_starts_hidden() {
    let session = SessionId::new(3);
    let amount = CardAmount::parse("8", standard_bounds()).unwrap();
    let board = build_board(amount, &FaceCatalog::standard(), session, &mut GameRng::new(0)).unwrap();

    assert_eq!(board.session(), session);
    assert_eq!(board.count(Visibility::Hidden), 8);
    for (position, card) in board.iter().enumerate() {
        assert_eq!(card.id.session, session);
        assert_eq!(card.id.index(), position);
    }
}

// =============================================================================
// Validation Tests
// =============================================================================

/// Each kind of bad answer is rejected with the accepted range.
#[test]
fn test_rejected_amounts() {
    let bounds = standard_bounds();
    for input in ["5", "2", "0", "-4", "16", "100", "abc", "", "4.0", "4 cards", "0x4"] {
        let err = CardAmount::parse(input, bounds).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidCardAmount {
                input: input.to_string(),
                min: 4,
                max: 14
            },
            "input {input:?}"
        );
    }
}

/// Surrounding whitespace is not part of the number.
#[test]
fn test_whitespace_is_trimmed() {
    let amount = CardAmount::parse("  6\n", standard_bounds()).unwrap();
    assert_eq!(amount.get(), 6);
    assert_eq!(amount.pairs(), 3);
}

/// A lower configured minimum widens the accepted range.
#[test]
fn test_configured_minimum() {
    let config = GameConfig::default().with_min_card_amount(2);
    let bounds = AmountBounds::for_catalog(&config, &FaceCatalog::standard()).unwrap();

    assert!(bounds.accepts(2));
    assert!(!bounds.accepts(3));
}

/// A board bigger than the catalog can fill is refused.
#[test]
fn test_amount_beyond_catalog() {
    let small = FaceCatalog::new(["a.png", "b.png"]).unwrap();
    let amount = CardAmount::new(6, AmountBounds::new(2, 14)).unwrap();

    assert!(build_board(amount, &small, SessionId::new(1), &mut GameRng::new(1)).is_err());
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same seed, same board.
#[test]
fn test_same_seed_same_board() {
    let catalog = FaceCatalog::standard();
    let amount = CardAmount::parse("12", standard_bounds()).unwrap();

    let a = build_board(amount, &catalog, SessionId::new(1), &mut GameRng::new(99)).unwrap();
    let b = build_board(amount, &catalog, SessionId::new(1), &mut GameRng::new(99)).unwrap();

    assert_eq!(a.faces(), b.faces());
}

/// The catalog itself is never reordered by dealing.
#[test]
fn test_catalog_untouched() {
    let catalog = FaceCatalog::standard();
    let before: Vec<_> = catalog.iter().cloned().collect();
    let amount = CardAmount::parse("14", standard_bounds()).unwrap();

    build_board(amount, &catalog, SessionId::new(1), &mut GameRng::new(5)).unwrap();

    let after: Vec<_> = catalog.iter().cloned().collect();
    assert_eq!(before, after);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Any accepted amount deals `amount` cards with `amount / 2` faces, twice each.
    #[test]
    fn prop_board_pairs(pairs in 2usize..=7, seed in any::<u64>()) {
        let catalog = FaceCatalog::standard();
        let amount = CardAmount::new((pairs * 2) as i64, standard_bounds()).unwrap();
        let board = build_board(amount, &catalog, SessionId::new(1), &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(board.len(), pairs * 2);
        let counts = face_counts(&board);
        prop_assert_eq!(counts.len(), pairs);
        for (face, n) in counts {
            prop_assert_eq!(n, 2);
            prop_assert!(catalog.contains(face));
        }
    }

    /// Odd or out-of-range numbers are never accepted.
    #[test]
    fn prop_invalid_amounts_rejected(value in -50i64..50) {
        let bounds = standard_bounds();
        let valid = value % 2 == 0 && (4..=14).contains(&value);
        prop_assert_eq!(CardAmount::new(value, bounds).is_ok(), valid);
        prop_assert_eq!(CardAmount::parse(&value.to_string(), bounds).is_ok(), valid);
    }
}
