//! Move engine integration tests.
//!
//! These tests drive pick-up and drop through a `Game`, so every move is
//! followed by the cascade exactly as in play.

mod common;

use common::{c, init_tracing};
use dragon_solitaire::cards::{Card, Suit, DECK_SIZE};
use dragon_solitaire::core::{
    GeometryConfig, MoveError, NullRenderer, RedrawLog, RenderTarget, SlotId, COLUMN_CAPACITY,
};
use dragon_solitaire::game::Game;
use dragon_solitaire::rules::DropOutcome;
use dragon_solitaire::zones::Board;

/// Column 0 topped by Green 5; column 1 holds the card under test.
fn game_with_mover(mover: Card) -> Game {
    init_tracing();
    let board = Board::builder()
        .column(0, &[c(8, Suit::Black), c(5, Suit::Green)])
        .column(1, &[c(9, Suit::Red), mover])
        .build();
    Game::from_board(board, GeometryConfig::default(), &mut NullRenderer)
}

fn move_card(game: &mut Game, from: SlotId, to: SlotId) -> DropOutcome {
    game.pick(from, &mut NullRenderer).expect("source should hold a card");
    game.place(to, &mut NullRenderer).expect("a card is held").outcome
}

// =============================================================================
// Column Validation
// =============================================================================

/// Red 4 onto Green 5 is accepted and becomes the new top.
#[test]
fn test_descending_other_suit_accepted() {
    let mut game = game_with_mover(c(4, Suit::Red));

    let outcome = move_card(&mut game, SlotId::Column(1), SlotId::Column(0));

    assert_eq!(outcome, DropOutcome::Placed(SlotId::Column(0)));
    assert_eq!(game.board().column(0).top(), Some(c(4, Suit::Red)));
    assert_eq!(game.board().column(1).top(), Some(c(9, Suit::Red)));
}

/// Green 4 onto Green 5 shares the suit and goes back.
#[test]
fn test_same_suit_rejected() {
    let mut game = game_with_mover(c(4, Suit::Green));
    let before = game.board().clone();

    let outcome = move_card(&mut game, SlotId::Column(1), SlotId::Column(0));

    assert_eq!(outcome.rejection(), Some(MoveError::InvalidSequence));
    assert_eq!(outcome.slot(), SlotId::Column(1));
    assert_eq!(game.board(), &before);
}

/// Red 3 onto Green 5 skips a rank and goes back.
#[test]
fn test_wrong_rank_rejected() {
    let mut game = game_with_mover(c(3, Suit::Red));
    let before = game.board().clone();

    let outcome = move_card(&mut game, SlotId::Column(1), SlotId::Column(0));

    assert_eq!(outcome.rejection(), Some(MoveError::InvalidSequence));
    assert_eq!(game.board(), &before);
}

/// Dragons never land on a column, whatever the column holds.
#[test]
fn test_dragon_rejected_on_every_column() {
    for suit in Suit::ALL {
        let board = Board::builder()
            .column(0, &[c(8, Suit::Black), c(5, Suit::Green)])
            .column(1, &[c(9, Suit::Red)])
            .free_cell(0, Card::dragon(suit))
            .build();
        let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);

        for dest in 0..8 {
            let outcome = move_card(&mut game, SlotId::FreeCell(0), SlotId::Column(dest));

            assert_eq!(outcome.rejection(), Some(MoveError::DragonToColumn));
            assert_eq!(game.board().free_cell(0), Some(Card::dragon(suit)));
        }
    }
}

/// A valid card onto a full column goes back.
#[test]
fn test_full_column_rejected() {
    let mut cards = vec![Card::dragon(Suit::Black); COLUMN_CAPACITY - 1];
    cards.push(c(6, Suit::Black));
    let board = Board::builder()
        .column(0, &cards)
        .column(1, &[c(9, Suit::Green), c(5, Suit::Red)])
        .build();
    let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);

    let outcome = move_card(&mut game, SlotId::Column(1), SlotId::Column(0));

    assert_eq!(outcome.rejection(), Some(MoveError::ColumnFull(SlotId::Column(0))));
    assert_eq!(game.board().column(0).len(), COLUMN_CAPACITY);
    assert_eq!(game.board().column(1).top(), Some(c(5, Suit::Red)));
}

/// Any non-dragon may start an empty column.
#[test]
fn test_empty_column_accepts_card() {
    let mut game = game_with_mover(c(7, Suit::Black));

    let outcome = move_card(&mut game, SlotId::Column(1), SlotId::Column(6));

    assert_eq!(outcome, DropOutcome::Placed(SlotId::Column(6)));
    assert_eq!(game.board().column(6).cards(), &[c(7, Suit::Black)]);
}

// =============================================================================
// Free Cells
// =============================================================================

/// Occupied free cells refuse; the card returns to its column.
#[test]
fn test_occupied_free_cell_rejected() {
    let board = Board::builder()
        .column(0, &[c(9, Suit::Black), c(6, Suit::Green)])
        .free_cell(2, c(8, Suit::Red))
        .build();
    let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);

    let outcome = move_card(&mut game, SlotId::Column(0), SlotId::FreeCell(2));

    assert_eq!(outcome.rejection(), Some(MoveError::SlotOccupied(SlotId::FreeCell(2))));
    assert_eq!(game.board().column(0).top(), Some(c(6, Suit::Green)));
    assert_eq!(game.board().free_cell(2), Some(c(8, Suit::Red)));
}

/// A card rejected after leaving a free cell goes back to that free cell.
#[test]
fn test_rejection_returns_to_free_cell_source() {
    let board = Board::builder()
        .column(0, &[c(9, Suit::Black), c(5, Suit::Green)])
        .free_cell(1, c(2, Suit::Green))
        .build();
    let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);

    let outcome = move_card(&mut game, SlotId::FreeCell(1), SlotId::Column(0));

    assert_eq!(outcome.slot(), SlotId::FreeCell(1));
    assert_eq!(game.board().free_cell(1), Some(c(2, Suit::Green)));
}

/// Moving between free cells is allowed, including dragons.
#[test]
fn test_free_cell_to_free_cell() {
    let board = Board::builder()
        .column(0, &[c(9, Suit::Black)])
        .free_cell(0, Card::dragon(Suit::Green))
        .build();
    let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);

    let outcome = move_card(&mut game, SlotId::FreeCell(0), SlotId::FreeCell(2));

    assert_eq!(outcome, DropOutcome::Placed(SlotId::FreeCell(2)));
    assert_eq!(game.board().free_cell(0), None);
    assert_eq!(game.board().free_cell(2), Some(Card::dragon(Suit::Green)));
}

// =============================================================================
// Interaction With The Cascade
// =============================================================================

/// Uncovering a rank-1 card by moving the card above it banks it at once.
#[test]
fn test_move_uncovers_promotion() {
    let board = Board::builder()
        .column(0, &[c(1, Suit::Black), c(4, Suit::Red)])
        .column(1, &[c(9, Suit::Green), c(5, Suit::Green)])
        .build();
    let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);
    let mut log = RedrawLog::new();

    game.pick(SlotId::Column(0), &mut log).unwrap();
    let placement = game.place(SlotId::Column(1), &mut log).unwrap();

    assert!(placement.outcome.is_placed());
    assert_eq!(placement.cascade.cards_promoted, 1);
    assert_eq!(game.board().foundation(Suit::Black), 1);
    assert!(game.board().column(0).is_empty());
    assert!(log.contains(RenderTarget::Foundation(Suit::Black)));
    assert_eq!(game.board().cards_on_table(), 3);
    assert_eq!(game.board().accounted_cards(), 4);
}

/// A plain move redraws exactly its source and destination.
#[test]
fn test_redraws_cover_source_and_destination() {
    let mut game = game_with_mover(c(4, Suit::Black));
    let mut log = RedrawLog::new();

    game.pick(SlotId::Column(1), &mut log).unwrap();
    game.place(SlotId::Column(0), &mut log).unwrap();

    let dirty = log.dirty();
    assert!(dirty.contains(&RenderTarget::Slot(SlotId::Column(1))));
    assert!(dirty.contains(&RenderTarget::Slot(SlotId::Column(0))));
    assert_eq!(dirty.len(), 2);
}

/// A rejected drop redraws only the source slot, never the refused target.
#[test]
fn test_rejected_drop_redraws_only_source() {
    let mut game = game_with_mover(c(4, Suit::Green));
    let mut log = RedrawLog::new();

    game.pick(SlotId::Column(1), &mut log).unwrap();
    let placement = game.place(SlotId::Column(0), &mut log).unwrap();

    assert_eq!(placement.outcome.rejection(), Some(MoveError::InvalidSequence));
    assert!(log.contains(SlotId::Column(1)));
    assert!(!log.contains(SlotId::Column(0)));
    assert_eq!(
        log.dirty().into_iter().collect::<Vec<_>>(),
        vec![RenderTarget::Slot(SlotId::Column(1))]
    );
}

/// Full games from a seed keep every card accounted for while moving.
#[test]
fn test_seeded_game_moves_conserve_cards() {
    use dragon_solitaire::core::GameConfig;

    init_tracing();
    let mut game = Game::new(&GameConfig::new(2024), &mut NullRenderer);
    let slots: Vec<SlotId> = SlotId::all().collect();

    for (i, &from) in slots.iter().enumerate() {
        let to = slots[(i * 5 + 3) % slots.len()];
        if game.pick(from, &mut NullRenderer).is_ok() {
            game.place(to, &mut NullRenderer);
        }
        assert_eq!(game.board().accounted_cards(), DECK_SIZE);
        assert!(game.held().is_none());
    }
}
