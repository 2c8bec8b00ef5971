//! Dealing a shuffled deck onto the board.

use tracing::debug;

use super::board::Board;
use crate::cards::{Card, DECK_SIZE};
use crate::core::{SlotId, NUM_COLUMNS};

/// Full rows dealt across every column.
pub const FULL_ROWS: usize = 4;

/// Columns that receive a card in the final, partial row.
pub const PARTIAL_ROW_COLUMNS: usize = DECK_SIZE - FULL_ROWS * NUM_COLUMNS;

/// Deal `deck` row by row.
///
/// Four passes place the first 32 cards into all eight columns; a fifth
/// pass places the remaining six into columns 0-5. Free cells and
/// foundations start empty. The cascade has not run yet.
///
/// ```
/// use dragon_solitaire::cards::build_deck;
/// use dragon_solitaire::zones::deal;
///
/// let board = deal(&build_deck());
/// assert_eq!(board.column(0).len(), 5);
/// assert_eq!(board.column(7).len(), 4);
/// ```
#[must_use]
pub fn deal(deck: &[Card; DECK_SIZE]) -> Board {
    let mut board = Board::new();
    let slots = (0..FULL_ROWS)
        .flat_map(|_| 0..NUM_COLUMNS)
        .chain(0..PARTIAL_ROW_COLUMNS)
        .map(SlotId::Column);

    for (slot, &card) in slots.zip(deck.iter()) {
        if let Err(err) = board.place(slot, card) {
            unreachable!("deal overflowed {}: {}", slot, err);
        }
    }

    debug!(on_table = board.cards_on_table(), "deck dealt");
    board
}
