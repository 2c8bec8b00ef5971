//! The board: columns, free cells, foundations, and removal tallies.
//!
//! ## Conservation
//!
//! Every one of the 38 tiles is always accounted for exactly once:
//!
//! ```text
//! cards in columns + cards in free cells
//!   + sum of foundation values + flowers discarded + dragons removed == 38
//! ```
//!
//! A foundation's value counts the cards banked on it, since a suit is
//! banked strictly in order starting at 1. Value 10 means the suit's 9 was
//! followed by one of its Dragons.

use serde::{Deserialize, Serialize};

use super::column::Column;
use crate::cards::{Card, Suit, DRAGON};
use crate::core::{MoveError, SlotId, COLUMN_CAPACITY, NUM_COLUMNS, NUM_FREE_CELLS};

/// Complete mutable game position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    columns: [Column; NUM_COLUMNS],
    free_cells: [Option<Card>; NUM_FREE_CELLS],
    /// Highest value banked per suit, indexed by `Suit::index`. 0 = empty.
    foundations: [u8; 3],
    flowers_discarded: u8,
    dragons_removed: u8,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building an arbitrary position.
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    // === Slots ===

    /// Get a column. Panics if `index >= NUM_COLUMNS`.
    #[must_use]
    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    /// All columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a free cell's card. Panics if `index >= NUM_FREE_CELLS`.
    #[must_use]
    pub fn free_cell(&self, index: usize) -> Option<Card> {
        self.free_cells[index]
    }

    /// All free cells, left to right.
    #[must_use]
    pub fn free_cells(&self) -> &[Option<Card>] {
        &self.free_cells
    }

    /// The card a slot shows: a column's top card or a free cell's card.
    #[must_use]
    pub fn top_card(&self, slot: SlotId) -> Option<Card> {
        match slot {
            SlotId::Column(i) => self.columns[i].top(),
            SlotId::FreeCell(i) => self.free_cells[i],
        }
    }

    /// Check whether a slot has room for one more card.
    #[must_use]
    pub fn has_room(&self, slot: SlotId) -> bool {
        match slot {
            SlotId::Column(i) => !self.columns[i].is_full(),
            SlotId::FreeCell(i) => self.free_cells[i].is_none(),
        }
    }

    /// Remove and return the card a slot shows.
    pub fn take(&mut self, slot: SlotId) -> Option<Card> {
        match slot {
            SlotId::Column(i) => self.columns[i].pop(),
            SlotId::FreeCell(i) => self.free_cells[i].take(),
        }
    }

    /// Put a card into a slot, checking capacity only.
    ///
    /// Game rules (sequence, suit, dragons) are the move engine's concern.
    pub fn place(&mut self, slot: SlotId, card: Card) -> Result<(), MoveError> {
        match slot {
            SlotId::Column(i) => self.columns[i]
                .push(card)
                .map_err(|_| MoveError::ColumnFull(slot)),
            SlotId::FreeCell(i) => {
                let cell = &mut self.free_cells[i];
                if cell.is_some() {
                    return Err(MoveError::SlotOccupied(slot));
                }
                *cell = Some(card);
                Ok(())
            }
        }
    }

    // === Foundations ===

    /// Highest value banked for a suit (0 when nothing is banked).
    #[must_use]
    pub fn foundation(&self, suit: Suit) -> u8 {
        self.foundations[suit.index()]
    }

    /// Foundation values in suit order.
    #[must_use]
    pub fn foundations(&self) -> [u8; 3] {
        self.foundations
    }

    /// Whether the foundation's last banked card is the suit's Dragon.
    #[must_use]
    pub fn foundation_holds_dragon(&self, suit: Suit) -> bool {
        self.foundation(suit) == DRAGON
    }

    /// Bank `card` on its suit's foundation.
    pub(crate) fn bank(&mut self, card: Card) {
        let slot = &mut self.foundations[card.suit().index()];
        debug_assert_eq!(card.number(), *slot + 1, "foundation must advance by one");
        *slot = card.number();
    }

    // === Tallies ===

    /// Flowers removed from play so far.
    #[must_use]
    pub fn flowers_discarded(&self) -> u8 {
        self.flowers_discarded
    }

    /// Dragons removed from play by collecting them.
    #[must_use]
    pub fn dragons_removed(&self) -> u8 {
        self.dragons_removed
    }

    pub(crate) fn record_flower_discarded(&mut self) {
        self.flowers_discarded += 1;
    }

    pub(crate) fn record_dragon_removed(&mut self) {
        self.dragons_removed += 1;
    }

    // === Counting ===

    /// Cards still in columns or free cells.
    #[must_use]
    pub fn cards_on_table(&self) -> usize {
        let in_columns: usize = self.columns.iter().map(Column::len).sum();
        let in_cells = self.free_cells.iter().flatten().count();
        in_columns + in_cells
    }

    /// Every card the board accounts for, on the table or removed.
    ///
    /// Equals `DECK_SIZE` for any position reached from a deal.
    #[must_use]
    pub fn accounted_cards(&self) -> usize {
        let banked: usize = self.foundations.iter().map(|&v| usize::from(v)).sum();
        self.cards_on_table()
            + banked
            + usize::from(self.flowers_discarded)
            + usize::from(self.dragons_removed)
    }

    /// No card left in any column or free cell.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.columns.iter().all(Column::is_empty) && self.free_cells.iter().all(Option::is_none)
    }
}

impl std::fmt::Display for Board {
    /// Text dump: free cells and foundations, then one line per column.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.free_cells {
            match cell {
                Some(card) => write!(f, "[{}]", card)?,
                None => write!(f, "[  ]")?,
            }
        }
        write!(f, "  ")?;
        for (suit, value) in Suit::ALL.iter().zip(self.foundations) {
            write!(f, " {:?}:{}", suit, value)?;
        }
        writeln!(f)?;

        for (i, column) in self.columns.iter().enumerate() {
            write!(f, "{}:", i)?;
            for card in column.cards() {
                write!(f, " {}", card)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builder for arbitrary board positions.
///
/// ```
/// use dragon_solitaire::cards::{Card, Suit};
/// use dragon_solitaire::zones::Board;
///
/// let board = Board::builder()
///     .column(0, &[Card::numbered(5, Suit::Green)])
///     .free_cell(1, Card::dragon(Suit::Red))
///     .foundation(Suit::Black, 3)
///     .build();
///
/// assert_eq!(board.column(0).len(), 1);
/// assert_eq!(board.foundation(Suit::Black), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    /// Replace a column's contents, bottom to top.
    ///
    /// Panics if more than `COLUMN_CAPACITY` cards are given.
    #[must_use]
    pub fn column(mut self, index: usize, cards: &[Card]) -> Self {
        assert!(
            cards.len() <= COLUMN_CAPACITY,
            "column {} given {} cards, capacity is {}",
            index,
            cards.len(),
            COLUMN_CAPACITY
        );
        let column = &mut self.board.columns[index];
        *column = Column::new();
        for &card in cards {
            if let Err(card) = column.push(card) {
                unreachable!("column {} overflowed at {}", index, card);
            }
        }
        self
    }

    /// Put a card into a free cell.
    #[must_use]
    pub fn free_cell(mut self, index: usize, card: Card) -> Self {
        self.board.free_cells[index] = Some(card);
        self
    }

    /// Set a foundation value. Panics above `DRAGON`.
    #[must_use]
    pub fn foundation(mut self, suit: Suit, value: u8) -> Self {
        assert!(value <= DRAGON, "foundation value {} out of range", value);
        self.board.foundations[suit.index()] = value;
        self
    }

    /// Set the discarded flower tally.
    #[must_use]
    pub fn flowers_discarded(mut self, count: u8) -> Self {
        self.board.flowers_discarded = count;
        self
    }

    /// Set the removed dragon tally.
    #[must_use]
    pub fn dragons_removed(mut self, count: u8) -> Self {
        self.board.dragons_removed = count;
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
