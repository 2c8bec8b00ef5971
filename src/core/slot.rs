//! Slot addressing.
//!
//! A slot is a place the player can pick a card from or drop a card onto:
//! one of the tableau columns or one of the free cells. Foundations are
//! filled only by the cascade and are never addressed by input.

use serde::{Deserialize, Serialize};

/// Number of tableau columns.
pub const NUM_COLUMNS: usize = 8;

/// Maximum cards a single column can hold.
pub const COLUMN_CAPACITY: usize = 10;

/// Number of free cells.
pub const NUM_FREE_CELLS: usize = 3;

/// Identifies a column or a free cell.
///
/// Indices are 0-based. Board accessors panic on an out-of-range index,
/// the same way slice indexing does.
///
/// ```
/// use dragon_solitaire::core::SlotId;
///
/// assert!(SlotId::Column(3).is_column());
/// assert_eq!(SlotId::FreeCell(1).index(), 1);
/// assert_eq!(format!("{}", SlotId::Column(7)), "Column(7)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotId {
    /// Tableau column `0..8`.
    Column(usize),
    /// Free cell `0..3`.
    FreeCell(usize),
}

impl SlotId {
    /// Iterate over every addressable slot: columns first, then free cells.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (0..NUM_COLUMNS)
            .map(SlotId::Column)
            .chain((0..NUM_FREE_CELLS).map(SlotId::FreeCell))
    }

    /// Raw index within the slot's group.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SlotId::Column(i) | SlotId::FreeCell(i) => i,
        }
    }

    #[must_use]
    pub const fn is_column(self) -> bool {
        matches!(self, SlotId::Column(_))
    }

    #[must_use]
    pub const fn is_free_cell(self) -> bool {
        matches!(self, SlotId::FreeCell(_))
    }

    /// Check that the index exists on a standard board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            SlotId::Column(i) => i < NUM_COLUMNS,
            SlotId::FreeCell(i) => i < NUM_FREE_CELLS,
        }
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotId::Column(i) => write!(f, "Column({})", i),
            SlotId::FreeCell(i) => write!(f, "FreeCell({})", i),
        }
    }
}
