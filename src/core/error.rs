//! Move rejection reasons.
//!
//! Every failure in the engine is a recoverable rule rejection. The card
//! involved goes back where it came from and the board is otherwise
//! unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::slot::SlotId;

/// Why a pick or drop was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The card is not one lower than the column's top card, or shares its suit.
    #[error("card does not continue the descending alternating sequence")]
    InvalidSequence,

    /// Dragons can never be dropped onto a column by hand.
    #[error("dragons cannot be placed onto a column")]
    DragonToColumn,

    /// The free cell already holds a card.
    #[error("{0} is already occupied")]
    SlotOccupied(SlotId),

    /// The column already holds its maximum number of cards.
    #[error("{0} is full")]
    ColumnFull(SlotId),

    /// Nothing to pick up.
    #[error("{0} is empty")]
    EmptyPick(SlotId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_slot() {
        assert_eq!(
            MoveError::SlotOccupied(SlotId::FreeCell(1)).to_string(),
            "FreeCell(1) is already occupied"
        );
        assert_eq!(MoveError::ColumnFull(SlotId::Column(4)).to_string(), "Column(4) is full");
        assert_eq!(MoveError::EmptyPick(SlotId::Column(0)).to_string(), "Column(0) is empty");
    }
}
