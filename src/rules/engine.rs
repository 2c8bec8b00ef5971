//! Move engine: picking a card up and dropping it somewhere else.
//!
//! A move is two calls. `pick_up` lifts the exposed card from a slot and
//! returns a [`HeldCard`] remembering where it came from. `drop` validates
//! the destination; a rejected card goes back to its source slot, which
//! always has room because the card just left it.
//!
//! The engine does not run the cascade. Callers (normally
//! [`Game`](crate::game::Game)) resolve it after every drop.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::{MoveError, RenderSink, SlotId};
use crate::zones::Board;

/// A card lifted off the board, paired with the slot it came from.
///
/// Only [`pick_up`] creates one, so the source slot is always the slot the
/// card actually left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldCard {
    card: Card,
    source: SlotId,
}

impl HeldCard {
    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }

    /// Where the card goes back to if a drop is rejected.
    #[must_use]
    pub fn source(&self) -> SlotId {
        self.source
    }
}

/// Where a dropped card ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// Accepted at the requested slot.
    Placed(SlotId),
    /// Rejected and put back at its source slot.
    Returned {
        /// The source slot the card is back in.
        slot: SlotId,
        /// Why the requested slot refused it.
        reason: MoveError,
    },
}

impl DropOutcome {
    /// The slot now holding the card.
    #[must_use]
    pub fn slot(&self) -> SlotId {
        match *self {
            DropOutcome::Placed(slot) | DropOutcome::Returned { slot, .. } => slot,
        }
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        matches!(self, DropOutcome::Placed(_))
    }

    /// The rejection reason, if the drop was refused.
    #[must_use]
    pub fn rejection(&self) -> Option<MoveError> {
        match *self {
            DropOutcome::Placed(_) => None,
            DropOutcome::Returned { reason, .. } => Some(reason),
        }
    }
}

/// Lift the exposed card out of `slot`.
///
/// Fails with `EmptyPick` and leaves the board untouched if the slot holds
/// no card.
pub fn pick_up(
    board: &mut Board,
    slot: SlotId,
    sink: &mut dyn RenderSink,
) -> Result<HeldCard, MoveError> {
    let card = board.take(slot).ok_or(MoveError::EmptyPick(slot))?;
    sink.redraw(slot.into());
    debug!(%card, %slot, "picked up");
    Ok(HeldCard { card, source: slot })
}

/// Check whether `card` may be dropped onto `dest`.
///
/// Free cells accept any card when empty. Columns refuse Dragons
/// outright; otherwise a non-empty column needs its top card to be exactly
/// one higher and of a different suit, and there must be room.
pub fn check_drop(board: &Board, card: Card, dest: SlotId) -> Result<(), MoveError> {
    match dest {
        SlotId::FreeCell(_) => {
            if board.has_room(dest) {
                Ok(())
            } else {
                Err(MoveError::SlotOccupied(dest))
            }
        }
        SlotId::Column(_) => {
            if card.is_dragon() {
                return Err(MoveError::DragonToColumn);
            }
            if let Some(top) = board.top_card(dest) {
                if card.number() + 1 != top.number() || card.suit() == top.suit() {
                    return Err(MoveError::InvalidSequence);
                }
            }
            if !board.has_room(dest) {
                return Err(MoveError::ColumnFull(dest));
            }
            Ok(())
        }
    }
}

/// Drop a held card onto `dest`, returning it to its source on rejection.
pub fn drop(
    board: &mut Board,
    held: HeldCard,
    dest: SlotId,
    sink: &mut dyn RenderSink,
) -> DropOutcome {
    let outcome = place_with_fallback(board, held.card, dest, held.source, sink);
    match outcome {
        DropOutcome::Placed(slot) => debug!(card = %held.card, %slot, "dropped"),
        DropOutcome::Returned { slot, reason } => {
            debug!(card = %held.card, %dest, %slot, %reason, "drop rejected")
        }
    }
    outcome
}

/// Try `dest`; on rejection put the card into `fallback` without checking
/// game rules.
///
/// `fallback` must have room: it is the slot the card was just lifted
/// from. Panics otherwise, since the card would be lost.
pub fn place_with_fallback(
    board: &mut Board,
    card: Card,
    dest: SlotId,
    fallback: SlotId,
    sink: &mut dyn RenderSink,
) -> DropOutcome {
    let outcome = match check_drop(board, card, dest).and_then(|()| board.place(dest, card)) {
        Ok(()) => DropOutcome::Placed(dest),
        Err(reason) => {
            if let Err(err) = board.place(fallback, card) {
                panic!("source slot {} has no room for returned {}: {}", fallback, card, err);
            }
            DropOutcome::Returned {
                slot: fallback,
                reason,
            }
        }
    };
    sink.redraw(outcome.slot().into());
    outcome
}
