//! Fixed-point resolution of automatic moves.
//!
//! One pass looks at every exposed card (column tops and free cells):
//! - Flowers are discarded
//! - A card one above its suit's foundation is banked
//! - Dragons are counted per suit
//!
//! A suit's Dragon banked on its foundation also counts as exposed. When a
//! suit's count reaches three, every exposed instance of that Dragon
//! leaves the board. Passes repeat until one changes nothing, or until a
//! pass finds no card at all, which means the game is solved.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, trace};

use crate::cards::{Card, Suit, DRAGONS_PER_SUIT};
use crate::core::{RenderSink, RenderTarget, SlotId, NUM_COLUMNS, NUM_FREE_CELLS};
use crate::zones::Board;

/// What a single pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassOutcome {
    /// Some column or free cell held a card when the pass looked.
    pub found_card: bool,
    /// Flowers discarded.
    pub flowers_discarded: u32,
    /// Cards banked onto foundations.
    pub cards_promoted: u32,
    /// Dragon instances removed by collection.
    pub dragons_removed: u32,
    /// Suits whose Dragons were collected.
    pub collected: SmallVec<[Suit; 3]>,
}

impl PassOutcome {
    /// Whether the pass mutated the board.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.flowers_discarded > 0 || self.cards_promoted > 0 || !self.collected.is_empty()
    }
}

/// Summary of a full resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    /// Passes run, including the final one that changed nothing.
    pub passes: u32,
    /// Flowers discarded.
    pub flowers_discarded: u32,
    /// Cards banked onto foundations.
    pub cards_promoted: u32,
    /// Dragon instances removed by collection.
    pub dragons_removed: u32,
    /// Suits whose Dragons were collected, in collection order.
    pub collected: SmallVec<[Suit; 3]>,
    /// No card is left in any column or free cell.
    pub solved: bool,
}

impl CascadeReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any pass mutated the board.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.flowers_discarded > 0 || self.cards_promoted > 0 || !self.collected.is_empty()
    }

    fn absorb(&mut self, pass: &PassOutcome) {
        self.passes += 1;
        self.flowers_discarded += pass.flowers_discarded;
        self.cards_promoted += pass.cards_promoted;
        self.dragons_removed += pass.dragons_removed;
        self.collected.extend(pass.collected.iter().copied());
    }
}

/// Run passes until the board reaches a fixed point or is solved.
pub fn resolve(board: &mut Board, sink: &mut dyn RenderSink) -> CascadeReport {
    let mut report = CascadeReport::new();

    loop {
        let pass = resolve_pass(board, sink);
        report.absorb(&pass);

        if !pass.found_card {
            report.solved = true;
            info!(passes = report.passes, "board cleared");
            break;
        }
        if !pass.changed() {
            break;
        }
    }

    report
}

/// Run a single pass over the board.
pub fn resolve_pass(board: &mut Board, sink: &mut dyn RenderSink) -> PassOutcome {
    let mut pass = PassOutcome::default();
    let mut exposed_dragons = [0usize; 3];

    let slots = (0..NUM_COLUMNS)
        .map(SlotId::Column)
        .chain((0..NUM_FREE_CELLS).map(SlotId::FreeCell));
    for slot in slots {
        examine(board, slot, sink, &mut pass, &mut exposed_dragons);
    }

    for suit in Suit::ALL {
        if board.foundation_holds_dragon(suit) {
            exposed_dragons[suit.index()] += 1;
        }
    }

    for suit in Suit::ALL {
        if exposed_dragons[suit.index()] == DRAGONS_PER_SUIT {
            pass.dragons_removed += collect_dragons(board, suit, sink);
            pass.collected.push(suit);
        }
    }

    trace!(
        found_card = pass.found_card,
        flowers = pass.flowers_discarded,
        promoted = pass.cards_promoted,
        collected = ?pass.collected,
        "cascade pass"
    );
    pass
}

/// Apply the local rules to one exposed card.
fn examine(
    board: &mut Board,
    slot: SlotId,
    sink: &mut dyn RenderSink,
    pass: &mut PassOutcome,
    exposed_dragons: &mut [usize; 3],
) {
    let Some(card) = board.top_card(slot) else {
        return;
    };
    pass.found_card = true;

    if card.is_flower() {
        board.take(slot);
        board.record_flower_discarded();
        sink.redraw(slot.into());
        pass.flowers_discarded += 1;
        return;
    }

    let suit = card.suit();
    if card.number() == board.foundation(suit) + 1 {
        // A banked Dragon is counted from the foundation itself
        board.take(slot);
        board.bank(card);
        sink.redraw(slot.into());
        sink.redraw(RenderTarget::Foundation(suit));
        pass.cards_promoted += 1;
    } else if card.is_dragon() {
        exposed_dragons[suit.index()] += 1;
    }
}

/// Remove every exposed instance of `suit`'s Dragon.
fn collect_dragons(board: &mut Board, suit: Suit, sink: &mut dyn RenderSink) -> u32 {
    let dragon = Card::dragon(suit);
    let mut removed = 0;

    for slot in SlotId::all() {
        if board.top_card(slot) == Some(dragon) {
            board.take(slot);
            board.record_dragon_removed();
            sink.redraw(slot.into());
            removed += 1;
        }
    }

    trace!(?suit, removed, "dragons collected");
    removed
}
