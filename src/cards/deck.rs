//! Deck composition and shuffling.
//!
//! The deck always holds 38 tiles:
//! - Red and Green: ranks 1-9, one Dragon, one Flower (11 each)
//! - Black: ranks 1-9 and one Dragon, no Flower (10)
//! - Two extra Dragons per suit, for three Dragons per suit in total

use tracing::trace;

use super::card::{Card, Suit, MAX_RANK};
use crate::core::{RandomSource, ShuffleMode};

/// Number of tiles in a deck.
pub const DECK_SIZE: usize = 38;

/// Dragons per suit.
pub const DRAGONS_PER_SUIT: usize = 3;

/// Suits that carry a Flower.
pub const FLOWER_SUITS: [Suit; 2] = [Suit::Red, Suit::Green];

/// Build the deck in canonical order.
///
/// Each suit's ranks come first, followed by its Dragon and (for Red and
/// Green) its Flower; the extra Dragons close the deck.
///
/// ```
/// use dragon_solitaire::cards::{build_deck, Card, Suit, DECK_SIZE};
///
/// let deck = build_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0], Card::numbered(1, Suit::Red));
/// assert_eq!(deck[10], Card::flower(Suit::Red));
/// ```
#[must_use]
pub fn build_deck() -> [Card; DECK_SIZE] {
    let mut deck = [Card::dragon(Suit::Red); DECK_SIZE];
    let mut next = 0;
    let mut push = |card: Card| {
        deck[next] = card;
        next += 1;
    };

    for suit in Suit::ALL {
        for rank in 1..=MAX_RANK {
            push(Card::numbered(rank, suit));
        }
        push(Card::dragon(suit));
        if FLOWER_SUITS.contains(&suit) {
            push(Card::flower(suit));
        }
    }

    for suit in Suit::ALL {
        for _ in 1..DRAGONS_PER_SUIT {
            push(Card::dragon(suit));
        }
    }

    debug_assert_eq!(next, DECK_SIZE);
    deck
}

/// Reorder `deck` in place using `rng`.
pub fn shuffle<R: RandomSource + ?Sized>(deck: &mut [Card], rng: &mut R, mode: ShuffleMode) {
    match mode {
        ShuffleMode::Uniform => {
            for i in (1..deck.len()).rev() {
                let j = rng.gen_index(i + 1);
                deck.swap(i, j);
            }
        }
        ShuffleMode::LegacySwaps { swaps } => {
            if deck.is_empty() {
                return;
            }
            let len = deck.len() as u32;
            for _ in 0..swaps {
                let a = rng.next_random() % len;
                let b = rng.next_random() % len;
                deck.swap(a as usize, b as usize);
            }
        }
    }
    trace!(?mode, len = deck.len(), "deck shuffled");
}
