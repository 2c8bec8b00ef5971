//! Card model: tiles and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable `(number, suit)` tile
//! - `Suit`: Red, Green or Black
//! - `CardKind`: Numbered tile, Dragon or Flower
//!
//! `build_deck` produces the fixed 38-tile composition and `shuffle`
//! reorders it with a host-supplied `RandomSource`.

pub mod card;
pub mod deck;

pub use card::{Card, CardKind, Suit, DRAGON, FLOWER, MAX_RANK};
pub use deck::{build_deck, shuffle, DECK_SIZE, DRAGONS_PER_SUIT, FLOWER_SUITS};
