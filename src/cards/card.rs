//! Tiles: suits, numbers, dragons and flowers.
//!
//! A `Card` is an immutable `(number, suit)` pair. Numbers 1-9 are ranked
//! tiles, 10 is the suit's Dragon and 11 its Flower. The "no card" state is
//! `Option<Card>::None`, never a special `Card` value.

use serde::{Deserialize, Serialize};

/// Highest ranked number.
pub const MAX_RANK: u8 = 9;

/// Number used for Dragons.
pub const DRAGON: u8 = 10;

/// Number used for Flowers.
pub const FLOWER: u8 = 11;

/// Tile suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Red,
    Green,
    Black,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 3] = [Suit::Red, Suit::Green, Suit::Black];

    /// Foundation index: Red = 0, Green = 1, Black = 2.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Red => 0,
            Suit::Green => 1,
            Suit::Black => 2,
        }
    }

    /// Inverse of [`Suit::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Suit> {
        match index {
            0 => Some(Suit::Red),
            1 => Some(Suit::Green),
            2 => Some(Suit::Black),
            _ => None,
        }
    }

    const fn letter(self) -> char {
        match self {
            Suit::Red => 'R',
            Suit::Green => 'G',
            Suit::Black => 'B',
        }
    }
}

/// What a card is, independent of suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// Ranked tile 1-9.
    Numbered(u8),
    Dragon,
    Flower,
}

/// A single tile.
///
/// ```
/// use dragon_solitaire::cards::{Card, CardKind, Suit};
///
/// let five = Card::numbered(5, Suit::Green);
/// assert_eq!(five.kind(), CardKind::Numbered(5));
/// assert_eq!(five.to_string(), "G5");
///
/// let byte = Card::dragon(Suit::Red).to_byte();
/// assert_eq!(Card::from_byte(byte), Some(Card::dragon(Suit::Red)));
/// assert_eq!(Card::from_byte(0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    number: u8,
    suit: Suit,
}

impl Card {
    /// Create a card, rejecting numbers outside `1..=11`.
    #[must_use]
    pub const fn new(number: u8, suit: Suit) -> Option<Card> {
        if number >= 1 && number <= FLOWER {
            Some(Card { number, suit })
        } else {
            None
        }
    }

    /// Ranked tile. Panics if `rank` is not in `1..=9`.
    #[must_use]
    pub const fn numbered(rank: u8, suit: Suit) -> Card {
        assert!(rank >= 1 && rank <= MAX_RANK, "rank must be 1..=9");
        Card { number: rank, suit }
    }

    #[must_use]
    pub const fn dragon(suit: Suit) -> Card {
        Card { number: DRAGON, suit }
    }

    #[must_use]
    pub const fn flower(suit: Suit) -> Card {
        Card { number: FLOWER, suit }
    }

    /// Raw number: 1-9, 10 for Dragons, 11 for Flowers.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self.number {
            DRAGON => CardKind::Dragon,
            FLOWER => CardKind::Flower,
            n => CardKind::Numbered(n),
        }
    }

    #[must_use]
    pub const fn is_dragon(self) -> bool {
        self.number == DRAGON
    }

    #[must_use]
    pub const fn is_flower(self) -> bool {
        self.number == FLOWER
    }

    /// Pack into one byte: suit in the high nibble, number in the low one.
    ///
    /// Suits are stored as `index + 1` so that no card encodes to `0`.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        ((self.suit.index() as u8 + 1) << 4) | self.number
    }

    /// Unpack a byte produced by [`Card::to_byte`]. `0` and malformed
    /// bytes decode to `None`.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Card> {
        let suit = match Suit::from_index(((byte >> 4) as usize).wrapping_sub(1)) {
            Some(suit) => suit,
            None => return None,
        };
        Card::new(byte & 0x0f, suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            CardKind::Numbered(n) => write!(f, "{}{}", self.suit.letter(), n),
            CardKind::Dragon => write!(f, "{}D", self.suit.letter()),
            CardKind::Flower => write!(f, "{}F", self.suit.letter()),
        }
    }
}
