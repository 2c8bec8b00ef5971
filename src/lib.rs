//! # dragon-solitaire
//!
//! Rule engine for a dragon-and-flower solitaire in the Shenzhen family:
//! 8 tableau columns, 3 free cells, 3 suit foundations, 38 tiles.
//!
//! ## Design Principles
//!
//! 1. **No Rendering**: The engine reports which slots changed through a
//!    `RenderSink`; the host owns all drawing.
//!
//! 2. **Injected Randomness**: Shuffling draws from a `RandomSource`. The
//!    seeded `GameRng` makes deals reproducible.
//!
//! 3. **Explicit Interaction State**: The card in hand is a `HeldCard`
//!    value carrying its source slot, not ambient state.
//!
//! ## Modules
//!
//! - `core`: Slot ids, errors, render requests, RNG, configuration
//! - `cards`: Tiles and deck composition
//! - `zones`: Board state and the deal
//! - `rules`: Pick-up and validated drop
//! - `cascade`: Automatic flower discards, promotions, dragon collection
//! - `game`: Session driven by press/release events

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod cascade;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    SlotId, MoveError,
    RenderSink, RenderTarget, NullRenderer, RedrawLog,
    GameRng, GameRngState, RandomSource,
    GameConfig, GeometryConfig, ShuffleMode,
};

pub use crate::cards::{Card, CardKind, Suit, build_deck, shuffle, DECK_SIZE};

pub use crate::zones::{Board, BoardBuilder, Column, deal};

pub use crate::rules::{DropOutcome, HeldCard, check_drop, pick_up, place_with_fallback};

pub use crate::cascade::{CascadeReport, PassOutcome, resolve, resolve_pass};

pub use crate::game::{Game, Placement};
