//! Core engine types: slot addressing, errors, render requests, RNG,
//! configuration.
//!
//! This module contains the building blocks shared by every other module.
//! Hosts configure a game via `GameConfig` rather than modifying the core.

pub mod slot;
pub mod error;
pub mod render;
pub mod rng;
pub mod config;

pub use slot::{SlotId, COLUMN_CAPACITY, NUM_COLUMNS, NUM_FREE_CELLS};
pub use error::MoveError;
pub use render::{NullRenderer, RedrawLog, RenderSink, RenderTarget};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{GameConfig, GeometryConfig, ShuffleMode, LEGACY_SWAP_COUNT};
