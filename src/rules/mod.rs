//! Move rules.
//!
//! Player moves are two discrete events:
//! - `pick_up`: lift the exposed card from a column or free cell
//! - `drop`: validate the destination, falling back to the source slot
//!
//! `check_drop` is the pure validator behind `drop`; hosts can use it to
//! highlight legal destinations without touching the board.

pub mod engine;

pub use engine::{check_drop, drop, pick_up, place_with_fallback, DropOutcome, HeldCard};
