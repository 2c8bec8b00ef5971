//! Board state: where every tile is.
//!
//! ## Key Types
//!
//! - `Column`: Tableau pile, manipulated only at its top
//! - `Board`: Columns, free cells, foundations and removal tallies
//! - `BoardBuilder`: Arbitrary positions for tests and hosts
//!
//! `deal` lays a shuffled deck out into the starting position.

pub mod board;
pub mod column;
pub mod deal;

pub use board::{Board, BoardBuilder};
pub use column::Column;
pub use deal::{deal, FULL_ROWS, PARTIAL_ROW_COLUMNS};
