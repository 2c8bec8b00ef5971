//! Game session: glue between host input, the rules and the cascade.
//!
//! A `Game` is created from a `GameConfig` (shuffle, deal, settle) or from
//! any `Board`. The host forwards two debounced events per move:
//! - `press_at(x, y)` picks up the card under the cursor
//! - `release_at(x, y)` drops it under the cursor and settles the board
//!
//! Every mutation is reported to the host's `RenderSink`. The game ends
//! when `is_solved` becomes true.

mod session;

pub use session::{Game, Placement};
