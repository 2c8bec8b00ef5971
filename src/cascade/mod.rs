//! Automatic moves.
//!
//! After the deal and after every drop the board is settled by running
//! `resolve`, which repeats `resolve_pass` until nothing changes:
//! - Exposed Flowers are discarded
//! - Exposed cards that continue their suit's foundation are banked
//! - Three exposed Dragons of one suit are collected and removed
//!
//! ## Example
//!
//! ```
//! use dragon_solitaire::cards::{Card, Suit};
//! use dragon_solitaire::cascade::resolve;
//! use dragon_solitaire::core::NullRenderer;
//! use dragon_solitaire::zones::Board;
//!
//! let mut board = Board::builder()
//!     .column(0, &[Card::numbered(2, Suit::Red)])
//!     .column(1, &[Card::numbered(1, Suit::Red)])
//!     .free_cell(0, Card::flower(Suit::Green))
//!     .build();
//!
//! let report = resolve(&mut board, &mut NullRenderer);
//!
//! assert_eq!(board.foundation(Suit::Red), 2);
//! assert_eq!(report.flowers_discarded, 1);
//! assert!(report.solved);
//! ```

mod resolver;

pub use resolver::{resolve, resolve_pass, CascadeReport, PassOutcome};
