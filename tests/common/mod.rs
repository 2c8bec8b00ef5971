//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use dragon_solitaire::cards::{Card, Suit};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test subscriber once per binary. Honours `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Shorthand for a ranked tile.
pub fn c(rank: u8, suit: Suit) -> Card {
    Card::numbered(rank, suit)
}
