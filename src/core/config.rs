//! Game configuration types.
//!
//! Hosts configure a game at startup by providing:
//! - `ShuffleMode`: How the deck is shuffled before the deal
//! - `GeometryConfig`: Where the slots sit in cursor space
//! - `GameConfig`: Combines all configuration with the RNG seed

use serde::{Deserialize, Serialize};

use super::slot::{SlotId, NUM_COLUMNS, NUM_FREE_CELLS};

/// Number of transpositions the legacy shuffle performs.
pub const LEGACY_SWAP_COUNT: u32 = 100;

/// How the deck is reordered before dealing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleMode {
    /// Fisher-Yates; every permutation equally likely.
    #[default]
    Uniform,
    /// Repeated swaps of two independently drawn positions.
    ///
    /// Not a uniform permutation. Kept for replaying deals produced by the
    /// swap-based shuffle.
    LegacySwaps {
        /// Number of swaps to perform.
        swaps: u32,
    },
}

impl ShuffleMode {
    /// The legacy shuffle with its original swap count.
    #[must_use]
    pub const fn legacy() -> Self {
        ShuffleMode::LegacySwaps {
            swaps: LEGACY_SWAP_COUNT,
        }
    }
}

/// Cursor-space layout of the playfield, in pixels.
///
/// The defaults describe a 40-column text screen with 8-pixel characters:
/// each card is 4 characters wide plus a 1-character gap, and the tableau
/// starts 9 character rows below the top of the playfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Cursor x of the playfield's left edge.
    pub origin_x: u16,
    /// Cursor y of the playfield's top edge.
    pub origin_y: u16,
    /// Width of one column band.
    pub column_width: u16,
    /// Distance from the top edge to the first tableau row.
    /// Anything above it is the free-cell row.
    pub tableau_top: u16,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            origin_x: 24,
            origin_y: 50,
            column_width: 40,
            tableau_top: 72,
        }
    }
}

impl GeometryConfig {
    /// Map a cursor position to the slot underneath it.
    ///
    /// Positions left of or above the origin count as the origin. The band
    /// index is clamped to the last column, and in the free-cell row to the
    /// last free cell, so every cursor position addresses some slot.
    ///
    /// ```
    /// use dragon_solitaire::core::{GeometryConfig, SlotId};
    ///
    /// let geometry = GeometryConfig::default();
    /// assert_eq!(geometry.slot_at(24 + 85, 50 + 100), SlotId::Column(2));
    /// assert_eq!(geometry.slot_at(24 + 45, 50 + 10), SlotId::FreeCell(1));
    /// // Right of the third free cell still addresses the third free cell
    /// assert_eq!(geometry.slot_at(24 + 300, 50 + 10), SlotId::FreeCell(2));
    /// ```
    #[must_use]
    pub fn slot_at(&self, x: u16, y: u16) -> SlotId {
        let dx = x.saturating_sub(self.origin_x);
        let dy = y.saturating_sub(self.origin_y);
        let band = usize::from(dx / self.column_width.max(1)).min(NUM_COLUMNS - 1);

        if dy < self.tableau_top {
            SlotId::FreeCell(band.min(NUM_FREE_CELLS - 1))
        } else {
            SlotId::Column(band)
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the shuffle RNG.
    pub seed: u64,

    /// Shuffle algorithm.
    pub shuffle: ShuffleMode,

    /// Cursor layout.
    pub geometry: GeometryConfig,
}

impl GameConfig {
    /// Create a configuration with the given seed and default settings.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the shuffle algorithm.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the cursor layout.
    #[must_use]
    pub fn with_geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = geometry;
        self
    }
}
