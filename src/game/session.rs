//! A game in progress.

use tracing::{debug, info};

use crate::cards::{build_deck, shuffle, Card};
use crate::cascade::{resolve, CascadeReport};
use crate::core::{
    GameConfig, GameRng, GeometryConfig, MoveError, RandomSource, RenderSink, SlotId,
};
use crate::rules::{self, DropOutcome, HeldCard};
use crate::zones::{deal, Board};

/// Result of placing the held card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Where the card went.
    pub outcome: DropOutcome,
    /// What the cascade did afterwards.
    pub cascade: CascadeReport,
}

/// One game: the board, the card in hand, and the cursor layout.
///
/// Input arrives as two events per move. A press lifts the card under the
/// cursor; the matching release drops it under the cursor, then the
/// cascade settles the board.
///
/// ```
/// use dragon_solitaire::core::{GameConfig, NullRenderer};
/// use dragon_solitaire::game::Game;
///
/// let game = Game::new(&GameConfig::new(42), &mut NullRenderer);
/// assert_eq!(game.board().accounted_cards(), 38);
/// assert!(game.held().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    held: Option<HeldCard>,
    geometry: GeometryConfig,
    solved: bool,
}

impl Game {
    /// Shuffle with the configured seed, deal, and settle.
    #[must_use]
    pub fn new(config: &GameConfig, sink: &mut dyn RenderSink) -> Self {
        let mut rng = GameRng::new(config.seed);
        debug!(seed = config.seed, "seeded deal");
        Self::with_rng(config, &mut rng, sink)
    }

    /// Like [`Game::new`], drawing randomness from a host-supplied source.
    /// `config.seed` is ignored.
    #[must_use]
    pub fn with_rng(
        config: &GameConfig,
        rng: &mut dyn RandomSource,
        sink: &mut dyn RenderSink,
    ) -> Self {
        let mut deck = build_deck();
        shuffle(&mut deck, rng, config.shuffle);
        debug!(shuffle = ?config.shuffle, "new game");
        Self::from_board(deal(&deck), config.geometry, sink)
    }

    /// Start from an arbitrary position. The cascade runs first, as it
    /// does after a deal.
    #[must_use]
    pub fn from_board(board: Board, geometry: GeometryConfig, sink: &mut dyn RenderSink) -> Self {
        let mut game = Self {
            board,
            held: None,
            geometry,
            solved: false,
        };
        for slot in SlotId::all() {
            sink.redraw(slot.into());
        }
        game.settle(sink);
        game
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The card in hand, if any.
    #[must_use]
    pub fn held(&self) -> Option<HeldCard> {
        self.held
    }

    #[must_use]
    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// No card is left in any column or free cell.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    // === Input ===

    /// Press at a cursor position: pick up the card under it.
    pub fn press_at(&mut self, x: u16, y: u16, sink: &mut dyn RenderSink) -> Result<Card, MoveError> {
        let slot = self.geometry.slot_at(x, y);
        self.pick(slot, sink)
    }

    /// Release at a cursor position: drop the held card under it.
    ///
    /// Returns `None` when nothing is held.
    pub fn release_at(&mut self, x: u16, y: u16, sink: &mut dyn RenderSink) -> Option<Placement> {
        let slot = self.geometry.slot_at(x, y);
        self.place(slot, sink)
    }

    /// Pick up the exposed card in `slot`.
    ///
    /// While a card is already held the board is left alone and the held
    /// card is returned.
    pub fn pick(&mut self, slot: SlotId, sink: &mut dyn RenderSink) -> Result<Card, MoveError> {
        if let Some(held) = self.held {
            debug!(card = %held.card(), %slot, "pick ignored, card already held");
            return Ok(held.card());
        }
        let held = rules::pick_up(&mut self.board, slot, sink)?;
        self.held = Some(held);
        Ok(held.card())
    }

    /// Drop the held card onto `slot`, then settle the board.
    ///
    /// Returns `None` when nothing is held.
    pub fn place(&mut self, slot: SlotId, sink: &mut dyn RenderSink) -> Option<Placement> {
        let held = self.held.take()?;
        let outcome = rules::drop(&mut self.board, held, slot, sink);
        let cascade = self.settle(sink);
        Some(Placement { outcome, cascade })
    }

    fn settle(&mut self, sink: &mut dyn RenderSink) -> CascadeReport {
        let report = resolve(&mut self.board, sink);
        if report.solved && !self.solved {
            info!("game solved");
        }
        self.solved = report.solved;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Suit, DECK_SIZE};
    use crate::core::{NullRenderer, RedrawLog, ShuffleMode};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn c(rank: u8, suit: Suit) -> Card {
        Card::numbered(rank, suit)
    }

    #[test]
    fn test_new_game_conserves_cards() {
        for seed in 0..20 {
            let game = Game::new(&GameConfig::new(seed), &mut NullRenderer);
            assert_eq!(game.board().accounted_cards(), DECK_SIZE);
        }
    }

    /// Records the field names of every event, one list per event.
    #[derive(Clone, Default)]
    struct FieldNames(Arc<Mutex<Vec<Vec<&'static str>>>>);

    impl<S: tracing::Subscriber> Layer<S> for FieldNames {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let names = event.fields().map(|field| field.name()).collect();
            self.0.lock().unwrap().push(names);
        }
    }

    fn logged_fields(run: impl FnOnce()) -> Vec<Vec<&'static str>> {
        let layer = FieldNames::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, run);
        let fields = layer.0.lock().unwrap().clone();
        fields
    }

    #[test]
    fn test_host_rng_game_does_not_log_seed() {
        struct Counter(u32);
        impl RandomSource for Counter {
            fn next_random(&mut self) -> u32 {
                self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                self.0
            }
        }

        let fields = logged_fields(|| {
            let _ = Game::with_rng(&GameConfig::new(77), &mut Counter(1), &mut NullRenderer);
        });

        assert!(!fields.is_empty());
        assert!(fields.iter().all(|names| !names.contains(&"seed")));
    }

    #[test]
    fn test_seeded_game_logs_seed() {
        let fields = logged_fields(|| {
            let _ = Game::new(&GameConfig::new(77), &mut NullRenderer);
        });

        assert_eq!(fields.iter().filter(|names| names.contains(&"seed")).count(), 1);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let config = GameConfig::new(11).with_shuffle(ShuffleMode::legacy());
        let a = Game::new(&config, &mut NullRenderer);
        let b = Game::new(&config, &mut NullRenderer);
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_new_game_redraws_every_slot() {
        let mut log = RedrawLog::new();
        let _ = Game::new(&GameConfig::new(1), &mut log);

        for slot in SlotId::all() {
            assert!(log.contains(slot));
        }
    }

    #[test]
    fn test_pick_and_place_through_slots() {
        let board = Board::builder()
            .column(0, &[c(9, Suit::Black), c(5, Suit::Green)])
            .column(1, &[c(8, Suit::Black), c(4, Suit::Red)])
            .build();
        let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);

        assert_eq!(game.pick(SlotId::Column(1), &mut NullRenderer), Ok(c(4, Suit::Red)));
        assert!(game.held().is_some());

        let placement = game.place(SlotId::Column(0), &mut NullRenderer).unwrap();

        assert_eq!(placement.outcome, DropOutcome::Placed(SlotId::Column(0)));
        assert!(game.held().is_none());
        assert_eq!(game.board().column(0).top(), Some(c(4, Suit::Red)));
    }

    #[test]
    fn test_place_without_held_card_is_noop() {
        let board = Board::builder().column(0, &[c(9, Suit::Black)]).build();
        let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);
        let before = game.board().clone();

        assert_eq!(game.place(SlotId::Column(1), &mut NullRenderer), None);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_empty_pick_holds_nothing() {
        let board = Board::builder().column(0, &[c(9, Suit::Black)]).build();
        let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);

        assert_eq!(
            game.pick(SlotId::FreeCell(0), &mut NullRenderer),
            Err(MoveError::EmptyPick(SlotId::FreeCell(0)))
        );
        assert!(game.held().is_none());
    }

    #[test]
    fn test_second_pick_keeps_first_card() {
        let board = Board::builder()
            .column(0, &[c(9, Suit::Black)])
            .column(1, &[c(7, Suit::Green)])
            .build();
        let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);

        game.pick(SlotId::Column(0), &mut NullRenderer).unwrap();
        assert_eq!(game.pick(SlotId::Column(1), &mut NullRenderer), Ok(c(9, Suit::Black)));
        assert_eq!(game.board().column(1).len(), 1);
    }

    #[test]
    fn test_cursor_events() {
        let board = Board::builder()
            .column(2, &[c(9, Suit::Black), c(6, Suit::Red)])
            .build();
        let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);

        // Column 2 band, tableau row
        assert_eq!(game.press_at(24 + 90, 50 + 100, &mut NullRenderer), Ok(c(6, Suit::Red)));
        // Free cell 0
        let placement = game.release_at(30, 55, &mut NullRenderer).unwrap();

        assert_eq!(placement.outcome, DropOutcome::Placed(SlotId::FreeCell(0)));
        assert_eq!(game.board().free_cell(0), Some(c(6, Suit::Red)));
    }

    #[test]
    fn test_final_move_solves() {
        let board = Board::builder()
            .foundation(Suit::Red, 7)
            .foundation(Suit::Green, 9)
            .foundation(Suit::Black, 9)
            .flowers_discarded(2)
            .dragons_removed(9)
            .column(0, &[c(8, Suit::Red), c(9, Suit::Red)])
            .build();
        let mut game = Game::from_board(board, GeometryConfig::default(), &mut NullRenderer);
        assert!(!game.is_solved());
        assert_eq!(game.board().accounted_cards(), DECK_SIZE);

        game.pick(SlotId::Column(0), &mut NullRenderer).unwrap();
        let placement = game.place(SlotId::FreeCell(1), &mut NullRenderer).unwrap();

        assert!(placement.cascade.solved);
        assert_eq!(placement.cascade.cards_promoted, 2);
        assert!(game.is_solved());
        assert_eq!(game.board().foundation(Suit::Red), 9);
        assert_eq!(game.board().accounted_cards(), DECK_SIZE);
    }
}
