//! Redraw requests for the host's renderer.
//!
//! The engine never draws. After each mutation it reports which place on
//! the board changed; the renderer reads the new state back from the
//! `Board` and owns all output.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::slot::SlotId;
use crate::cards::Suit;

/// Something on the board that must be redrawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderTarget {
    /// A column or free cell.
    Slot(SlotId),
    /// A suit's foundation pile.
    Foundation(Suit),
}

impl From<SlotId> for RenderTarget {
    fn from(slot: SlotId) -> Self {
        RenderTarget::Slot(slot)
    }
}

/// Receives redraw requests.
pub trait RenderSink {
    /// Called once per mutation, in the order mutations happen.
    fn redraw(&mut self, target: RenderTarget);
}

/// Discards every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn redraw(&mut self, _target: RenderTarget) {}
}

/// Records requests for later inspection.
///
/// ```
/// use dragon_solitaire::core::{RedrawLog, RenderSink, RenderTarget, SlotId};
///
/// let mut log = RedrawLog::new();
/// log.redraw(RenderTarget::Slot(SlotId::Column(0)));
/// log.redraw(RenderTarget::Slot(SlotId::Column(0)));
///
/// assert_eq!(log.requests().len(), 2);
/// assert_eq!(log.dirty().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RedrawLog {
    requests: Vec<RenderTarget>,
}

impl RedrawLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request, in order.
    #[must_use]
    pub fn requests(&self) -> &[RenderTarget] {
        &self.requests
    }

    /// Distinct targets requested since the last clear.
    #[must_use]
    pub fn dirty(&self) -> FxHashSet<RenderTarget> {
        self.requests.iter().copied().collect()
    }

    /// Check whether a target was requested.
    #[must_use]
    pub fn contains(&self, target: impl Into<RenderTarget>) -> bool {
        let target = target.into();
        self.requests.contains(&target)
    }

    /// Forget all requests.
    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl RenderSink for RedrawLog {
    fn redraw(&mut self, target: RenderTarget) {
        self.requests.push(target);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn redraw(&mut self, target: RenderTarget) {
        (**self).redraw(target);
    }
}
