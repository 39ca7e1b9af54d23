//! Per-kind card counts for one seat.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::kind::CardKind;

/// A hand: mapping from card kind to a non-negative count.
///
/// Counts never go negative; [`Hand::remove`] asserts availability
/// because the engine validates legality before mutating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    counts: FxHashMap<CardKind, u32>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of a single kind.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Add one card of `kind`.
    pub fn add(&mut self, kind: CardKind) {
        self.add_n(kind, 1);
    }

    /// Add `n` cards of `kind`.
    pub fn add_n(&mut self, kind: CardKind, n: u32) {
        if n > 0 {
            *self.counts.entry(kind).or_insert(0) += n;
        }
    }

    /// Remove `n` cards of `kind`.
    ///
    /// The caller must have validated availability; removing more cards
    /// than are held is a rule-engine bug.
    pub fn remove(&mut self, kind: CardKind, n: u32) {
        let held = self.count(kind);
        assert!(held >= n, "removing {n} {kind} from a hand holding {held}");
        if held == n {
            self.counts.remove(&kind);
        } else {
            self.counts.insert(kind, held - n);
        }
    }

    /// Total cards held, across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// True when no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over (kind, count) pairs with non-zero counts, in
    /// canonical catalog order.
    ///
    /// Catalog order (not map order) keeps weighted theft deterministic
    /// for a fixed seed.
    pub fn counts(&self) -> impl Iterator<Item = (CardKind, u32)> + '_ {
        CardKind::HELD
            .iter()
            .filter_map(|&kind| match self.count(kind) {
                0 => None,
                n => Some((kind, n)),
            })
    }
}
