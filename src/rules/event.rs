//! Structured event history.
//!
//! The engine records everything that happens as typed events on an
//! append-only history the caller can query or drain. This replaces
//! ambient logging: the engine owns the sink, its lifecycle is the
//! game's, and determinism is unaffected by whether anyone reads it.
//!
//! The history is a full-information record (drawn and stolen kinds
//! included). Session layers deciding what each seat may see filter it
//! per recipient.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::PlayerId;

/// One thing that happened during resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card (or pair) left a hand for the discard pile as a play.
    CardPlayed {
        seat: PlayerId,
        kind: CardKind,
        /// The resolved steal target, for kinds that steal.
        target: Option<PlayerId>,
    },
    /// The top card left the deck.
    CardDrawn { seat: PlayerId, kind: CardKind },
    /// A card moved between hands via favor or a cat pair.
    CardStolen {
        from: PlayerId,
        to: PlayerId,
        kind: CardKind,
    },
    /// A hazard draw was neutralized by a counter.
    HazardCountered { seat: PlayerId },
    /// A hazard draw found no counter.
    PlayerEliminated { seat: PlayerId },
    /// The deck was shuffled mid-game.
    DeckShuffled { seat: PlayerId },
    /// The acting seat changed.
    TurnPassed { from: PlayerId, to: PlayerId },
    /// One seat remains.
    GameOver { winner: PlayerId },
}
