//! Serializable read-only projection of a full table.
//!
//! `Snapshot` is the engine-side source for whatever wire shape an
//! adapter broadcasts; the engine itself never touches a socket or a
//! file. The RNG state is included, so a snapshot plus a command
//! sequence replays a game exactly.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::GameRngState;
use crate::rules::{GameStatus, SeatState, TurnState};

/// A point-in-time copy of everything on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Remaining deck, next draw last.
    pub deck: Vec<CardKind>,
    /// Every seat in seating order, eliminated seats included.
    pub seats: Vec<SeatState>,
    /// Discard pile, oldest first.
    pub discard: Vec<CardKind>,
    /// Whose turn it is and what they owe.
    pub turn: TurnState,
    /// Running or decided.
    pub status: GameStatus,
    /// RNG state at capture time.
    pub rng: GameRngState,
    /// Card conservation baseline fixed at deal time.
    pub total_cards: u32,
}

impl Snapshot {
    /// Compact binary encoding.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by [`Snapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }

    /// Cards currently in the system: deck + discard + every hand.
    #[must_use]
    pub fn count_cards(&self) -> u32 {
        self.deck.len() as u32
            + self.discard.len() as u32
            + self.seats.iter().map(|s| s.hand.total()).sum::<u32>()
    }
}
