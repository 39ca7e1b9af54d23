//! Mutable game state owned exclusively by the rule engine.
//!
//! Nothing outside the engine mutates these types; queries hand out
//! references, commands run to completion before returning, and no hand
//! or deck is ever aliased into caller-visible structures mid-resolution.

use serde::{Deserialize, Serialize};

use crate::cards::{Deck, DiscardPile, Hand};
use crate::core::{Direction, PlayerId, PlayerMap};

/// One seat at the table: a hand plus an elimination flag.
///
/// Eliminated seats keep their remaining cards; the flag, not a removal,
/// takes them out of play, and their counts still figure into the card
/// conservation total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatState {
    /// Cards held, by kind.
    pub hand: Hand,
    /// Set once, by an un-countered hazard draw. Never cleared.
    pub eliminated: bool,
}

/// Whether the game is running or decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Exactly one non-terminal state; all structure lives in what the
    /// current player may do within it.
    InProgress,
    /// Terminal: one seat remains.
    Over {
        /// The surviving seat.
        winner: PlayerId,
    },
}

impl GameStatus {
    /// True once the game has been decided.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }

    /// The winning seat, if decided.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over { winner } => Some(winner),
        }
    }
}

/// Whose turn it is and what they still owe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// The seat currently to act.
    pub current: PlayerId,
    /// Direction of play around the table.
    pub direction: Direction,
    /// Turn-ending actions still owed by the current victim of an
    /// attack chain. Consumed one at a time by a draw or a skip.
    pub pending_extra_turns: u32,
}

/// The full table: deck, seats, turn state, discard.
///
/// The attack-chain marker of the turn-advance algorithm is deliberately
/// not stored here — it is scoped to a single [`GameState::advance_turn`]
/// call and passed as an argument.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) seats: PlayerMap<SeatState>,
    pub(crate) turn: TurnState,
    pub(crate) discard: DiscardPile,
    /// Card conservation baseline, fixed at deal time.
    pub(crate) total_cards: u32,
}

impl GameState {
    /// Number of seats at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.player_count()
    }

    /// Seats not yet eliminated.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.seats.iter().filter(|(_, s)| !s.eliminated).count()
    }

    /// The sole surviving seat, if exactly one remains.
    #[must_use]
    pub fn sole_survivor(&self) -> Option<PlayerId> {
        let mut survivors = self
            .seats
            .iter()
            .filter(|(_, s)| !s.eliminated)
            .map(|(p, _)| p);
        match (survivors.next(), survivors.next()) {
            (Some(winner), None) => Some(winner),
            _ => None,
        }
    }

    /// Cards currently in the system: deck + discard + every hand,
    /// eliminated seats included.
    #[must_use]
    pub fn count_cards(&self) -> u32 {
        self.deck.len() as u32
            + self.discard.len() as u32
            + self
                .seats
                .iter()
                .map(|(_, s)| s.hand.total())
                .sum::<u32>()
    }

    /// Advance to the next seat to act.
    ///
    /// An attack stacks two extra turns onto its victim, consumed one at
    /// a time by the victim's own turn-ending actions. The advance
    /// triggered by playing the attack itself must not consume a credit:
    /// that caller passes `after_attack = true`.
    ///
    /// Skips eliminated seats. The caller guarantees at least two seats
    /// are live (a table down to one survivor is already `Over`).
    pub fn advance_turn(&mut self, after_attack: bool) -> PlayerId {
        if !after_attack && self.turn.pending_extra_turns > 0 {
            self.turn.pending_extra_turns -= 1;
            if self.turn.pending_extra_turns > 0 {
                // Same seat acts again.
                return self.turn.current;
            }
        }

        let n = self.player_count();
        let mut seat = self.turn.current;
        loop {
            seat = self.turn.direction.step(seat, n);
            if !self.seats[seat].eliminated {
                break;
            }
        }
        self.turn.current = seat;
        seat
    }
}
