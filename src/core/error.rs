//! Error taxonomy for the command surface.
//!
//! Three families, per failure site:
//!
//! - [`ConfigError`] — a bad configuration, surfaced before any game
//!   state is produced.
//! - [`PlayError`] — a rejected `play_card` command. State is left
//!   untouched; the caller must choose again.
//! - [`DrawError`] — a rejected `draw_card` command. `EmptyDeck` signals
//!   an internal invariant violation rather than a normal outcome: under
//!   a valid deal the deck cannot empty before the game ends.
//!
//! The engine never retries internally; recovery policy (penalize and
//! redraw in a training loop, re-prompt in a session) belongs to callers.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardKind;

/// Rejected configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside the supported range.
    #[error("player count {0} outside supported range 2..=255")]
    PlayerCount(usize),

    /// The configured deck cannot cover every starting hand.
    #[error("deck of {deck_cards} cards cannot deal {hand_size} cards to {players} players")]
    NotEnoughCards {
        /// Cards in the combined deck pool before dealing.
        deck_cards: u32,
        /// Configured player count.
        players: u32,
        /// Configured starting hand size.
        hand_size: u32,
    },

    /// A restored snapshot disagrees with the configuration about the
    /// table size.
    #[error("snapshot has {snapshot_seats} seats but config expects {config_seats}")]
    SeatMismatch {
        /// Seats in the snapshot.
        snapshot_seats: usize,
        /// Seats the configuration expects.
        config_seats: usize,
    },
}

/// Rejected `play_card` command. No state was mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has already ended; no further commands are accepted.
    #[error("the game is over")]
    GameOver,

    /// The kind is not in the current player's legal set.
    #[error("{0} cannot be played from the current hand")]
    IllegalCard(CardKind),

    /// An explicit target was supplied but is not an eligible opponent
    /// (out of range, self, eliminated, or empty-handed).
    #[error("{0} is not a valid steal target")]
    InvalidTarget(PlayerId),
}

/// Rejected `draw_card` command. No state was mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game has already ended; no further commands are accepted.
    #[error("the game is over")]
    GameOver,

    /// The deck is empty. Unreachable under a valid deal; treated as an
    /// invariant violation by callers, not a recoverable path.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::PlayerCount(1).to_string(),
            "player count 1 outside supported range 2..=255"
        );
        assert_eq!(
            PlayError::IllegalCard(CardKind::Counter).to_string(),
            "Counter cannot be played from the current hand"
        );
        assert_eq!(
            PlayError::InvalidTarget(PlayerId::new(3)).to_string(),
            "Seat 3 is not a valid steal target"
        );
        assert_eq!(
            DrawError::EmptyDeck.to_string(),
            "cannot draw from an empty deck"
        );
    }
}
