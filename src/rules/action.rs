//! The command vocabulary and per-command results.
//!
//! An [`Action`] is what a caller may submit; an [`Effect`] is what
//! resolution actually did. The action space is closed: draw, or play
//! one of the legal kinds, optionally at a target. Adapters that need an
//! enumerable space (training loops, session layers) use
//! `GameEngine::legal_actions`.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::PlayerId;

/// A submittable command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card, ending the turn one way or another.
    Draw,
    /// Play a card before drawing. `target` is meaningful only for
    /// kinds that steal (Favor and the cat pairs); for those, `None`
    /// asks the engine to pick an eligible opponent uniformly.
    Play {
        /// The kind to play.
        kind: CardKind,
        /// Optional explicit opponent seat.
        target: Option<PlayerId>,
    },
}

/// What a resolved command did.
///
/// Returned by `play_card` / `draw_card`; the event history records the
/// same information in finer grain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// An attack was played: the victim owes extra turns.
    Attacked {
        /// The seat now to act under the attack chain.
        victim: PlayerId,
        /// Outstanding turn-ending actions after stacking.
        pending_extra_turns: u32,
    },
    /// A skip was played; the turn moved on without a draw.
    Skipped {
        /// The seat now to act.
        next_player: PlayerId,
    },
    /// The deck was shuffled; the turn continues.
    DeckShuffled,
    /// A favor or cat pair stole a card; the turn continues.
    Stole {
        /// The seat stolen from.
        target: PlayerId,
        /// The kind that changed hands.
        stolen: CardKind,
    },
    /// A non-hazard card was drawn into the hand.
    Drew {
        /// The kind drawn.
        kind: CardKind,
        /// The seat now to act (the drawer again, under an attack chain).
        next_player: PlayerId,
    },
    /// A hazard was drawn and neutralized by a counter; the hazard went
    /// back into the deck at a random position.
    HazardCountered {
        /// The seat now to act.
        next_player: PlayerId,
    },
    /// A hazard was drawn with no counter in hand.
    Eliminated {
        /// The seat eliminated.
        seat: PlayerId,
        /// The winner, when this elimination ended the game.
        winner: Option<PlayerId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        let a = Action::Play {
            kind: CardKind::Favor,
            target: Some(PlayerId::new(1)),
        };
        let b = Action::Play {
            kind: CardKind::Favor,
            target: Some(PlayerId::new(1)),
        };
        let c = Action::Play {
            kind: CardKind::Favor,
            target: None,
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Action::Draw);
    }

    #[test]
    fn test_serde_round_trip() {
        let actions = [
            Action::Draw,
            Action::Play {
                kind: CardKind::Cat3,
                target: Some(PlayerId::new(2)),
            },
        ];

        for action in actions {
            let json = serde_json::to_string(&action).unwrap();
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, back);
        }

        let effect = Effect::Stole {
            target: PlayerId::new(1),
            stolen: CardKind::Counter,
        };
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, back);
    }
}
