//! The static card kind catalog.
//!
//! The vocabulary is closed: eleven kinds, each with a behavioral
//! category resolved once by [`CardKind::category`]. The engine branches
//! on categories (and, during resolution, on the kinds themselves) —
//! never on names.
//!
//! Ten of the eleven kinds can sit in a hand. `Hazard` is drawn, resolved
//! on the spot, and either reinserted into the deck or discarded; it is
//! never held.

use serde::{Deserialize, Serialize};

/// One of the eleven card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    /// Eliminates the drawer unless countered.
    Hazard,
    /// Auto-consumed to neutralize a hazard draw. Never played.
    Counter,
    /// Stacks two extra turns onto the next player and ends the turn.
    Attack,
    /// Ends the turn without drawing.
    Skip,
    /// Steals a random card from a chosen opponent.
    Favor,
    /// Shuffles the deck; the turn continues.
    Shuffle,
    /// Cat family card; a pair steals a random card from an opponent.
    Cat1,
    /// Cat family card.
    Cat2,
    /// Cat family card.
    Cat3,
    /// Cat family card.
    Cat4,
    /// Cat family card.
    Cat5,
}

/// Behavioral category driving legality and resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Drawn, never held or played.
    Hazard,
    /// Held but never played; consumed automatically on a hazard draw.
    Counter,
    /// Playable whenever held; resolution ends the turn.
    ForcesTurnEnd,
    /// Playable whenever held; the turn continues.
    AlwaysPlayable,
    /// Needs at least one live opponent holding cards.
    NeedsOpponentWithCards,
    /// Needs a pair in hand plus a live opponent holding cards.
    NeedsPairAndOpponent,
}

impl CardKind {
    /// Every kind, in canonical catalog order.
    pub const ALL: [CardKind; 11] = [
        CardKind::Hazard,
        CardKind::Counter,
        CardKind::Attack,
        CardKind::Skip,
        CardKind::Favor,
        CardKind::Shuffle,
        CardKind::Cat1,
        CardKind::Cat2,
        CardKind::Cat3,
        CardKind::Cat4,
        CardKind::Cat5,
    ];

    /// Every kind that can sit in a hand (everything but `Hazard`), in
    /// canonical catalog order. Weighted theft and legality iterate this.
    pub const HELD: [CardKind; 10] = [
        CardKind::Counter,
        CardKind::Attack,
        CardKind::Skip,
        CardKind::Favor,
        CardKind::Shuffle,
        CardKind::Cat1,
        CardKind::Cat2,
        CardKind::Cat3,
        CardKind::Cat4,
        CardKind::Cat5,
    ];

    /// The five cat families, in canonical catalog order.
    pub const CATS: [CardKind; 5] = [
        CardKind::Cat1,
        CardKind::Cat2,
        CardKind::Cat3,
        CardKind::Cat4,
        CardKind::Cat5,
    ];

    /// The behavioral category of this kind.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            CardKind::Hazard => Category::Hazard,
            CardKind::Counter => Category::Counter,
            CardKind::Attack | CardKind::Skip => Category::ForcesTurnEnd,
            CardKind::Shuffle => Category::AlwaysPlayable,
            CardKind::Favor => Category::NeedsOpponentWithCards,
            CardKind::Cat1
            | CardKind::Cat2
            | CardKind::Cat3
            | CardKind::Cat4
            | CardKind::Cat5 => Category::NeedsPairAndOpponent,
        }
    }

    /// Does playing this kind require an opponent target?
    #[must_use]
    pub const fn is_targeted(self) -> bool {
        matches!(
            self.category(),
            Category::NeedsOpponentWithCards | Category::NeedsPairAndOpponent
        )
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_sizes() {
        assert_eq!(CardKind::ALL.len(), 11);
        assert_eq!(CardKind::HELD.len(), 10);
        assert!(!CardKind::HELD.contains(&CardKind::Hazard));

        // HELD is ALL minus Hazard, same order
        let held: Vec<_> = CardKind::ALL
            .iter()
            .copied()
            .filter(|&k| k != CardKind::Hazard)
            .collect();
        assert_eq!(held, CardKind::HELD);
    }

    #[test]
    fn test_categories() {
        assert_eq!(CardKind::Hazard.category(), Category::Hazard);
        assert_eq!(CardKind::Counter.category(), Category::Counter);
        assert_eq!(CardKind::Attack.category(), Category::ForcesTurnEnd);
        assert_eq!(CardKind::Skip.category(), Category::ForcesTurnEnd);
        assert_eq!(CardKind::Shuffle.category(), Category::AlwaysPlayable);
        assert_eq!(CardKind::Favor.category(), Category::NeedsOpponentWithCards);

        for cat in [
            CardKind::Cat1,
            CardKind::Cat2,
            CardKind::Cat3,
            CardKind::Cat4,
            CardKind::Cat5,
        ] {
            assert_eq!(cat.category(), Category::NeedsPairAndOpponent);
        }
    }

    #[test]
    fn test_targeted_kinds() {
        assert!(CardKind::Favor.is_targeted());
        assert!(CardKind::Cat3.is_targeted());
        assert!(!CardKind::Attack.is_targeted());
        assert!(!CardKind::Skip.is_targeted());
        assert!(!CardKind::Shuffle.is_targeted());
        assert!(!CardKind::Counter.is_targeted());
    }

    #[test]
    fn test_serde_round_trip() {
        for kind in CardKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: CardKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }
}
