//! The shared draw pile and the discard pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::kind::CardKind;
use crate::core::GameRng;

/// Ordered draw pile. The next card to be drawn sits at the end of the
/// backing vec, so `draw` is a pop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<CardKind>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append `n` copies of `kind` to the pool. Used only while building
    /// the deck before the initial shuffle.
    pub fn extend_with(&mut self, kind: CardKind, n: u32) {
        self.cards
            .extend(std::iter::repeat(kind).take(n as usize));
    }

    /// Remove and return the next card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<CardKind> {
        self.cards.pop()
    }

    /// Uniform random permutation in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Insert `kind` at a position chosen uniformly among all `len + 1`
    /// gaps, so with probability `1 / (len + 1)` it becomes the next
    /// draw. An empty deck gets the card as its sole element.
    pub fn insert_at_random(&mut self, kind: CardKind, rng: &mut GameRng) {
        let position = rng.gen_range_usize(0..self.cards.len() + 1);
        self.cards.insert(position, kind);
    }

    /// The remaining cards, next draw last.
    #[must_use]
    pub fn as_slice(&self) -> &[CardKind] {
        &self.cards
    }

    /// Count cards of one kind still in the deck.
    #[must_use]
    pub fn count_of(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|&&k| k == kind).count()
    }
}

impl From<Vec<CardKind>> for Deck {
    /// Rebuild a deck from an ordered card list, next draw last.
    fn from(cards: Vec<CardKind>) -> Self {
        Self { cards }
    }
}

/// Append-only discard pile. Only the last element is ever consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscardPile {
    cards: Vector<CardKind>,
}

impl DiscardPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of discarded cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when nothing has been discarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card.
    pub fn put(&mut self, kind: CardKind) {
        self.cards.push_back(kind);
    }

    /// The most recently discarded card.
    #[must_use]
    pub fn last(&self) -> Option<CardKind> {
        self.cards.last().copied()
    }

    /// Iterate oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = CardKind> + '_ {
        self.cards.iter().copied()
    }

    /// Count cards of one kind in the pile.
    #[must_use]
    pub fn count_of(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|&&k| k == kind).count()
    }
}

impl FromIterator<CardKind> for DiscardPile {
    /// Rebuild a pile from cards in oldest-first order.
    fn from_iter<I: IntoIterator<Item = CardKind>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_build_and_draw() {
        let mut deck = Deck::new();
        deck.extend_with(CardKind::Skip, 2);
        deck.extend_with(CardKind::Attack, 1);

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.draw(), Some(CardKind::Attack));
        assert_eq!(deck.draw(), Some(CardKind::Skip));
        assert_eq!(deck.draw(), Some(CardKind::Skip));
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let mut deck = Deck::new();
        deck.extend_with(CardKind::Skip, 5);
        deck.extend_with(CardKind::Favor, 5);

        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_eq!(deck.len(), 10);
        assert_eq!(deck.count_of(CardKind::Skip), 5);
        assert_eq!(deck.count_of(CardKind::Favor), 5);
    }

    #[test]
    fn test_insert_at_random_into_empty_deck() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(1);

        deck.insert_at_random(CardKind::Hazard, &mut rng);

        assert_eq!(deck.len(), 1);
        assert_eq!(deck.draw(), Some(CardKind::Hazard));
    }

    #[test]
    fn test_insert_at_random_covers_every_gap() {
        // With 3 gap positions and many trials, each position should be
        // hit at least once.
        let mut seen = [false; 3];
        let mut rng = GameRng::new(9);

        for _ in 0..200 {
            let mut deck = Deck::new();
            deck.extend_with(CardKind::Skip, 2);
            deck.insert_at_random(CardKind::Hazard, &mut rng);

            let position = deck
                .as_slice()
                .iter()
                .position(|&k| k == CardKind::Hazard)
                .unwrap();
            seen[position] = true;
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_discard_pile_last() {
        let mut pile = DiscardPile::new();
        assert_eq!(pile.last(), None);

        pile.put(CardKind::Skip);
        pile.put(CardKind::Attack);

        assert_eq!(pile.last(), Some(CardKind::Attack));
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.count_of(CardKind::Skip), 1);
    }

    #[test]
    fn test_deck_serde_round_trip() {
        let mut deck = Deck::new();
        deck.extend_with(CardKind::Cat1, 2);
        deck.extend_with(CardKind::Hazard, 1);

        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, back);
    }
}
