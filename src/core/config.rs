//! Game configuration.
//!
//! `GameConfig` carries everything `GameEngine::new` needs to deal a
//! game: per-kind card counts, starting hand size, the starting counter
//! bonus, and the play direction. The engine performs no file I/O; the
//! type derives `Deserialize` so adapter layers can load configs from
//! wherever they keep them.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;

/// Direction of play around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending seat order (0, 1, 2, ...).
    #[default]
    Forward,
    /// Descending seat order.
    Backward,
}

impl Direction {
    /// Step one seat in this direction, wrapping around the table.
    #[must_use]
    pub fn step(self, seat: PlayerId, player_count: usize) -> PlayerId {
        let n = player_count;
        let i = seat.index();
        let next = match self {
            Direction::Forward => (i + 1) % n,
            Direction::Backward => (i + n - 1) % n,
        };
        PlayerId::new(next as u8)
    }
}

/// Complete game configuration consumed by `GameEngine::new` / `reset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-255).
    pub num_players: u8,

    /// Counter cards shuffled into the deck (beyond the starting bonus).
    pub num_counter_cards: u32,

    /// Attack cards in the deck.
    pub num_attack_cards: u32,

    /// Skip cards in the deck.
    pub num_skip_cards: u32,

    /// Favor cards in the deck.
    pub num_favor_cards: u32,

    /// Shuffle cards in the deck.
    pub num_shuffle_cards: u32,

    /// Cat cards in the deck, one count per family (Cat1..Cat5).
    pub num_cat_cards: [u32; 5],

    /// Cards dealt to each seat from the shuffled deck.
    pub num_cards_in_starting_hand: u32,

    /// Counter cards granted to each seat on top of the deal.
    ///
    /// These are minted directly into hands, not drawn from the deck.
    pub num_counter_cards_in_starting_hand: u32,

    /// Direction of play. Nothing in the base rules flips it mid-game.
    pub direction: Direction,
}

impl GameConfig {
    /// A standard table: full-size deck counts scaled for casual play.
    #[must_use]
    pub fn standard(num_players: u8) -> Self {
        Self {
            num_players,
            num_counter_cards: 6,
            num_attack_cards: 4,
            num_skip_cards: 4,
            num_favor_cards: 4,
            num_shuffle_cards: 4,
            num_cat_cards: [4; 5],
            num_cards_in_starting_hand: 7,
            num_counter_cards_in_starting_hand: 1,
            direction: Direction::Forward,
        }
    }

    /// Start building a configuration from the standard table.
    #[must_use]
    pub fn builder(num_players: u8) -> GameConfigBuilder {
        GameConfigBuilder {
            config: Self::standard(num_players),
        }
    }

    /// Total cards in the combined deck pool before dealing.
    ///
    /// Hazards and the starting counter bonus are not part of this pool.
    #[must_use]
    pub fn deck_card_count(&self) -> u32 {
        self.num_counter_cards
            + self.num_attack_cards
            + self.num_skip_cards
            + self.num_favor_cards
            + self.num_shuffle_cards
            + self.num_cat_cards.iter().sum::<u32>()
    }

    /// Validate the configuration.
    ///
    /// The deal must be able to fill every starting hand from the deck
    /// pool before hazards are inserted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_players < 2 {
            return Err(ConfigError::PlayerCount(self.num_players as usize));
        }

        let needed = u32::from(self.num_players) * self.num_cards_in_starting_hand;
        if self.deck_card_count() < needed {
            return Err(ConfigError::NotEnoughCards {
                deck_cards: self.deck_card_count(),
                players: u32::from(self.num_players),
                hand_size: self.num_cards_in_starting_hand,
            });
        }

        Ok(())
    }
}

/// Builder for `GameConfig`, seeded from the standard table.
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    #[must_use]
    pub fn counter_cards(mut self, n: u32) -> Self {
        self.config.num_counter_cards = n;
        self
    }

    #[must_use]
    pub fn attack_cards(mut self, n: u32) -> Self {
        self.config.num_attack_cards = n;
        self
    }

    #[must_use]
    pub fn skip_cards(mut self, n: u32) -> Self {
        self.config.num_skip_cards = n;
        self
    }

    #[must_use]
    pub fn favor_cards(mut self, n: u32) -> Self {
        self.config.num_favor_cards = n;
        self
    }

    #[must_use]
    pub fn shuffle_cards(mut self, n: u32) -> Self {
        self.config.num_shuffle_cards = n;
        self
    }

    /// Set the count for every cat family at once.
    #[must_use]
    pub fn cat_cards(mut self, counts: [u32; 5]) -> Self {
        self.config.num_cat_cards = counts;
        self
    }

    #[must_use]
    pub fn starting_hand(mut self, n: u32) -> Self {
        self.config.num_cards_in_starting_hand = n;
        self
    }

    #[must_use]
    pub fn starting_counters(mut self, n: u32) -> Self {
        self.config.num_counter_cards_in_starting_hand = n;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_step() {
        let forward = Direction::Forward;
        let backward = Direction::Backward;

        assert_eq!(forward.step(PlayerId::new(0), 3), PlayerId::new(1));
        assert_eq!(forward.step(PlayerId::new(2), 3), PlayerId::new(0));
        assert_eq!(backward.step(PlayerId::new(0), 3), PlayerId::new(2));
        assert_eq!(backward.step(PlayerId::new(2), 3), PlayerId::new(1));
    }

    #[test]
    fn test_standard_config_is_valid() {
        for players in [2, 3, 4, 5] {
            assert_eq!(GameConfig::standard(players).validate(), Ok(()));
        }
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::builder(3)
            .counter_cards(2)
            .attack_cards(3)
            .cat_cards([2, 2, 2, 0, 0])
            .starting_hand(4)
            .starting_counters(1)
            .direction(Direction::Backward)
            .build()
            .unwrap();

        assert_eq!(config.num_players, 3);
        assert_eq!(config.num_counter_cards, 2);
        assert_eq!(config.num_cat_cards, [2, 2, 2, 0, 0]);
        assert_eq!(config.direction, Direction::Backward);
        assert_eq!(config.deck_card_count(), 2 + 3 + 4 + 4 + 4 + 6);
    }

    #[test]
    fn test_too_few_players() {
        let config = GameConfig::standard(1);
        assert_eq!(config.validate(), Err(ConfigError::PlayerCount(1)));
    }

    #[test]
    fn test_deck_too_small_to_deal() {
        let err = GameConfig::builder(4)
            .counter_cards(0)
            .attack_cards(0)
            .skip_cards(0)
            .favor_cards(0)
            .shuffle_cards(2)
            .cat_cards([0; 5])
            .starting_hand(3)
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::NotEnoughCards {
                deck_cards: 2,
                players: 4,
                hand_size: 3,
            }
        );
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let json = r#"{
            "num_players": 2,
            "num_counter_cards": 2,
            "num_attack_cards": 1,
            "num_skip_cards": 1,
            "num_favor_cards": 1,
            "num_shuffle_cards": 1,
            "num_cat_cards": [2, 2, 0, 0, 0],
            "num_cards_in_starting_hand": 3,
            "num_counter_cards_in_starting_hand": 1,
            "direction": "Forward"
        }"#;

        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.deck_card_count(), 10);
    }
}
