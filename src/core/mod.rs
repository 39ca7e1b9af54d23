//! Core engine types: seats, RNG, configuration, errors.
//!
//! These are the building blocks beneath the rule engine. None of them
//! interpret game rules; they carry identity, randomness, and settings.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{Direction, GameConfig, GameConfigBuilder};
pub use error::{ConfigError, DrawError, PlayError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
