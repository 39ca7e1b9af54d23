//! # powderkeg
//!
//! A rule engine for a multiplayer hazard-elimination card game,
//! designed to sit under RL/self-play training loops and networked
//! session layers.
//!
//! Players draw from a shared deck, may play special-effect cards before
//! drawing, and are eliminated by an unresolved hazard draw unless
//! holding a counter. The last live seat wins.
//!
//! ## Design Principles
//!
//! 1. **One owner for all state**: `GameEngine` exclusively owns the
//!    deck, hands, discard, and turn state. Every mutation goes through
//!    its command surface and resolves to completion before returning.
//!
//! 2. **Deterministic by construction**: all randomness flows through an
//!    injected, seedable `GameRng`. A seed plus a command sequence
//!    replays a game exactly; snapshots capture the RNG mid-stream.
//!
//! 3. **Static classification**: card behavior hangs off a fixed
//!    per-kind category resolved at compile time, never off names.
//!
//! 4. **No I/O**: transport, persistence, observation encoding, and
//!    logging live in adapter layers over the command/query surface.
//!    The engine records a structured event history instead of logging.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, errors
//! - `cards`: the kind catalog, hands, deck, discard pile
//! - `rules`: the engine, actions, effects, events, turn state
//! - `snapshot`: serializable projection of the full table
//!
//! ## Example
//!
//! ```
//! use powderkeg::core::GameConfig;
//! use powderkeg::rules::{Action, GameEngine};
//!
//! let mut engine = GameEngine::new(GameConfig::standard(3), 42).unwrap();
//!
//! // Random playout: submit the last legal action (always the draw).
//! while !engine.is_over() {
//!     match *engine.legal_actions().last().unwrap() {
//!         Action::Draw => {
//!             engine.draw_card().unwrap();
//!         }
//!         Action::Play { kind, target } => {
//!             engine.play_card(kind, target).unwrap();
//!         }
//!     }
//! }
//! assert!(engine.winner().is_some());
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Direction, DrawError, GameConfig, GameConfigBuilder, GameRng, GameRngState,
    PlayError, PlayerId, PlayerMap,
};

pub use crate::cards::{CardKind, Category, Deck, DiscardPile, Hand};

pub use crate::rules::{
    Action, Effect, GameEngine, GameEvent, GameStatus, SeatState, TurnState,
};

pub use crate::snapshot::Snapshot;
