//! The rule engine and its command/query surface.
//!
//! ## Key Types
//!
//! - `GameEngine`: owns all mutable state; every mutation goes through
//!   its commands
//! - `Action` / `Effect`: what a caller may submit, and what resolution
//!   did
//! - `GameEvent`: append-only structured history
//! - `SeatState`, `TurnState`, `GameStatus`: the state model

pub mod action;
pub mod engine;
pub mod event;
pub mod state;

pub use action::{Action, Effect};
pub use engine::GameEngine;
pub use event::GameEvent;
pub use state::{GameState, GameStatus, SeatState, TurnState};
