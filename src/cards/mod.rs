//! Card data model: the kind catalog, hands, and piles.
//!
//! ## Key Types
//!
//! - `CardKind`: the closed eleven-kind vocabulary
//! - `Category`: per-kind behavioral classification, resolved statically
//! - `Hand`: per-kind counts for one seat
//! - `Deck`: the shared ordered draw pile
//! - `DiscardPile`: append-only, queried only for its last element

pub mod deck;
pub mod hand;
pub mod kind;

pub use deck::{Deck, DiscardPile};
pub use hand::Hand;
pub use kind::{CardKind, Category};
