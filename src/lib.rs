//! # klondike-engine
//!
//! Rule engine and interaction state machine for single-deck Klondike
//! Solitaire.
//!
//! ## Design Principles
//!
//! 1. **Immutable Turns**: Every accepted action produces a new `GameState`.
//!    Piles are `im` persistent vectors, so undo snapshots are O(1) clones.
//!
//! 2. **Closed Positions**: Piles are addressed by an exhaustive
//!    `Position` enum, never by strings or loose indices.
//!
//! 3. **Silent Rejection**: Illegal clicks and moves are never errors to the
//!    caller. Commands return an `Outcome`; refusals carry a `Rejection`.
//!
//! ## Architecture
//!
//! A presentation event becomes a `Position` (plus an optional tableau card
//! index). The `Session` feeds it to the selection machine, which consults
//! the rules and, on acceptance, hands a `Move` to the executor. The
//! previous state is pushed onto the undo history before the new one is
//! installed, and the win check runs after every accepted action.
//!
//! ## Modules
//!
//! - `core`: Cards, positions, state, actions, RNG, configuration
//! - `cards`: Deck building, shuffling, dealing
//! - `rules`: Placement predicates, move checking, win detection
//! - `piles`: Move execution and the stock/waste cycle
//! - `session`: Selection state machine, undo history, command surface

pub mod core;
pub mod cards;
pub mod rules;
pub mod piles;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, Card, CardId, Color, GameRng, GameState, Move, Pile, Position, Rank, Rejection,
    SessionConfig, Suit,
};

pub use crate::cards::{build_deck, deal, initialize_game, shuffle};

pub use crate::rules::{can_move_to_foundation, can_move_to_tableau, check_move, is_won, legal_moves};

pub use crate::piles::{draw_from_stock, execute_move};

pub use crate::session::{History, Outcome, Selection, SelectionState, Session};
