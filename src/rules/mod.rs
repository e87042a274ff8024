//! Klondike rules: placement predicates, move checking, win detection.
//!
//! Everything here is a pure function of a `GameState`. Nothing in this
//! module changes state; the executor in `piles` does that once a move has
//! passed `check_move`.

pub mod engine;
pub mod win;

pub use engine::{can_move_to_foundation, can_move_to_tableau, check_move, legal_moves};
pub use win::{foundation_progress, is_won};
