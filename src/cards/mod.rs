//! Deck building and dealing.
//!
//! ## Key Functions
//!
//! - `build_deck`: the 52 cards in canonical order, face-down
//! - `shuffle`: unbiased Fisher–Yates permutation driven by `GameRng`
//! - `deal`: the triangular tableau layout plus the stock
//! - `initialize_game`: shuffle + deal

pub mod deck;

pub use deck::{build_deck, deal, initialize_game, shuffle};
