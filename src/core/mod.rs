//! Core engine types: cards, positions, state, actions, RNG, configuration.
//!
//! This module holds the data model every other module builds on. Nothing
//! here decides whether a move is legal; that belongs to `rules`.

pub mod card;
pub mod position;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use card::{Card, CardId, Color, Rank, Suit};
pub use position::Position;
pub use rng::GameRng;
pub use config::{
    SessionConfig, DECK_SIZE, DEFAULT_HISTORY_CAPACITY, FOUNDATION_COUNT, RANKS_PER_SUIT,
    STOCK_SIZE, TABLEAU_COUNT, TABLEAU_DEAL_SIZE,
};
pub use action::{Action, Move, Rejection};
pub use state::{GameState, Pile};
