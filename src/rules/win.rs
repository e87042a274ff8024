//! Win detection.

use crate::core::config::RANKS_PER_SUIT;
use crate::core::GameState;

/// Has every foundation been built up to the King?
#[must_use]
pub fn is_won(state: &GameState) -> bool {
    state.foundations.iter().all(|f| f.len() == RANKS_PER_SUIT)
}

/// Number of cards on the foundations, `0..=52`.
#[must_use]
pub fn foundation_progress(state: &GameState) -> usize {
    state.foundations.iter().map(|f| f.len()).sum()
}
