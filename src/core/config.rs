//! Klondike constants and session configuration.
//!
//! Pile counts are fixed by the variant. The only tunables are the RNG seed
//! and how many undo snapshots a session keeps.

use serde::{Deserialize, Serialize};

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation slots.
pub const FOUNDATION_COUNT: usize = 4;

/// Cards per suit (Ace through King).
pub const RANKS_PER_SUIT: usize = 13;

/// Cards in a full deck.
pub const DECK_SIZE: usize = FOUNDATION_COUNT * RANKS_PER_SUIT;

/// Cards dealt to the tableau: 1 + 2 + ... + 7.
pub const TABLEAU_DEAL_SIZE: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;

/// Cards left in the stock after the deal.
pub const STOCK_SIZE: usize = DECK_SIZE - TABLEAU_DEAL_SIZE;

/// Undo snapshots kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Configuration for a play session.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_seed(42)
///     .with_history_capacity(20);
///
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.history_capacity, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed RNG seed for reproducible deals. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Maximum number of undo snapshots. Zero disables undo.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the undo history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(DECK_SIZE, 52);
        assert_eq!(TABLEAU_DEAL_SIZE, 28);
        assert_eq!(STOCK_SIZE, 24);
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_config_serde_fills_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);

        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
