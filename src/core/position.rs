//! Pile addressing.
//!
//! A `Position` names one of the 13 piles on the table. Foundation and
//! tableau indices are checked when the position is resolved against a
//! `GameState`, so an out-of-range index is a rejected click rather than a
//! panic.
//!
//! ```
//! use klondike_engine::core::{Position, Suit};
//!
//! assert_eq!(Position::all().count(), 13);
//! assert_eq!(Position::Tableau(2).to_string(), "Tableau 3");
//! assert_eq!(Position::Foundation(3).placeholder_suit(), Some(Suit::Spades));
//! ```

use serde::{Deserialize, Serialize};

use super::card::Suit;
use super::config::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// A pile on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Face-down draw pile.
    Stock,
    /// Face-up discard pile fed by the stock.
    Waste,
    /// Foundation slot `0..4`.
    Foundation(usize),
    /// Tableau column `0..7`.
    Tableau(usize),
}

impl Position {
    /// Every position in table order: stock, waste, foundations, tableau.
    pub fn all() -> impl Iterator<Item = Position> {
        [Position::Stock, Position::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT).map(Position::Foundation))
            .chain((0..TABLEAU_COUNT).map(Position::Tableau))
    }

    /// Foundation positions in index order.
    pub fn foundations() -> impl Iterator<Item = Position> {
        (0..FOUNDATION_COUNT).map(Position::Foundation)
    }

    /// Tableau positions in index order.
    pub fn tableau() -> impl Iterator<Item = Position> {
        (0..TABLEAU_COUNT).map(Position::Tableau)
    }

    /// Is the pile index within the variant's bounds?
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Position::Stock | Position::Waste => true,
            Position::Foundation(i) => i < FOUNDATION_COUNT,
            Position::Tableau(i) => i < TABLEAU_COUNT,
        }
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, Position::Tableau(_))
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, Position::Foundation(_))
    }

    /// Suit hint shown on an empty foundation slot.
    ///
    /// Slots are not suit-locked; this is display vocabulary only.
    #[must_use]
    pub const fn placeholder_suit(self) -> Option<Suit> {
        match self {
            Position::Foundation(i) if i < FOUNDATION_COUNT => Some(Suit::ALL[i]),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Stock => f.write_str("Stock"),
            Position::Waste => f.write_str("Waste"),
            Position::Foundation(i) => write!(f, "Foundation {}", i + 1),
            Position::Tableau(i) => write!(f, "Tableau {}", i + 1),
        }
    }
}
