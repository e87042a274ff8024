//! Card identity and orientation.
//!
//! A `Card` pairs an immutable identity (`CardId`: suit + rank) with a
//! mutable face-orientation flag. Exactly one card of each identity exists
//! in a game.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::{Card, Color, Rank, Suit};
//!
//! let card = Card::new(Suit::Hearts, Rank::QUEEN);
//! assert!(!card.face_up);
//! assert_eq!(card.color(), Color::Red);
//! assert_eq!(card.rank.label(), "Q");
//! assert_eq!(card.id().to_string(), "♥-12");
//! ```

use serde::{Deserialize, Serialize};

use super::config::RANKS_PER_SUIT;

/// Card suit.
///
/// Declaration order is the canonical deck order and the foundation
/// placeholder order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Suit color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Position in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Suit color. Tableau runs must alternate colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, 1 (Ace) through 13 (King).
///
/// The inner value is private so a `Rank` is always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

const RANK_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, returning `None` outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= RANKS_PER_SUIT as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Iterate Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=RANKS_PER_SUIT as u8).map(Rank)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Display string: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub const fn label(self) -> &'static str {
        RANK_LABELS[(self.0 - 1) as usize]
    }

    /// The rank directly above, or `None` for King.
    #[must_use]
    pub const fn next(self) -> Option<Rank> {
        Rank::new(self.0 + 1)
    }

    /// The rank directly below, or `None` for Ace.
    #[must_use]
    pub const fn prev(self) -> Option<Rank> {
        Rank::new(self.0 - 1)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {value} out of range 1..=13"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card identity: one of the 52 (suit, rank) combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardId {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Dense index in `0..52`, suit-major in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.index() * RANKS_PER_SUIT + (self.rank.value() as usize - 1)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.suit.symbol(), self.rank.value())
    }
}

/// A card on the table.
///
/// Equality includes orientation, so two states differing only in which
/// cards are face-up compare unequal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Is this card showing its face?
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Builder-style face-up copy.
    #[must_use]
    pub const fn turned_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Builder-style face-down copy.
    #[must_use]
    pub const fn turned_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::new(self.suit, self.rank)
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank.label(), self.suit.symbol())
        } else {
            f.write_str("##")
        }
    }
}
