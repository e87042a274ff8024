//! Game state: every pile on the table plus the move counter.
//!
//! ## GameState
//!
//! - Stock and waste
//! - Four foundation slots
//! - Seven tableau columns
//! - Move counter
//!
//! Piles are `im` persistent vectors, so cloning a state for the undo
//! history is O(1) and snapshots share structure with the live state.
//! Actions never edit a state in place; they return a new one.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::config::{DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};
use super::position::Position;

/// An ordered pile of cards. The top card is the last element.
pub type Pile = Vector<Card>;

/// Complete game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Face-down draw pile.
    pub stock: Pile,

    /// Face-up discard pile.
    pub waste: Pile,

    /// Foundation slots, built up by suit from Ace.
    pub foundations: [Pile; FOUNDATION_COUNT],

    /// Tableau columns, built down in alternating colors.
    pub tableau: [Pile; TABLEAU_COUNT],

    /// Accepted actions so far.
    pub move_count: u32,
}

impl GameState {
    /// Create a state with every pile empty.
    ///
    /// Useful for building specific layouts in tests. A playable game comes
    /// from `cards::initialize_game`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the contents of a pile, builder style.
    ///
    /// Out-of-range positions are ignored.
    #[must_use]
    pub fn with_pile(mut self, position: Position, cards: impl IntoIterator<Item = Card>) -> Self {
        if let Some(pile) = self.pile_mut(position) {
            *pile = cards.into_iter().collect();
        }
        self
    }

    // === Pile Access ===

    /// Resolve a position to its pile.
    ///
    /// Returns `None` for out-of-range foundation or tableau indices.
    #[must_use]
    pub fn pile(&self, position: Position) -> Option<&Pile> {
        match position {
            Position::Stock => Some(&self.stock),
            Position::Waste => Some(&self.waste),
            Position::Foundation(i) => self.foundations.get(i),
            Position::Tableau(i) => self.tableau.get(i),
        }
    }

    /// Resolve a position to its pile, mutably.
    pub fn pile_mut(&mut self, position: Position) -> Option<&mut Pile> {
        match position {
            Position::Stock => Some(&mut self.stock),
            Position::Waste => Some(&mut self.waste),
            Position::Foundation(i) => self.foundations.get_mut(i),
            Position::Tableau(i) => self.tableau.get_mut(i),
        }
    }

    /// Top card of a pile.
    #[must_use]
    pub fn top(&self, position: Position) -> Option<&Card> {
        self.pile(position)?.back()
    }

    /// Number of cards in a pile (0 for unknown piles).
    #[must_use]
    pub fn pile_len(&self, position: Position) -> usize {
        self.pile(position).map_or(0, Vector::len)
    }

    // === Invariants ===

    /// Iterate every card on the table, pile by pile.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flat_map(|p| p.iter()))
            .chain(self.tableau.iter().flat_map(|p| p.iter()))
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundations.iter().map(Vector::len).sum::<usize>()
            + self.tableau.iter().map(Vector::len).sum::<usize>()
    }

    /// Does the table hold exactly the 52-card deck, each card once?
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let ids: FxHashSet<CardId> = self.cards().map(Card::id).collect();
        ids.len() == DECK_SIZE && self.card_count() == DECK_SIZE
    }

    /// Do both states hold the same set of cards, each at most once?
    ///
    /// Every transition must satisfy this against its predecessor, whether
    /// or not the table holds a full deck.
    #[must_use]
    pub fn holds_same_cards(&self, other: &GameState) -> bool {
        let mine: FxHashSet<CardId> = self.cards().map(Card::id).collect();
        let theirs: FxHashSet<CardId> = other.cards().map(Card::id).collect();
        mine.len() == self.card_count() && theirs.len() == other.card_count() && mine == theirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank).unwrap())
    }

    #[test]
    fn test_empty_state() {
        let state = GameState::empty();

        assert_eq!(state.card_count(), 0);
        assert_eq!(state.move_count, 0);
        assert!(!state.is_conserved());
        for pos in Position::all() {
            assert_eq!(state.pile_len(pos), 0);
            assert!(state.top(pos).is_none());
        }
    }

    #[test]
    fn test_with_pile_and_top() {
        let state = GameState::empty().with_pile(
            Position::Tableau(3),
            [card(Suit::Spades, 10), card(Suit::Hearts, 9).turned_up()],
        );

        assert_eq!(state.pile_len(Position::Tableau(3)), 2);
        assert_eq!(state.top(Position::Tableau(3)), Some(&card(Suit::Hearts, 9).turned_up()));
        assert_eq!(state.card_count(), 2);
    }

    #[test]
    fn test_unknown_positions() {
        let state = GameState::empty().with_pile(Position::Tableau(9), [card(Suit::Clubs, 1)]);

        assert!(state.pile(Position::Tableau(9)).is_none());
        assert!(state.pile(Position::Foundation(4)).is_none());
        assert_eq!(state.card_count(), 0);
    }

    #[test]
    fn test_conservation_detects_duplicates() {
        let mut deck: Vec<Card> = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::all().map(move |r| Card::new(s, r)))
            .collect();

        let full = GameState::empty().with_pile(Position::Stock, deck.clone());
        assert!(full.is_conserved());

        // Replace one card with a duplicate of another
        deck[0] = deck[1];
        let duplicated = GameState::empty().with_pile(Position::Stock, deck);
        assert!(!duplicated.is_conserved());
    }

    #[test]
    fn test_holds_same_cards() {
        let a = GameState::empty().with_pile(Position::Waste, [card(Suit::Hearts, 3)]);
        let moved = GameState::empty().with_pile(Position::Tableau(0), [card(Suit::Hearts, 3).turned_up()]);
        let other = GameState::empty().with_pile(Position::Waste, [card(Suit::Hearts, 4)]);
        let doubled = GameState::empty()
            .with_pile(Position::Waste, [card(Suit::Hearts, 3)])
            .with_pile(Position::Stock, [card(Suit::Hearts, 3)]);

        assert!(a.holds_same_cards(&moved));
        assert!(!a.holds_same_cards(&other));
        assert!(!a.holds_same_cards(&doubled));
    }

    #[test]
    fn test_clone_shares_until_changed() {
        let original = GameState::empty().with_pile(Position::Waste, [card(Suit::Diamonds, 5)]);
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.waste.pop_back();
        assert_ne!(original, copy);
        assert_eq!(original.pile_len(Position::Waste), 1);
    }

    #[test]
    fn test_state_serde() {
        let state = GameState::empty()
            .with_pile(Position::Foundation(2), [card(Suit::Clubs, 1).turned_up()]);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
