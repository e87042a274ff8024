//! Deck construction, shuffling, and the opening deal.
//!
//! The deck is a plain `Vec<Card>` whose top is the last element, matching
//! the pile convention used everywhere else.

use tracing::trace;

use crate::core::config::{DECK_SIZE, TABLEAU_COUNT};
use crate::core::{Card, GameRng, GameState, Pile, Rank, Suit};

/// Build the 52-card deck, face-down, in canonical order.
///
/// Suits follow `Suit::ALL`; ranks run Ace to King within each suit.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::all() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Return a uniformly shuffled copy of `deck`.
///
/// Fisher–Yates: for each index from the last down to 1, swap it with a
/// uniformly chosen index at or below it. The input is left untouched.
#[must_use]
pub fn shuffle(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range_usize(0..i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Deal a Klondike layout from `deck`, taking cards off its top.
///
/// Round `i` places one card on every column `j >= i`; the card dealt when
/// `i == j` closes the column and is turned face-up. Whatever is left
/// becomes the stock, face-down.
#[must_use]
pub fn deal(deck: &[Card]) -> GameState {
    let mut remaining = deck.to_vec();
    let mut tableau: [Pile; TABLEAU_COUNT] = Default::default();

    for round in 0..TABLEAU_COUNT {
        for (column, pile) in tableau.iter_mut().enumerate().skip(round) {
            let Some(card) = remaining.pop() else {
                break;
            };
            let card = if column == round {
                card.turned_up()
            } else {
                card.turned_down()
            };
            pile.push_back(card);
        }
    }

    trace!(stock = remaining.len(), "dealt tableau");

    GameState {
        stock: remaining.into_iter().map(Card::turned_down).collect(),
        tableau,
        ..GameState::empty()
    }
}

/// Shuffle a fresh deck and deal it.
#[must_use]
pub fn initialize_game(rng: &mut GameRng) -> GameState {
    let state = deal(&shuffle(&build_deck(), rng));
    debug_assert!(state.is_conserved());
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::STOCK_SIZE;
    use crate::core::{CardId, Position};
    use rustc_hash::FxHashSet;

    #[test]
    fn test_build_deck() {
        let deck = build_deck();

        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.iter().all(|c| !c.face_up));

        let ids: FxHashSet<CardId> = deck.iter().map(Card::id).collect();
        assert_eq!(ids.len(), DECK_SIZE);

        // Canonical order: Hearts Ace first, Spades King last
        assert_eq!(deck[0].id(), CardId::new(Suit::Hearts, Rank::ACE));
        assert_eq!(deck[DECK_SIZE - 1].id(), CardId::new(Suit::Spades, Rank::KING));
    }

    #[test]
    fn test_shuffle_preserves_input_and_cards() {
        let deck = build_deck();
        let mut rng = GameRng::new(42);

        let shuffled = shuffle(&deck, &mut rng);

        assert_eq!(deck, build_deck());
        assert_ne!(shuffled, deck);

        let mut sorted = shuffled.clone();
        sorted.sort_by_key(|c| c.id());
        assert_eq!(sorted, deck);
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let deck = build_deck();
        let a = shuffle(&deck, &mut GameRng::new(9));
        let b = shuffle(&deck, &mut GameRng::new(9));
        let c = shuffle(&deck, &mut GameRng::new(10));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shuffle_small_inputs() {
        let mut rng = GameRng::new(1);
        assert!(shuffle(&[], &mut rng).is_empty());

        let one = [Card::new(Suit::Clubs, Rank::ACE)];
        assert_eq!(shuffle(&one, &mut rng), one.to_vec());
    }

    #[test]
    fn test_deal_takes_from_top() {
        let deck = build_deck();
        let state = deal(&deck);

        // First card off the top closes column 0
        assert_eq!(state.tableau[0][0], deck[DECK_SIZE - 1].turned_up());
        // Second card starts column 1
        assert_eq!(state.tableau[1][0], deck[DECK_SIZE - 2]);
        // Stock keeps the untouched bottom of the deck in order
        assert_eq!(state.stock.len(), STOCK_SIZE);
        assert_eq!(state.stock[0], deck[0]);
        assert_eq!(state.stock[STOCK_SIZE - 1], deck[STOCK_SIZE - 1]);
    }

    #[test]
    fn test_deal_shape() {
        let state = initialize_game(&mut GameRng::new(3));

        for (j, pile) in state.tableau.iter().enumerate() {
            assert_eq!(pile.len(), j + 1);
            for (k, card) in pile.iter().enumerate() {
                assert_eq!(card.face_up, k == j, "column {j} card {k}");
            }
        }
        assert_eq!(state.pile_len(Position::Stock), STOCK_SIZE);
        assert!(state.stock.iter().all(|c| !c.face_up));
        assert!(state.waste.is_empty());
        assert!(state.foundations.iter().all(|f| f.is_empty()));
        assert_eq!(state.move_count, 0);
        assert!(state.is_conserved());
    }
}
