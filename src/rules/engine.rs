//! Placement rules.
//!
//! Two pure predicates decide whether a card may land on a pile:
//! - Foundations build up by suit from the Ace
//! - Tableau columns build down in alternating colors from the King
//!
//! Only the lead card of a moving run is checked. Runs are built with the
//! same predicates, so their internal order is valid by construction.

use crate::core::{Card, GameState, Move, Pile, Position, Rank, Rejection};

/// May `card` be placed on `foundation`?
#[must_use]
pub fn can_move_to_foundation(card: &Card, foundation: &Pile) -> bool {
    match foundation.back() {
        None => card.rank == Rank::ACE,
        Some(top) => card.suit == top.suit && top.rank.next() == Some(card.rank),
    }
}

/// May `card` be placed on `column`?
#[must_use]
pub fn can_move_to_tableau(card: &Card, column: &Pile) -> bool {
    match column.back() {
        None => card.rank == Rank::KING,
        Some(top) => card.color() != top.color() && top.rank.prev() == Some(card.rank),
    }
}

/// Check a move against the placement rules.
///
/// The run is the top `mv.count` cards of the source; its first card is the
/// lead. Structural problems (unknown piles, short sources, face-down lead)
/// are reported as well, so an `Ok` move can always be executed.
pub fn check_move(state: &GameState, mv: &Move) -> Result<(), Rejection> {
    let source = state.pile(mv.source).ok_or(Rejection::UnknownPile)?;
    let target = state.pile(mv.target).ok_or(Rejection::UnknownPile)?;

    if matches!(mv.source, Position::Stock) {
        return Err(Rejection::NotASource);
    }
    if mv.source == mv.target {
        return Err(Rejection::SamePile);
    }
    if mv.count == 0 || mv.count > source.len() {
        return Err(Rejection::CardIndexOutOfRange);
    }
    if !mv.source.is_tableau() && mv.count != 1 {
        return Err(Rejection::CardIndexOutOfRange);
    }

    let lead = &source[source.len() - mv.count];
    if !lead.face_up {
        return Err(Rejection::FaceDown);
    }

    let fits = match mv.target {
        Position::Stock | Position::Waste => return Err(Rejection::IllegalTarget),
        Position::Foundation(_) => {
            if mv.count != 1 {
                return Err(Rejection::MultiCardToFoundation);
            }
            can_move_to_foundation(lead, target)
        }
        Position::Tableau(_) => can_move_to_tableau(lead, target),
    };

    if fits {
        Ok(())
    } else {
        Err(Rejection::RuleViolation)
    }
}

/// Every move `check_move` accepts in `state`.
///
/// Sources are the waste top, each foundation top, and every face-up split
/// point of each tableau column; targets are every foundation and tableau
/// pile. Order is deterministic: sources in table order, splits from the
/// deepest, targets foundations first.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let targets: Vec<Position> = Position::foundations().chain(Position::tableau()).collect();
    let mut moves = Vec::new();

    for source in Position::all() {
        let len = state.pile_len(source);
        let counts: Vec<usize> = match source {
            Position::Stock => continue,
            Position::Waste | Position::Foundation(_) => {
                if len == 0 {
                    continue;
                }
                vec![1]
            }
            Position::Tableau(_) => (1..=len).rev().collect(),
        };

        for count in counts {
            for &target in &targets {
                let mv = Move::new(source, target, count);
                if check_move(state, &mv).is_ok() {
                    moves.push(mv);
                }
            }
        }
    }

    moves
}
