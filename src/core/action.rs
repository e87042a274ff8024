//! Action representation and rejection reasons.
//!
//! Every accepted state change is one of three `Action`s: a stock draw, a
//! waste recycle, or a pile-to-pile `Move`. Refused commands carry a
//! `Rejection` explaining why nothing happened.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A pile-to-pile transfer of the top `count` cards.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::{Move, Position};
///
/// // Move the waste top onto the first foundation
/// let single = Move::single(Position::Waste, Position::Foundation(0));
/// assert_eq!(single.count, 1);
///
/// // Move a three-card run between tableau columns
/// let run = Move::new(Position::Tableau(2), Position::Tableau(5), 3);
/// assert!(!run.is_single());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: Position,
    pub target: Position,
    /// Number of cards taken from the top of the source.
    pub count: usize,
}

impl Move {
    #[must_use]
    pub const fn new(source: Position, target: Position, count: usize) -> Self {
        Self {
            source,
            target,
            count,
        }
    }

    /// Move of the source's top card only.
    #[must_use]
    pub const fn single(source: Position, target: Position) -> Self {
        Self::new(source, target, 1)
    }

    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.count == 1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.count)
    }
}

/// An accepted, state-changing action. Each one counts as a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Stock top turned onto the waste.
    Draw,
    /// Waste turned back over into the stock.
    Recycle,
    /// Cards moved between piles.
    Move(Move),
}

/// Why a command left the game unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The stock cannot be selected or moved from directly.
    NotASource,
    /// The clicked pile has no cards.
    EmptyPile,
    /// Foundation or tableau index outside the table.
    UnknownPile,
    /// Card index past the end of the pile.
    CardIndexOutOfRange,
    /// The targeted tableau card is face-down.
    FaceDown,
    /// Stock and waste never receive moved cards.
    IllegalTarget,
    /// The lead card does not fit on the target pile.
    RuleViolation,
    /// Foundations only take one card at a time.
    MultiCardToFoundation,
    /// Source and target are the same pile.
    SamePile,
    /// Stock and waste are both empty.
    NothingToDraw,
    /// No foundation accepts the card.
    NoFoundationAccepts,
    /// Auto-move only applies to the waste and tableau.
    NotAutoMovable,
    /// History is empty.
    NothingToUndo,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Rejection::NotASource => "pile cannot be used as a source",
            Rejection::EmptyPile => "pile is empty",
            Rejection::UnknownPile => "pile index out of range",
            Rejection::CardIndexOutOfRange => "card index out of range",
            Rejection::FaceDown => "card is face-down",
            Rejection::IllegalTarget => "pile cannot receive cards",
            Rejection::RuleViolation => "card does not fit on target pile",
            Rejection::MultiCardToFoundation => "foundation accepts a single card only",
            Rejection::SamePile => "source and target are the same pile",
            Rejection::NothingToDraw => "stock and waste are empty",
            Rejection::NoFoundationAccepts => "no foundation accepts the card",
            Rejection::NotAutoMovable => "pile does not support auto-move",
            Rejection::NothingToUndo => "nothing to undo",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Rejection {}
