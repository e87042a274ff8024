//! Two-click selection state machine.
//!
//! ## States
//!
//! - `Idle`: nothing selected. A click on a usable source arms it.
//! - `Armed`: a source is held. Clicking it again disarms; clicking any
//!   other pile attempts a move and always returns to `Idle`.
//!
//! The machine is pure: `SelectionState::on_click` inspects the game state
//! and reports a `Step`. The session applies the step.
//!
//! Auto-move (double-activate) is a separate transition, see
//! `auto_move_target`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::RANKS_PER_SUIT;
use crate::core::{Card, GameState, Move, Position, Rejection};
use crate::rules::{can_move_to_foundation, check_move};

/// Cards lifted by a selection. A face-up tableau run never exceeds a suit's
/// length, so it stays inline.
pub type Run = SmallVec<[Card; RANKS_PER_SUIT]>;

/// A held source pile, with the tableau split point if one was clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub position: Position,
    /// First card of the run for tableau sources. `None` means the top card.
    pub card_index: Option<usize>,
}

impl Selection {
    #[must_use]
    pub const fn new(position: Position, card_index: Option<usize>) -> Self {
        Self {
            position,
            card_index,
        }
    }

    /// Is a click on `position`/`card_index` a click on this selection?
    ///
    /// Tableau clicks must also hit the same split point.
    #[must_use]
    pub fn matches(&self, position: Position, card_index: Option<usize>) -> bool {
        self.position == position && (!position.is_tableau() || self.card_index == card_index)
    }

    /// Gather the cards this selection would move, bottom of the run first.
    ///
    /// Waste and foundation sources give their top card; tableau sources
    /// give the suffix starting at the split point.
    #[must_use]
    pub fn run(&self, state: &GameState) -> Run {
        let Some(pile) = state.pile(self.position) else {
            return Run::new();
        };
        let len = pile.len();
        let start = match (self.position, self.card_index) {
            (Position::Tableau(_), Some(index)) => index.min(len),
            _ => len.saturating_sub(1),
        };
        pile.iter().skip(start).copied().collect()
    }
}

/// Selection machine state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Idle,
    Armed(Selection),
}

/// What a click means, as decided by `SelectionState::on_click`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Arm this source.
    Select(Selection),
    /// Clicked the armed source again.
    Deselect,
    /// A move that passed the placement rules.
    Move(Move),
    /// Nothing happens. From `Armed` this also drops the selection.
    Reject(Rejection),
}

impl SelectionState {
    /// The held selection, if armed.
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Armed(selection) => Some(selection),
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        matches!(self, SelectionState::Armed(_))
    }

    /// Interpret a click on `position` (with an optional tableau card index).
    #[must_use]
    pub fn on_click(&self, state: &GameState, position: Position, card_index: Option<usize>) -> Step {
        match self {
            SelectionState::Idle => match select_source(state, position, card_index) {
                Ok(selection) => Step::Select(selection),
                Err(reason) => Step::Reject(reason),
            },
            SelectionState::Armed(selection) if selection.matches(position, card_index) => Step::Deselect,
            SelectionState::Armed(selection) => match attempt(state, selection, position) {
                Ok(mv) => Step::Move(mv),
                Err(reason) => Step::Reject(reason),
            },
        }
    }

    /// The state after `step` is applied.
    #[must_use]
    pub const fn after(step: &Step) -> SelectionState {
        match step {
            Step::Select(selection) => SelectionState::Armed(*selection),
            Step::Deselect | Step::Move(_) | Step::Reject(_) => SelectionState::Idle,
        }
    }
}

/// Validate a click as a new source.
///
/// The pile must be non-empty, and for the tableau the clicked card (or the
/// top when no index is given) must be face-up. The stock is never a
/// source; it is drawn from instead.
pub fn select_source(
    state: &GameState,
    position: Position,
    card_index: Option<usize>,
) -> Result<Selection, Rejection> {
    if matches!(position, Position::Stock) {
        return Err(Rejection::NotASource);
    }
    let pile = state.pile(position).ok_or(Rejection::UnknownPile)?;
    if pile.is_empty() {
        return Err(Rejection::EmptyPile);
    }

    match position {
        Position::Tableau(_) => {
            let index = card_index.unwrap_or(pile.len() - 1);
            let card = pile.get(index).ok_or(Rejection::CardIndexOutOfRange)?;
            if !card.face_up {
                return Err(Rejection::FaceDown);
            }
            Ok(Selection::new(position, card_index))
        }
        _ => Ok(Selection::new(position, None)),
    }
}

fn attempt(state: &GameState, selection: &Selection, target: Position) -> Result<Move, Rejection> {
    let run = selection.run(state);
    if run.is_empty() {
        return Err(Rejection::EmptyPile);
    }
    let mv = Move::new(selection.position, target, run.len());
    check_move(state, &mv)?;
    Ok(mv)
}

/// Pick the auto-move for a double-activated pile.
///
/// The top card of the waste or a tableau column goes to the first
/// foundation, in index order, that accepts it.
pub fn auto_move_target(state: &GameState, position: Position) -> Result<Move, Rejection> {
    if !matches!(position, Position::Waste | Position::Tableau(_)) {
        return Err(Rejection::NotAutoMovable);
    }
    let card = state
        .pile(position)
        .ok_or(Rejection::UnknownPile)?
        .back()
        .ok_or(Rejection::EmptyPile)?;
    if !card.face_up {
        return Err(Rejection::FaceDown);
    }

    state
        .foundations
        .iter()
        .position(|f| can_move_to_foundation(card, f))
        .map(|i| Move::single(position, Position::Foundation(i)))
        .ok_or(Rejection::NoFoundationAccepts)
}
