//! Move execution.
//!
//! The executor applies moves that have already passed
//! `rules::check_move`. It re-checks only the pile structure (that the
//! source holds enough cards and the target can receive them), never the
//! placement rules.
//!
//! Both entry points take the current state by reference and return a new
//! state. A rejected call produces nothing, so a move either fully applies
//! or leaves the caller's state as it was.

use tracing::trace;

use crate::core::{Action, GameState, Move, Position, Rejection};

/// Transfer the top `mv.count` cards of the source onto the target.
///
/// - Tableau source: a face-down card left on top is turned face-up.
/// - Waste or foundation source: a single card is popped.
/// - Foundation target: receives exactly one card.
/// - Tableau target: receives the run in order.
///
/// The move counter advances by one.
pub fn execute_move(state: &GameState, mv: &Move) -> Result<GameState, Rejection> {
    validate_structure(state, mv)?;

    let mut next = state.clone();

    let source = next.pile_mut(mv.source).ok_or(Rejection::UnknownPile)?;
    let run = source.split_off(source.len() - mv.count);
    if mv.source.is_tableau() {
        if let Some(top) = source.back_mut() {
            if !top.face_up {
                top.face_up = true;
                trace!(card = %top.id(), position = %mv.source, "revealed");
            }
        }
    }

    next.pile_mut(mv.target)
        .ok_or(Rejection::UnknownPile)?
        .append(run);
    next.move_count += 1;

    trace!(%mv, move_count = next.move_count, "executed move");
    Ok(next)
}

fn validate_structure(state: &GameState, mv: &Move) -> Result<(), Rejection> {
    let source_len = state.pile(mv.source).ok_or(Rejection::UnknownPile)?.len();
    state.pile(mv.target).ok_or(Rejection::UnknownPile)?;

    match mv.source {
        Position::Stock => return Err(Rejection::NotASource),
        Position::Waste | Position::Foundation(_) if mv.count != 1 => {
            return Err(Rejection::CardIndexOutOfRange)
        }
        _ => {}
    }
    match mv.target {
        Position::Stock | Position::Waste => return Err(Rejection::IllegalTarget),
        Position::Foundation(_) if mv.count != 1 => return Err(Rejection::MultiCardToFoundation),
        _ => {}
    }
    if mv.source == mv.target {
        return Err(Rejection::SamePile);
    }
    if source_len == 0 {
        return Err(Rejection::EmptyPile);
    }
    if mv.count == 0 || mv.count > source_len {
        return Err(Rejection::CardIndexOutOfRange);
    }
    Ok(())
}

/// Handle a click on the stock.
///
/// - Stock not empty: its top card turns face-up onto the waste.
/// - Stock empty, waste not: the waste is turned over to become the stock,
///   reversing its order and turning every card face-down.
/// - Both empty: `Rejection::NothingToDraw`.
///
/// Draws and recycles both advance the move counter.
pub fn draw_from_stock(state: &GameState) -> Result<(GameState, Action), Rejection> {
    let mut next = state.clone();

    let action = if let Some(card) = next.stock.pop_back() {
        next.waste.push_back(card.turned_up());
        Action::Draw
    } else if !next.waste.is_empty() {
        next.stock = next.waste.iter().rev().map(|c| c.turned_down()).collect();
        next.waste.clear();
        Action::Recycle
    } else {
        return Err(Rejection::NothingToDraw);
    };

    next.move_count += 1;
    trace!(?action, stock = next.stock.len(), waste = next.waste.len(), "stock clicked");
    Ok((next, action))
}
