//! Play session: the single owner of live state, selection, and history.
//!
//! `Session` is the boundary a presentation layer talks to. Commands take
//! `&mut self`, run to completion, and report an `Outcome`. Refused commands
//! come back as `Outcome::Rejected` and leave the game state untouched.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::{Position, SessionConfig};
//! use klondike_engine::session::{Outcome, Session};
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(7));
//!
//! // Turn a card from the stock onto the waste
//! let outcome = session.draw_stock();
//! assert!(matches!(outcome, Outcome::Applied { .. }));
//! assert_eq!(session.move_count(), 1);
//! assert!(session.can_undo());
//!
//! // Take it back
//! session.undo();
//! assert_eq!(session.move_count(), 0);
//! ```

use tracing::{debug, instrument};

use super::history::History;
use super::selection::{auto_move_target, Run, Selection, SelectionState, Step};
use crate::cards::initialize_game;
use crate::core::{Action, Card, GameRng, GameState, Move, Position, Rejection, SessionConfig};
use crate::piles::{draw_from_stock, execute_move};
use crate::rules::{is_won, legal_moves};

/// Result of a session command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A source was armed.
    Selected(Selection),
    /// The armed source was clicked again and released.
    Deselected,
    /// The game state changed.
    Applied {
        action: Action,
        /// True only on the action that completes the game.
        won: bool,
    },
    /// The previous state was restored.
    Undone,
    /// Nothing changed in the game state.
    Rejected(Rejection),
}

impl Outcome {
    /// Did the command change the game state?
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }
}

/// A game in progress.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    rng: GameRng,
    state: GameState,
    selection: SelectionState,
    history: History,
    won: bool,
}

impl Session {
    /// Start a session and deal the first game.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let state = initialize_game(&mut rng.fork());
        debug!(seed = rng.seed(), "session started");

        Self {
            history: History::new(config.history_capacity),
            config,
            rng,
            state,
            selection: SelectionState::Idle,
            won: false,
        }
    }

    /// Resume play from an arbitrary state, with empty history.
    ///
    /// Intended for tests and tools that need a specific layout.
    #[must_use]
    pub fn from_state(config: SessionConfig, state: GameState) -> Self {
        let mut session = Self::new(config);
        session.won = is_won(&state);
        session.state = state;
        session
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    /// The armed selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.selection()
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection
    }

    /// Is the card at `position`/`card_index` the armed selection?
    #[must_use]
    pub fn is_selected(&self, position: Position, card_index: Option<usize>) -> bool {
        self.selection()
            .is_some_and(|s| s.matches(position, card_index))
    }

    /// Cards the armed selection would move.
    #[must_use]
    pub fn selected_cards(&self) -> Run {
        self.selection()
            .map(|s| s.run(&self.state))
            .unwrap_or_default()
    }

    /// Top card shown at a pile. The stock never exposes a card.
    #[must_use]
    pub fn card_at(&self, position: Position) -> Option<&Card> {
        match position {
            Position::Stock => None,
            Position::Waste | Position::Foundation(_) | Position::Tableau(_) => self.state.top(position),
        }
    }

    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        is_won(&self.state)
    }

    /// Moves the rules allow right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.state)
    }

    // === Commands ===

    /// Deal a fresh game, dropping history and selection.
    #[instrument(level = "debug", skip(self))]
    pub fn new_game(&mut self) {
        self.state = initialize_game(&mut self.rng.fork());
        self.history.clear();
        self.selection = SelectionState::Idle;
        self.won = false;
    }

    /// Click on the stock: draw a card, or recycle the waste.
    ///
    /// Always clears the selection.
    #[instrument(level = "debug", skip(self))]
    pub fn draw_stock(&mut self) -> Outcome {
        self.selection = SelectionState::Idle;
        match draw_from_stock(&self.state) {
            Ok((next, action)) => self.commit(next, action),
            Err(reason) => self.reject(reason),
        }
    }

    /// Click on a pile, optionally on a specific tableau card.
    ///
    /// Arms a source, releases it, or attempts a move, depending on the
    /// selection state.
    #[instrument(level = "debug", skip(self))]
    pub fn select_or_move(&mut self, position: Position, card_index: Option<usize>) -> Outcome {
        let step = self.selection.on_click(&self.state, position, card_index);
        self.selection = SelectionState::after(&step);

        match step {
            Step::Select(selection) => Outcome::Selected(selection),
            Step::Deselect => Outcome::Deselected,
            Step::Move(mv) => match execute_move(&self.state, &mv) {
                Ok(next) => self.commit(next, Action::Move(mv)),
                Err(reason) => self.reject(reason),
            },
            Step::Reject(reason) => self.reject(reason),
        }
    }

    /// Double-activate: send the top card of the waste or a tableau column
    /// to the first foundation that takes it.
    #[instrument(level = "debug", skip(self))]
    pub fn auto_move_to_foundation(&mut self, position: Position) -> Outcome {
        let result = auto_move_target(&self.state, position)
            .and_then(|mv| execute_move(&self.state, &mv).map(|next| (next, mv)));

        match result {
            Ok((next, mv)) => {
                self.selection = SelectionState::Idle;
                self.commit(next, Action::Move(mv))
            }
            Err(reason) => self.reject(reason),
        }
    }

    /// Restore the state before the last accepted action.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> Outcome {
        let Some(previous) = self.history.pop() else {
            return self.reject(Rejection::NothingToUndo);
        };

        self.state = previous;
        self.selection = SelectionState::Idle;
        self.won = is_won(&self.state);
        debug!(move_count = self.state.move_count, depth = self.history.len(), "undone");
        Outcome::Undone
    }

    // === Internals ===

    fn commit(&mut self, next: GameState, action: Action) -> Outcome {
        debug_assert!(
            self.state.holds_same_cards(&next),
            "card conservation violated by {action:?}"
        );

        let previous = std::mem::replace(&mut self.state, next);
        self.history.push(previous);

        let won_now = is_won(&self.state);
        let won = won_now && !self.won;
        self.won = won_now;

        debug!(?action, move_count = self.state.move_count, won, "applied");
        Outcome::Applied { action, won }
    }

    fn reject(&self, reason: Rejection) -> Outcome {
        debug!(%reason, "rejected");
        Outcome::Rejected(reason)
    }
}
