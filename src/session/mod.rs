//! Interaction layer: selection state machine, undo history, and the
//! `Session` that ties them to the live game state.
//!
//! ## Key Types
//!
//! - `Session`: command and query surface for a presentation layer
//! - `SelectionState`: Idle/Armed two-click machine
//! - `History`: bounded undo snapshots
//! - `Outcome`: what a command did

pub mod controller;
pub mod history;
pub mod selection;

pub use controller::{Outcome, Session};
pub use history::History;
pub use selection::{auto_move_target, select_source, Run, Selection, SelectionState, Step};
