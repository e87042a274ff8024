//! Pile mutation: move execution and the stock/waste cycle.
//!
//! ## Key Functions
//!
//! - `execute_move`: atomic pile-to-pile transfer with tableau reveal
//! - `draw_from_stock`: draw one card, or recycle the waste when the stock
//!   runs out

pub mod executor;

pub use executor::{draw_from_stock, execute_move};
