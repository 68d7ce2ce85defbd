//! The Kalah board engine.
//!
//! - `layout`: pit-array index mapping (houses, stores, facing houses)
//! - `state`: the `Board` itself, terminal detection and scoring
//! - `sowing`: move validation and execution
//! - `outcome`: what a move request did

pub mod layout;
pub mod outcome;
mod sowing;
pub mod state;

pub use layout::{Layout, Pit};
pub use outcome::{IgnoreReason, MoveOutcome, MoveReport};
pub use state::Board;
