//! Rules engine surface.
//!
//! `RulesEngine` exposes legal-move enumeration, move application and
//! terminal detection for driving a game to completion. `Board` is the
//! only implementation.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
