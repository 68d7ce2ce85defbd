//! # kalah-engine
//!
//! Rules engine for Kalah, the two-player Mancala sowing game.
//!
//! ## Rules
//!
//! Each player owns a row of houses and a store. On a turn the player
//! empties one of their houses and sows its seeds one by one into the
//! following pits, passing through their own store but never the
//! opponent's.
//!
//! - **Extra turn**: the last seed lands in the mover's store.
//! - **Capture**: the last seed lands in an empty house of the mover; that
//!   seed and everything in the facing house go to the mover's store.
//! - **Game over**: either side has no seeds left in its houses. Scores are
//!   store plus remaining house seeds.
//!
//! ## Design
//!
//! - **Single owned state**: one `Board` per game, passed explicitly.
//!   It performs no internal locking.
//! - **Quiet rule violations**: moves that break the rules leave the board
//!   unchanged and return `MoveOutcome::Ignored`. Only caller mistakes
//!   (bad setup values, house out of range, early winner query) are errors.
//!
//! ## Modules
//!
//! - `core`: players, configuration, errors
//! - `board`: pit layout, board state, sowing
//! - `rules`: `RulesEngine` trait and game results

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{BoardConfig, KalahError, Player, PlayerMap, Result};

pub use crate::board::{Board, IgnoreReason, Layout, MoveOutcome, MoveReport, Pit};

pub use crate::rules::{GameResult, RulesEngine};
