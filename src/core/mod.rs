//! Core engine types: players, configuration, errors.

pub mod config;
pub mod error;
pub mod player;

pub use config::{BoardConfig, DEFAULT_HOUSES, DEFAULT_SEEDS};
pub use error::{KalahError, Result};
pub use player::{Player, PlayerMap};
