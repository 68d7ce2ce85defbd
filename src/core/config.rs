//! Board configuration.
//!
//! A game is configured once at startup with the number of houses per side
//! and the number of seeds initially placed in every house. The standard
//! board is six houses with four seeds each.

use serde::{Deserialize, Serialize};

use super::error::{KalahError, Result};

/// Houses per side on a standard board.
pub const DEFAULT_HOUSES: usize = 6;

/// Seeds per house on a standard board.
pub const DEFAULT_SEEDS: u32 = 4;

/// Setup parameters for a `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Houses per player, stores excluded.
    pub houses: usize,

    /// Seeds placed in each house at setup.
    pub seeds: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            houses: DEFAULT_HOUSES,
            seeds: DEFAULT_SEEDS,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with explicit values.
    #[must_use]
    pub const fn new(houses: usize, seeds: u32) -> Self {
        Self { houses, seeds }
    }

    /// Set the number of houses per player.
    #[must_use]
    pub fn with_houses(mut self, houses: usize) -> Self {
        self.houses = houses;
        self
    }

    /// Set the initial seeds per house.
    #[must_use]
    pub fn with_seeds(mut self, seeds: u32) -> Self {
        self.seeds = seeds;
        self
    }

    /// Total pits on the board: both sides' houses plus two stores.
    #[must_use]
    pub const fn total_pits(&self) -> usize {
        self.houses * 2 + 2
    }

    /// Total seeds in play for the whole game.
    #[must_use]
    pub fn total_seeds(&self) -> u64 {
        2 * self.houses as u64 * u64::from(self.seeds)
    }

    /// Check that both parameters are positive.
    pub fn validate(&self) -> Result<()> {
        if self.houses == 0 {
            return Err(KalahError::InvalidArgument(
                "houses per player must be positive".to_string(),
            ));
        }
        if self.seeds == 0 {
            return Err(KalahError::InvalidArgument(
                "seeds per house must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
