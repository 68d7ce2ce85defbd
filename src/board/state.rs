//! Board state, terminal detection and scoring.
//!
//! ## Board
//!
//! Owns the pit array and whose turn it is. The pit array only changes
//! through `make_move` (see `sowing`) or the fixture setters, so the total
//! number of seeds on the board is fixed for the whole game.
//!
//! ## Scoring
//!
//! A player's score is their store plus every seed still in their houses.
//! Scoring is read-only: seeds are never swept into stores when the game
//! ends.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::layout::Layout;
use crate::core::{BoardConfig, KalahError, Player, PlayerMap, Result};

/// Pit storage. A standard six-house board (14 pits) stays inline.
pub(crate) type Pits = SmallVec<[u32; 14]>;

/// A Kalah board for one game.
///
/// ## Example
///
/// ```
/// use kalah_engine::{Board, Player};
///
/// let mut board = Board::new(3, 2).unwrap();
/// board.make_move(Player::First, 1).unwrap();
///
/// assert_eq!(board.seed_count(Player::First, 1).unwrap(), 0);
/// assert_eq!(board.seed_count(Player::First, 2).unwrap(), 3);
/// assert_eq!(board.current_player(), Player::Second);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    pub(super) layout: Layout,
    pub(super) initial_seeds: u32,
    pub(super) pits: Pits,
    pub(super) current: Player,
}

/// Unchecked wire shape of `Board`; converted through `TryFrom`.
#[derive(Deserialize)]
struct BoardRepr {
    layout: Layout,
    initial_seeds: u32,
    pits: Pits,
    current: Player,
}

impl TryFrom<BoardRepr> for Board {
    type Error = KalahError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        BoardConfig::new(repr.layout.houses(), repr.initial_seeds).validate()?;
        if repr.pits.len() != repr.layout.total_pits() {
            return Err(KalahError::InvalidArgument(format!(
                "pit array has {} entries, {} houses per side needs {}",
                repr.pits.len(),
                repr.layout.houses(),
                repr.layout.total_pits()
            )));
        }
        Ok(Self {
            layout: repr.layout,
            initial_seeds: repr.initial_seeds,
            pits: repr.pits,
            current: repr.current,
        })
    }
}

impl Default for Board {
    /// Standard board: six houses with four seeds each.
    fn default() -> Self {
        Self::setup(BoardConfig::default())
    }
}

impl Board {
    /// Create a board with `houses` houses per side and `seeds` seeds in each.
    ///
    /// Fails with `InvalidArgument` when either value is zero.
    pub fn new(houses: usize, seeds: u32) -> Result<Self> {
        Self::from_config(&BoardConfig::new(houses, seeds))
    }

    /// Create a board from a validated configuration.
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::setup(*config))
    }

    fn setup(config: BoardConfig) -> Self {
        let layout = Layout::new(config.houses);
        let mut pits: Pits = SmallVec::from_elem(0, layout.total_pits());
        for player in Player::all() {
            for index in layout.house_range(player) {
                pits[index] = config.seeds;
            }
        }

        debug!(
            "new board: {} houses x {} seeds, pits {:?}",
            config.houses, config.seeds, pits
        );

        Self {
            layout,
            initial_seeds: config.seeds,
            pits,
            current: Player::First,
        }
    }

    // === Accessors ===

    /// Length of the pit array (houses and stores of both sides).
    #[must_use]
    pub fn total_pits(&self) -> usize {
        self.pits.len()
    }

    /// Houses per side.
    #[must_use]
    pub fn houses(&self) -> usize {
        self.layout.houses()
    }

    /// Seeds placed in each house at setup.
    #[must_use]
    pub fn initial_seeds(&self) -> u32 {
        self.initial_seeds
    }

    /// Seeds currently in `player`'s 1-indexed `house`.
    pub fn seed_count(&self, player: Player, house: usize) -> Result<u32> {
        let index = self.layout.house_index(player, house)?;
        Ok(self.pits[index])
    }

    /// Seeds currently in `player`'s store.
    #[must_use]
    pub fn store_count(&self, player: Player) -> u32 {
        self.pits[self.layout.store_index(player)]
    }

    /// The player expected to move next.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Raw pit array in layout order.
    #[must_use]
    pub fn pits(&self) -> &[u32] {
        &self.pits
    }

    /// Total seeds on the board, stores included.
    #[must_use]
    pub fn total_seeds(&self) -> u64 {
        self.pits.iter().map(|&s| u64::from(s)).sum()
    }

    // === Fixtures ===

    /// Overwrite the seeds in a house.
    ///
    /// Bypasses every game rule, including seed conservation. Intended for
    /// building test positions, never for play. Scores are summed in `u64`,
    /// but sowing still adds to single `u32` pits, so keep values well below
    /// `u32::MAX`.
    pub fn set_seed_count(&mut self, player: Player, house: usize, seeds: u32) -> Result<()> {
        let index = self.layout.house_index(player, house)?;
        self.pits[index] = seeds;
        Ok(())
    }

    /// Overwrite the seeds in a store. Same caveats as `set_seed_count`.
    pub fn set_store_count(&mut self, player: Player, seeds: u32) {
        let index = self.layout.store_index(player);
        self.pits[index] = seeds;
    }

    // === Terminal ===

    /// Sum of the seeds in `player`'s houses.
    #[must_use]
    pub fn house_seeds(&self, player: Player) -> u64 {
        self.pits[self.layout.house_range(player)]
            .iter()
            .map(|&s| u64::from(s))
            .sum()
    }

    /// True once either side has no seeds left in its houses.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        Player::all().any(|player| self.house_seeds(player) == 0)
    }

    // === Scoring ===

    /// Store plus all seeds still in `player`'s houses.
    #[must_use]
    pub fn score(&self, player: Player) -> u64 {
        u64::from(self.store_count(player)) + self.house_seeds(player)
    }

    /// Both players' scores.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u64> {
        PlayerMap::new(|player| self.score(player))
    }

    /// The player with the strictly higher score, or `None` on a draw.
    ///
    /// Fails with `InvalidState` while the game is still running.
    pub fn winner(&self) -> Result<Option<Player>> {
        if !self.is_game_over() {
            return Err(KalahError::InvalidState(
                "winner requested before the game is over".to_string(),
            ));
        }

        let first = self.score(Player::First);
        let second = self.score(Player::Second);
        Ok(match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Player::First),
            std::cmp::Ordering::Less => Some(Player::Second),
            std::cmp::Ordering::Equal => None,
        })
    }
}
