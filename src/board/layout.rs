//! Pit-array layout.
//!
//! All index arithmetic over the pit array lives here. For `houses = n`:
//!
//! ```text
//! index:  0 .. n-1      n          n+1 .. 2n       2n+1
//!         First houses  First store Second houses  Second store
//! ```
//!
//! Houses are 1-indexed from their owner's perspective. Sowing walks the
//! array forward, so each side's houses lead into that side's own store.
//! House `k` of one side faces house `n + 1 - k` of the other.

use serde::{Deserialize, Serialize};

use crate::core::{KalahError, Player, Result};

/// A named position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pit {
    /// House `house` (1-indexed) on `player`'s side.
    House { player: Player, house: usize },
    /// `player`'s store.
    Store(Player),
}

impl Pit {
    /// Get the player owning this pit.
    #[must_use]
    pub const fn owner(self) -> Player {
        match self {
            Pit::House { player, .. } | Pit::Store(player) => player,
        }
    }
}

/// Index mapping for a board with a fixed number of houses per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    houses: usize,
}

impl Layout {
    #[must_use]
    pub const fn new(houses: usize) -> Self {
        Self { houses }
    }

    /// Houses per side.
    #[must_use]
    pub const fn houses(self) -> usize {
        self.houses
    }

    /// Length of the pit array.
    #[must_use]
    pub const fn total_pits(self) -> usize {
        self.houses * 2 + 2
    }

    /// First array index of `player`'s houses.
    #[inline]
    const fn offset(self, player: Player) -> usize {
        match player {
            Player::First => 0,
            Player::Second => self.houses + 1,
        }
    }

    /// Array index of `player`'s store.
    #[inline]
    #[must_use]
    pub const fn store_index(self, player: Player) -> usize {
        self.offset(player) + self.houses
    }

    /// Array index of a 1-indexed house.
    ///
    /// Fails with `InvalidArgument` when `house` is outside `1..=houses`.
    pub fn house_index(self, player: Player, house: usize) -> Result<usize> {
        if house < 1 || house > self.houses {
            return Err(KalahError::InvalidArgument(format!(
                "house {} is out of range 1..={}",
                house, self.houses
            )));
        }
        Ok(self.offset(player) + house - 1)
    }

    /// Array index range covering `player`'s houses.
    #[must_use]
    pub fn house_range(self, player: Player) -> std::ops::Range<usize> {
        let start = self.offset(player);
        start..start + self.houses
    }

    /// Resolve an array index to the pit it names.
    #[must_use]
    pub fn pit_at(self, index: usize) -> Pit {
        debug_assert!(index < self.total_pits());
        let player = if index <= self.houses {
            Player::First
        } else {
            Player::Second
        };
        if index == self.store_index(player) {
            Pit::Store(player)
        } else {
            Pit::House {
                player,
                house: index - self.offset(player) + 1,
            }
        }
    }

    /// Array index of the house directly across from the house at `index`.
    #[inline]
    #[must_use]
    pub fn opposite(self, index: usize) -> usize {
        debug_assert!(index != self.houses && index < 2 * self.houses + 1);
        2 * self.houses - index
    }

    /// Next index a seed is sown into when `mover` is sowing from `index`.
    ///
    /// Wraps at the end of the array and skips the opponent's store.
    #[inline]
    #[must_use]
    pub fn next_sowing_index(self, index: usize, mover: Player) -> usize {
        let skip = self.store_index(mover.opponent());
        let mut next = (index + 1) % self.total_pits();
        if next == skip {
            next = (next + 1) % self.total_pits();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_indices() {
        let layout = Layout::new(6);
        assert_eq!(layout.total_pits(), 14);
        assert_eq!(layout.store_index(Player::First), 6);
        assert_eq!(layout.store_index(Player::Second), 13);
    }

    #[test]
    fn test_house_index() {
        let layout = Layout::new(3);
        assert_eq!(layout.house_index(Player::First, 1).unwrap(), 0);
        assert_eq!(layout.house_index(Player::First, 3).unwrap(), 2);
        assert_eq!(layout.house_index(Player::Second, 1).unwrap(), 4);
        assert_eq!(layout.house_index(Player::Second, 3).unwrap(), 6);
    }

    #[test]
    fn test_house_index_out_of_range() {
        let layout = Layout::new(3);
        assert!(matches!(
            layout.house_index(Player::First, 0),
            Err(KalahError::InvalidArgument(_))
        ));
        assert!(matches!(
            layout.house_index(Player::Second, 4),
            Err(KalahError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pit_at_round_trips_house_index() {
        let layout = Layout::new(4);
        for player in Player::all() {
            for house in 1..=4 {
                let index = layout.house_index(player, house).unwrap();
                assert_eq!(layout.pit_at(index), Pit::House { player, house });
            }
            assert_eq!(layout.pit_at(layout.store_index(player)), Pit::Store(player));
        }
        assert_eq!(layout.pit_at(4).owner(), Player::First);
        assert_eq!(layout.pit_at(5).owner(), Player::Second);
    }

    #[test]
    fn test_opposite_mirrors_house_numbers() {
        let layout = Layout::new(6);
        for k in 1..=6 {
            let first = layout.house_index(Player::First, k).unwrap();
            let second = layout.house_index(Player::Second, 7 - k).unwrap();
            assert_eq!(layout.opposite(first), second);
            assert_eq!(layout.opposite(second), first);
        }
    }

    #[test]
    fn test_next_sowing_index_skips_opponent_store() {
        let layout = Layout::new(3);
        // First sows into its own store (3) and skips Second's (7).
        assert_eq!(layout.next_sowing_index(2, Player::First), 3);
        assert_eq!(layout.next_sowing_index(6, Player::First), 0);
        // Second skips First's store and wraps through its own.
        assert_eq!(layout.next_sowing_index(2, Player::Second), 4);
        assert_eq!(layout.next_sowing_index(6, Player::Second), 7);
        assert_eq!(layout.next_sowing_index(7, Player::Second), 0);
    }
}
