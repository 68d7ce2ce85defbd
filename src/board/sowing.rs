//! Move execution.
//!
//! A move empties one of the mover's houses and sows its seeds one per pit
//! forward around the board, skipping the opponent's store on every lap.
//! The final seed decides the follow-up:
//! - in the mover's store: the mover plays again
//! - in a previously empty house of the mover: capture that seed plus the
//!   contents of the facing house
//! - anywhere else: the turn passes

use log::{debug, trace};

use super::layout::Pit;
use super::outcome::{IgnoreReason, MoveOutcome, MoveReport};
use super::state::Board;
use crate::core::{Player, Result};

impl Board {
    /// Play `player`'s 1-indexed `house`.
    ///
    /// Fails with `InvalidArgument` only when `house` is outside
    /// `1..=houses`. A move that breaks the rules (game over, wrong turn,
    /// empty house) leaves the board untouched and returns
    /// `MoveOutcome::Ignored`.
    pub fn make_move(&mut self, player: Player, house: usize) -> Result<MoveOutcome> {
        let source = self.layout.house_index(player, house)?;

        if let Some(reason) = self.check_move(player, source) {
            debug!("ignored move {} house {}: {}", player, house, reason);
            return Ok(MoveOutcome::Ignored(reason));
        }

        let seeds = std::mem::take(&mut self.pits[source]);
        let last = self.sow(player, source, seeds);
        let last_pit = self.layout.pit_at(last);

        let captured = match last_pit {
            Pit::House { .. } if last_pit.owner() == player && self.pits[last] == 1 => {
                self.capture(player, last)
            }
            _ => 0,
        };

        let extra_turn = last_pit == Pit::Store(player);
        if !extra_turn {
            self.current = player.opponent();
        }

        let report = MoveReport {
            player,
            house,
            seeds_sown: seeds,
            last_pit,
            captured,
            extra_turn,
            next_player: self.current,
        };
        debug!("applied move: {:?}, pits {:?}", report, self.pits);

        Ok(MoveOutcome::Sown(report))
    }

    fn check_move(&self, player: Player, source: usize) -> Option<IgnoreReason> {
        if self.is_game_over() {
            Some(IgnoreReason::GameOver)
        } else if player != self.current {
            Some(IgnoreReason::NotYourTurn)
        } else if self.pits[source] == 0 {
            Some(IgnoreReason::EmptyHouse)
        } else {
            None
        }
    }

    /// Sow `seeds` starting after `source`; returns the index of the last pit.
    fn sow(&mut self, mover: Player, source: usize, seeds: u32) -> usize {
        let mut index = source;
        for _ in 0..seeds {
            index = self.layout.next_sowing_index(index, mover);
            self.pits[index] += 1;
            trace!("sow into pit {} -> {}", index, self.pits[index]);
        }
        index
    }

    /// Move the landing seed and the facing house into `mover`'s store.
    fn capture(&mut self, mover: Player, landing: usize) -> u32 {
        let opposite = self.layout.opposite(landing);
        let captured =
            std::mem::take(&mut self.pits[landing]) + std::mem::take(&mut self.pits[opposite]);
        let store = self.layout.store_index(mover);
        self.pits[store] += captured;
        debug!(
            "{} captures {} seeds from pits {} and {}",
            mover, captured, landing, opposite
        );
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KalahError;

    fn board() -> Board {
        Board::new(3, 2).unwrap()
    }

    #[test]
    fn test_basic_sowing() {
        let mut board = board();
        let outcome = board.make_move(Player::First, 1).unwrap();

        assert_eq!(board.pits(), &[0, 3, 3, 0, 2, 2, 2, 0]);
        assert_eq!(board.current_player(), Player::Second);

        let report = outcome.report().unwrap();
        assert_eq!(report.seeds_sown, 2);
        assert_eq!(report.last_pit, Pit::House { player: Player::First, house: 3 });
        assert_eq!(report.captured, 0);
        assert!(!report.extra_turn);
    }

    #[test]
    fn test_extra_turn_in_own_store() {
        let mut board = board();
        let outcome = board.make_move(Player::First, 2).unwrap();

        assert_eq!(board.pits(), &[2, 0, 3, 1, 2, 2, 2, 0]);
        assert_eq!(board.current_player(), Player::First);
        assert!(outcome.report().unwrap().extra_turn);
    }

    #[test]
    fn test_second_player_extra_turn() {
        let mut board = board();
        board.make_move(Player::First, 1).unwrap();
        board.make_move(Player::Second, 2).unwrap();

        assert_eq!(board.store_count(Player::Second), 1);
        assert_eq!(board.current_player(), Player::Second);
    }

    #[test]
    fn test_capture_on_empty_own_house() {
        let mut board = board();
        board.set_seed_count(Player::First, 3, 0).unwrap();

        let outcome = board.make_move(Player::First, 1).unwrap();

        // Landing seed plus Second's house 1 (2 seeds).
        assert_eq!(outcome.report().unwrap().captured, 3);
        assert_eq!(board.seed_count(Player::First, 3).unwrap(), 0);
        assert_eq!(board.seed_count(Player::Second, 1).unwrap(), 0);
        assert_eq!(board.store_count(Player::First), 3);
        assert_eq!(board.current_player(), Player::Second);
    }

    #[test]
    fn test_capture_with_empty_opposite_takes_landing_seed() {
        let mut board = board();
        board.set_seed_count(Player::First, 3, 0).unwrap();
        board.set_seed_count(Player::Second, 1, 0).unwrap();

        let outcome = board.make_move(Player::First, 1).unwrap();

        assert_eq!(outcome.report().unwrap().captured, 1);
        assert_eq!(board.store_count(Player::First), 1);
        assert_eq!(board.seed_count(Player::First, 3).unwrap(), 0);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        let mut board = board();
        board.set_seed_count(Player::First, 3, 3).unwrap();
        board.set_seed_count(Player::Second, 2, 0).unwrap();

        // 3 seeds: store, Second h1, Second h2 (was empty).
        let outcome = board.make_move(Player::First, 3).unwrap();

        assert_eq!(outcome.report().unwrap().captured, 0);
        assert_eq!(board.seed_count(Player::Second, 2).unwrap(), 1);
        assert_eq!(board.store_count(Player::First), 1);
    }

    #[test]
    fn test_lap_skips_opponent_store() {
        let mut board = board();
        board.set_seed_count(Player::First, 3, 10).unwrap();

        board.make_move(Player::First, 3).unwrap();

        assert_eq!(board.store_count(Player::Second), 0);
        assert_eq!(board.store_count(Player::First), 2);
        assert_eq!(board.pits(), &[3, 3, 1, 2, 4, 4, 3, 0]);
    }

    #[test]
    fn test_full_lap_into_source_house_captures() {
        let mut board = board();
        // 7 seeds: store, S1, S2, S3, F1, F2, F3 (source, emptied).
        board.set_seed_count(Player::First, 3, 7).unwrap();

        let outcome = board.make_move(Player::First, 3).unwrap();

        // Landing seed plus Second's house 1 (2 + 1 from the lap).
        assert_eq!(outcome.report().unwrap().captured, 4);
        assert_eq!(board.store_count(Player::First), 5);
        assert_eq!(board.store_count(Player::Second), 0);
    }

    #[test]
    fn test_second_lap_into_source_house_does_not_capture() {
        let mut board = board();
        // 14 seeds: two full laps of 7 pits, the last landing in F3 again.
        board.set_seed_count(Player::First, 3, 14).unwrap();

        let outcome = board.make_move(Player::First, 3).unwrap();

        // F3 already held the first lap's seed when the final one landed.
        let report = outcome.report().unwrap();
        assert_eq!(report.last_pit, Pit::House { player: Player::First, house: 3 });
        assert_eq!(report.captured, 0);
        assert_eq!(board.pits(), &[4, 4, 2, 2, 4, 4, 4, 0]);
        assert_eq!(board.current_player(), Player::Second);
    }

    #[test]
    fn test_wrong_turn_is_ignored() {
        let mut board = board();
        let before = board.clone();

        let outcome = board.make_move(Player::Second, 1).unwrap();

        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::NotYourTurn));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_house_is_ignored() {
        let mut board = board();
        board.set_seed_count(Player::First, 1, 0).unwrap();
        let before = board.clone();

        let outcome = board.make_move(Player::First, 1).unwrap();

        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::EmptyHouse));
        assert_eq!(board, before);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut board = board();
        for house in 1..=3 {
            board.set_seed_count(Player::Second, house, 0).unwrap();
        }
        let before = board.clone();

        let outcome = board.make_move(Player::First, 1).unwrap();

        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::GameOver));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_house_is_an_error() {
        let mut board = board();
        assert!(matches!(
            board.make_move(Player::First, 0),
            Err(KalahError::InvalidArgument(_))
        ));
        assert!(matches!(
            board.make_move(Player::First, 4),
            Err(KalahError::InvalidArgument(_))
        ));
        assert_eq!(board, Board::new(3, 2).unwrap());
    }
}
