//! What happened when a move was requested.

use serde::{Deserialize, Serialize};

use super::layout::Pit;
use crate::core::Player;

/// Why a requested move left the board untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// One side has no seeds left in its houses.
    GameOver,
    /// The requesting player is not the current player.
    NotYourTurn,
    /// The selected house holds no seeds.
    EmptyHouse,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IgnoreReason::GameOver => "game is over",
            IgnoreReason::NotYourTurn => "not this player's turn",
            IgnoreReason::EmptyHouse => "house is empty",
        };
        f.write_str(text)
    }
}

/// Details of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The player who moved.
    pub player: Player,

    /// The 1-indexed house that was emptied.
    pub house: usize,

    /// Seeds picked up and sown.
    pub seeds_sown: u32,

    /// Where the final seed landed.
    pub last_pit: Pit,

    /// Seeds moved to the mover's store by a capture (0 if none).
    pub captured: u32,

    /// The mover plays again.
    pub extra_turn: bool,

    /// Current player after the move.
    pub next_player: Player,
}

/// Result of `Board::make_move`.
///
/// Rule violations are not errors; they come back as `Ignored`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was rejected and the board is unchanged.
    Ignored(IgnoreReason),
    /// The move was applied.
    Sown(MoveReport),
}

impl MoveOutcome {
    /// Check whether the board changed.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Sown(_))
    }

    /// Get the move report, if the move was applied.
    #[must_use]
    pub fn report(&self) -> Option<&MoveReport> {
        match self {
            MoveOutcome::Sown(report) => Some(report),
            MoveOutcome::Ignored(_) => None,
        }
    }

    /// Get the rejection reason, if the move was ignored.
    #[must_use]
    pub fn ignore_reason(&self) -> Option<IgnoreReason> {
        match self {
            MoveOutcome::Ignored(reason) => Some(*reason),
            MoveOutcome::Sown(_) => None,
        }
    }
}
