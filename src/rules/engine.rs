//! Rules engine trait for the board.
//!
//! `RulesEngine` is the move-level surface a caller drives a game through:
//! - What moves are legal
//! - How a move modifies the board
//! - Whether the game has ended, and how

use crate::board::{Board, MoveOutcome};
use crate::core::{Player, PlayerMap, Result};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Derive the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u64>) -> Self {
        let first = scores[Player::First];
        let second = scores[Player::Second];
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::First),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Second),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty vec if player can't act
/// - `apply_move`: Must be deterministic
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Houses `player` may legally play right now (1-indexed).
    fn legal_moves(&self, player: Player) -> Vec<usize>;

    /// Apply a move for `player`.
    fn apply_move(&mut self, player: Player, house: usize) -> Result<MoveOutcome>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    /// Current scores for both players.
    fn final_scores(&self) -> PlayerMap<u64>;

    // === Convenience Methods ===

    /// Check whether `player` has any legal move.
    fn can_move(&self, player: Player) -> bool {
        !self.legal_moves(player).is_empty()
    }
}

impl RulesEngine for Board {
    fn legal_moves(&self, player: Player) -> Vec<usize> {
        if self.is_game_over() || player != self.current_player() {
            return Vec::new();
        }
        (1..=self.houses())
            .filter(|&house| matches!(self.seed_count(player, house), Ok(seeds) if seeds > 0))
            .collect()
    }

    fn apply_move(&mut self, player: Player, house: usize) -> Result<MoveOutcome> {
        self.make_move(player, house)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if self.is_game_over() {
            Some(GameResult::from_scores(&self.scores()))
        } else {
            None
        }
    }

    fn final_scores(&self) -> PlayerMap<u64> {
        self.scores()
    }
}
