//! CPU opponent integrating evaluation and search
//!
//! The CPU player picks moves in one of three tiers:
//! 1. **Easy**: uniform random choice among the legal moves, no lookahead
//! 2. **Medium**: alpha-beta minimax, 3 plies
//! 3. **Hard**: alpha-beta minimax, 5 plies
//!
//! The random source is seedable so tests stay deterministic.
//!
//! # Example
//!
//! ```
//! use othello::{Board, CpuPlayer, Difficulty, Player};
//!
//! let board = Board::initial();
//! let mut cpu = CpuPlayer::new();
//!
//! if let Some(pos) = cpu.choose_move(&board, Player::Black, Difficulty::Medium) {
//!     println!("CPU plays at ({}, {})", pos.row, pos.col);
//! }
//! ```

use crate::board::{Board, Player, Pos};
use crate::rules::legal_moves;
use crate::search::best_move;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// CPU difficulty tier.
///
/// A closed enumeration so the tier-to-behavior mapping is exhaustive
/// and checked by the compiler; there is no depth lookup that could
/// admit an unknown tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Random legal move
    Easy,
    /// Depth-3 search
    Medium,
    /// Depth-5 search
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Result of a CPU move selection with diagnostics for the GUI.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Chosen move, `None` when the player must pass
    pub best_move: Option<Pos>,
    /// Subtree value of the chosen move (0 for the random tier)
    pub score: i32,
    /// Tier that produced the move
    pub difficulty: Difficulty,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes searched (1 per considered move for the random tier)
    pub nodes: u64,
}

/// CPU player for Othello.
///
/// Owns the random source used by the Easy tier. Medium and Hard are
/// pure functions of the position; only Easy draws randomness.
pub struct CpuPlayer {
    rng: StdRng,
}

impl CpuPlayer {
    /// CPU player seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// CPU player with a fixed seed, for reproducible games and tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a move for `player`, or `None` when there is no legal
    /// move (a forced pass, not an error).
    pub fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Option<Pos> {
        self.choose_move_with_stats(board, player, difficulty)
            .best_move
    }

    /// Choose a move and report timing and node statistics.
    pub fn choose_move_with_stats(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> MoveResult {
        let start = Instant::now();

        let moves = legal_moves(board, player);
        if moves.is_empty() {
            return MoveResult {
                best_move: None,
                score: 0,
                difficulty,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            };
        }

        let (chosen, score, nodes) = match difficulty {
            Difficulty::Easy => {
                let idx = self.rng.random_range(0..moves.len());
                (Some(moves[idx]), 0, moves.len() as u64)
            }
            Difficulty::Medium => {
                let result = best_move(board, player, 3);
                (result.best_move, result.score, result.nodes)
            }
            Difficulty::Hard => {
                let result = best_move(board, player, 5);
                (result.best_move, result.score, result.nodes)
            }
        };

        MoveResult {
            best_move: chosen,
            score,
            difficulty,
            time_ms: start.elapsed().as_millis() as u64,
            nodes,
        }
    }
}

impl Default for CpuPlayer {
    fn default() -> Self {
        Self::new()
    }
}
