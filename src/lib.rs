//! Othello (Reversi) engine with a CPU opponent
//!
//! An 8x8 Othello implementation: full rules enforcement, a heuristic
//! CPU opponent with three difficulty tiers, and a desktop GUI.
//!
//! # Architecture
//!
//! - [`board`]: board representation (value-typed 8x8 grid)
//! - [`rules`]: flip computation, legal moves, terminal detection
//! - [`eval`]: static position evaluation for the search
//! - [`search`]: depth-limited alpha-beta minimax
//! - [`engine`]: CPU player with Easy/Medium/Hard tiers
//! - [`session`]: turn sequencing with automatic pass handling
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use othello::{Board, CpuPlayer, Difficulty, Player, rules};
//!
//! let board = Board::initial();
//! let mut cpu = CpuPlayer::new();
//!
//! // Black opens with one of its four legal moves
//! let pos = cpu.choose_move(&board, Player::Black, Difficulty::Medium).unwrap();
//! let board = rules::apply_move(&board, pos, Player::Black).unwrap();
//! assert_eq!(board.score().total(), 5);
//! ```
//!
//! # Difficulty tiers
//!
//! - **Easy** picks a uniformly random legal move (seedable RNG)
//! - **Medium** searches 3 plies with alpha-beta pruning
//! - **Hard** searches 5 plies
//!
//! Boards are plain values: applying a move returns a new board, so the
//! search explores branches without undo logic and concurrent callers
//! never share mutable state.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, Score, BOARD_SIZE};
pub use engine::{CpuPlayer, Difficulty, MoveResult};
pub use error::MoveError;
pub use rules::Outcome;
pub use session::{GameSession, SessionState};
