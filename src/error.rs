//! Error types for move validation

use crate::board::Pos;
use thiserror::Error;

/// Rejected caller input at the rules boundary.
///
/// These are the only runtime errors the engine produces. The search and
/// the session only ever apply moves drawn from `legal_moves`, so they
/// never construct one; anything else going wrong is a defect, not an
/// error to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Placement on a cell that already holds a disc
    #[error("cell ({}, {}) is already occupied", pos.row, pos.col)]
    Occupied { pos: Pos },

    /// Placement on an empty cell that flips nothing in any direction
    #[error("move at ({}, {}) captures no discs", pos.row, pos.col)]
    NoFlips { pos: Pos },

    /// Coordinates outside the 8x8 board
    #[error("position ({row}, {col}) is outside the board")]
    OutOfRange { row: i32, col: i32 },
}
