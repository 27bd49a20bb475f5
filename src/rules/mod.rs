//! Game rules for Othello
//!
//! This module implements the rule set for Othello:
//! - Flip computation (directional capture runs)
//! - Legal-move enumeration
//! - Move application
//! - Terminal detection and winner

pub mod flip;

// Re-exports for convenient access
pub use flip::{apply_move, flips, is_legal, is_terminal, legal_moves, winner, Outcome};
