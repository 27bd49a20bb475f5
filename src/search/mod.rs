//! Search algorithms for the CPU decision engine

pub mod minimax;

pub use minimax::{best_move, SearchOutcome};
