//! Position evaluation for the CPU decision engine

pub mod heuristic;

pub use heuristic::evaluate;
