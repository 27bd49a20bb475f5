//! GUI module for Othello

pub mod app;
pub mod board_view;
pub mod game_state;
pub mod theme;

pub use app::OthelloApp;
pub use game_state::{GameMode, GameState};
