//! Heuristic evaluation function for Othello board positions
//!
//! This module provides the static evaluation for the minimax search.
//! It scores positions from one player's perspective based on:
//! - Material (disc difference)
//! - Corner control
//! - Edge control
//! - Mobility (legal-move difference)

use crate::board::{Board, Cell, Player, Pos, BOARD_SIZE};
use crate::rules::legal_moves;

/// Bonus per corner cell held (and penalty per corner lost)
const CORNER_WEIGHT: i32 = 25;

/// Bonus per edge cell held (and penalty per edge cell lost)
const EDGE_WEIGHT: i32 = 5;

/// Multiplier on the legal-move count difference
const MOBILITY_WEIGHT: i32 = 2;

/// The four corner cells
const CORNERS: [(u8, u8); 4] = [
    (0, 0),
    (0, BOARD_SIZE as u8 - 1),
    (BOARD_SIZE as u8 - 1, 0),
    (BOARD_SIZE as u8 - 1, BOARD_SIZE as u8 - 1),
];

/// Evaluate the board from the perspective of the given player.
///
/// Returns a score where positive values favor `player` and negative
/// values favor the opponent. The weights are fixed: corner control
/// dominates, edges matter a little, and mobility is worth two points
/// per extra legal move. Play strength comes from this function, not
/// from search depth.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let opponent = player.opponent();
    let own = Cell::Taken(player);
    let opp = Cell::Taken(opponent);

    // Material: raw disc difference
    let score = board.score();
    let (own_discs, opp_discs) = match player {
        Player::Black => (score.black as i32, score.white as i32),
        Player::White => (score.white as i32, score.black as i32),
    };
    let material = own_discs - opp_discs;

    // Corner control
    let mut corner_bonus = 0;
    for &(row, col) in &CORNERS {
        let cell = board.get(Pos::new(row, col));
        if cell == own {
            corner_bonus += CORNER_WEIGHT;
        } else if cell == opp {
            corner_bonus -= CORNER_WEIGHT;
        }
    }

    // Edge control: each of the 28 border cells counted once
    let mut edge_bonus = 0;
    for pos in Board::positions().filter(|p| p.is_edge()) {
        let cell = board.get(pos);
        if cell == own {
            edge_bonus += EDGE_WEIGHT;
        } else if cell == opp {
            edge_bonus -= EDGE_WEIGHT;
        }
    }

    // Mobility on the given board (no lookahead here)
    let own_moves = legal_moves(board, player).len() as i32;
    let opp_moves = legal_moves(board, opponent).len() as i32;
    let mobility_bonus = (own_moves - opp_moves) * MOBILITY_WEIGHT;

    material + corner_bonus + edge_bonus + mobility_bonus
}
