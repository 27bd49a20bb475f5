//! Depth-limited minimax with alpha-beta pruning
//!
//! The search maximizes the static evaluation for the player who owns
//! the root, even at nodes where the opponent is to move: leaves always
//! score the position from the root player's perspective. When the side
//! to move has no legal move, the turn is skipped — depth still counts
//! down and the max/min flag inverts with the player, so a stalled
//! player costs a ply but never ends the search early.

use crate::board::{Board, Player, Pos};
use crate::eval::evaluate;
use crate::rules::{apply_move, legal_moves};

/// Infinity bound for alpha-beta. The evaluation is bounded well below
/// this: 64 material + 100 corners + 140 edges + mobility.
const INF: i32 = 1 << 20;

/// Result of a fixed-depth search from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move found, `None` when the root player must pass
    pub best_move: Option<Pos>,
    /// Subtree value of the best move
    pub score: i32,
    /// Nodes visited, for diagnostics
    pub nodes: u64,
}

/// Pick the best move for `player` by searching `depth` plies.
///
/// Every root move is searched with a fresh full window; the move with
/// the strictly greatest subtree value wins, and ties keep the move
/// found first in enumeration order. Returns `best_move: None` iff the
/// player has no legal move.
pub fn best_move(board: &Board, player: Player, depth: u8) -> SearchOutcome {
    debug_assert!(depth > 0);

    let moves = legal_moves(board, player);
    let mut nodes = 0;

    let Some(&first) = moves.first() else {
        return SearchOutcome {
            best_move: None,
            score: 0,
            nodes,
        };
    };

    let mut best = first;
    let mut best_value = -INF;

    for pos in moves {
        // Root moves come from legal_moves, so apply_move cannot fail
        let next = apply_move(board, pos, player).expect("legal root move");
        let value = minimax(&next, depth - 1, -INF, INF, false, player, &mut nodes);
        if value > best_value {
            best_value = value;
            best = pos;
        }
    }

    SearchOutcome {
        best_move: Some(best),
        score: best_value,
        nodes,
    }
}

/// Recursive alpha-beta minimax.
///
/// `maximizing` tells whether `root` (true) or its opponent (false) is
/// to move; the roles never swap between the players. A node whose
/// player has no legal move recurses once with the flag inverted,
/// modeling the pass rule.
fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    root: Player,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(board, root);
    }

    let current = if maximizing { root } else { root.opponent() };
    let moves = legal_moves(board, current);

    if moves.is_empty() {
        // Pass: the opponent moves next, one ply deeper
        return minimax(board, depth - 1, alpha, beta, !maximizing, root, nodes);
    }

    if maximizing {
        let mut max_value = -INF;
        for pos in moves {
            let next = apply_move(board, pos, current).expect("legal search move");
            let value = minimax(&next, depth - 1, alpha, beta, false, root, nodes);
            max_value = max_value.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        max_value
    } else {
        let mut min_value = INF;
        for pos in moves {
            let next = apply_move(board, pos, current).expect("legal search move");
            let value = minimax(&next, depth - 1, alpha, beta, true, root, nodes);
            min_value = min_value.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        min_value
    }
}
