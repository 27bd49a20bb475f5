//! Flip rules for Othello
//!
//! A move is legal on an empty cell when, in at least one of the 8
//! directions, the adjacent cell starts a run of opponent discs that is
//! terminated by one of the mover's own discs. All discs in such runs
//! flip to the mover's color. A run that reaches the board edge or an
//! empty cell before a same-color disc flips nothing in that direction.

use crate::board::{Board, Cell, Player, Pos};
use crate::error::MoveError;

/// Direction vectors for flip scanning (all 8 neighbors)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // Up-left
    (-1, 0),  // Up
    (-1, 1),  // Up-right
    (0, -1),  // Left
    (0, 1),   // Right
    (1, -1),  // Down-left
    (1, 0),   // Down
    (1, 1),   // Down-right
];

/// Final game outcome once neither side can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// Scan one direction from `pos` and collect the opponent run that would
/// flip if `player` placed a disc there.
///
/// The run is valid only when it starts on the adjacent cell and ends on
/// one of `player`'s discs. Termination on the edge or on an empty cell
/// yields an empty result for this direction.
fn scan_direction(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> Vec<Pos> {
    let opponent = player.opponent();
    let mut run = Vec::new();

    let mut row = pos.row as i32 + dr;
    let mut col = pos.col as i32 + dc;

    // Adjacent cell must hold an opponent disc
    if !Pos::is_valid(row, col) || board.get(Pos::new(row as u8, col as u8)) != Cell::Taken(opponent)
    {
        return run;
    }

    // Collect the opponent run
    while Pos::is_valid(row, col) {
        let cur = Pos::new(row as u8, col as u8);
        if board.get(cur) != Cell::Taken(opponent) {
            break;
        }
        run.push(cur);
        row += dr;
        col += dc;
    }

    // The run only counts if it ends on the mover's own disc
    if !Pos::is_valid(row, col) || board.get(Pos::new(row as u8, col as u8)) != Cell::Taken(player)
    {
        run.clear();
    }

    run
}

/// Find all positions that would flip if `player` placed a disc at `pos`.
///
/// Returns the union of the valid runs in all 8 directions. An empty
/// result means the move is illegal at `pos` (including when the cell is
/// already occupied).
pub fn flips(board: &Board, pos: Pos, player: Player) -> Vec<Pos> {
    if !board.is_empty(pos) {
        return Vec::new();
    }

    let mut all = Vec::new();
    for &(dr, dc) in &DIRECTIONS {
        all.extend(scan_direction(board, pos, dr, dc, player));
    }
    all
}

/// Check whether `player` may place a disc at `pos`.
#[inline]
pub fn is_legal(board: &Board, pos: Pos, player: Player) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| !scan_direction(board, pos, dr, dc, player).is_empty())
}

/// All legal moves for `player`, enumerated in row-major order.
///
/// Callers must treat the result as a set; the order is not part of
/// the contract.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    Board::positions()
        .filter(|&pos| is_legal(board, pos, player))
        .collect()
}

/// Apply a move and return the resulting board.
///
/// Validates before touching anything: the cell must be empty and the
/// move must flip at least one disc. The input board is never modified.
pub fn apply_move(board: &Board, pos: Pos, player: Player) -> Result<Board, MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied { pos });
    }

    let flipped = flips(board, pos, player);
    if flipped.is_empty() {
        return Err(MoveError::NoFlips { pos });
    }

    let mut next = *board;
    next.set(pos, Cell::Taken(player));
    for flip_pos in flipped {
        next.set(flip_pos, Cell::Taken(player));
    }
    Ok(next)
}

/// The game is over when neither player has a legal move.
pub fn is_terminal(board: &Board) -> bool {
    legal_moves(board, Player::Black).is_empty() && legal_moves(board, Player::White).is_empty()
}

/// Winner by disc count, `None` while the game is still in progress.
pub fn winner(board: &Board) -> Option<Outcome> {
    if !is_terminal(board) {
        return None;
    }

    let score = board.score();
    Some(if score.black > score.white {
        Outcome::Win(Player::Black)
    } else if score.white > score.black {
        Outcome::Win(Player::White)
    } else {
        Outcome::Draw
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: u8, col: u8, player: Player) {
        board.set(Pos::new(row, col), Cell::Taken(player));
    }

    #[test]
    fn test_initial_legal_moves_black() {
        let board = Board::initial();
        let mut moves = legal_moves(&board, Player::Black);
        moves.sort();

        let expected = vec![
            Pos::new(2, 3),
            Pos::new(3, 2),
            Pos::new(4, 5),
            Pos::new(5, 4),
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_initial_legal_moves_white() {
        let board = Board::initial();
        let mut moves = legal_moves(&board, Player::White);
        moves.sort();

        let expected = vec![
            Pos::new(2, 4),
            Pos::new(3, 5),
            Pos::new(4, 2),
            Pos::new(5, 3),
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_first_move_flips_one_disc() {
        let board = Board::initial();
        let next = apply_move(&board, Pos::new(2, 3), Player::Black).unwrap();

        // (3,3) was White, now flipped to Black
        assert_eq!(next.get(Pos::new(3, 3)), Cell::Taken(Player::Black));
        assert_eq!(next.get(Pos::new(2, 3)), Cell::Taken(Player::Black));

        let score = next.score();
        assert_eq!(score.black, 4);
        assert_eq!(score.white, 1);
    }

    #[test]
    fn test_apply_move_adds_exactly_one_disc() {
        let board = Board::initial();
        let before = board.disc_count();

        for pos in legal_moves(&board, Player::Black) {
            let next = apply_move(&board, pos, Player::Black).unwrap();
            // Flips change color, never remove discs
            assert_eq!(next.disc_count(), before + 1);
            // The mover always gains discs
            assert!(next.count(Player::Black) > board.count(Player::Black));
        }
    }

    #[test]
    fn test_apply_move_leaves_input_board_untouched() {
        let board = Board::initial();
        let _ = apply_move(&board, Pos::new(2, 3), Player::Black).unwrap();
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let board = Board::initial();
        let err = apply_move(&board, Pos::new(3, 3), Player::Black).unwrap_err();
        assert_eq!(err, MoveError::Occupied { pos: Pos::new(3, 3) });
    }

    #[test]
    fn test_no_flip_cell_rejected() {
        let board = Board::initial();
        let err = apply_move(&board, Pos::new(0, 0), Player::Black).unwrap_err();
        assert_eq!(err, MoveError::NoFlips { pos: Pos::new(0, 0) });
    }

    #[test]
    fn test_run_ending_on_empty_cell_flips_nothing() {
        let mut board = Board::empty();
        // B at (4,2), W W at (4,4)-(4,5), then empty: placing at (4,3)
        // scans rightward into W W but never reaches a Black terminator.
        place(&mut board, 4, 2, Player::Black);
        place(&mut board, 4, 4, Player::White);
        place(&mut board, 4, 5, Player::White);

        assert!(flips(&board, Pos::new(4, 3), Player::Black).is_empty());
        assert!(!is_legal(&board, Pos::new(4, 3), Player::Black));
    }

    #[test]
    fn test_run_reaching_edge_flips_nothing() {
        let mut board = Board::empty();
        // W W against the left edge; placing at (0,2) scans left off
        // the board without finding a Black disc.
        place(&mut board, 0, 0, Player::White);
        place(&mut board, 0, 1, Player::White);

        assert!(flips(&board, Pos::new(0, 2), Player::Black).is_empty());
    }

    #[test]
    fn test_adjacent_own_disc_flips_nothing() {
        let mut board = Board::empty();
        // Adjacent cell holds our own color, not the opponent's
        place(&mut board, 4, 4, Player::Black);
        place(&mut board, 4, 5, Player::White);
        place(&mut board, 4, 6, Player::Black);

        assert!(flips(&board, Pos::new(4, 3), Player::Black).is_empty());
    }

    #[test]
    fn test_flips_in_multiple_directions() {
        let mut board = Board::empty();
        // Placing Black at (4,4) captures runs left and up:
        //   B W . -> along row 4: (4,2)=B (4,3)=W [4,4]
        //   along col 4: (2,4)=B (3,4)=W [4,4]
        place(&mut board, 4, 2, Player::Black);
        place(&mut board, 4, 3, Player::White);
        place(&mut board, 2, 4, Player::Black);
        place(&mut board, 3, 4, Player::White);

        let mut flipped = flips(&board, Pos::new(4, 4), Player::Black);
        flipped.sort();
        assert_eq!(flipped, vec![Pos::new(3, 4), Pos::new(4, 3)]);
    }

    #[test]
    fn test_long_run_flips_whole_run() {
        let mut board = Board::empty();
        place(&mut board, 0, 0, Player::Black);
        for col in 1..=6 {
            place(&mut board, 0, col, Player::White);
        }

        let flipped = flips(&board, Pos::new(0, 7), Player::Black);
        assert_eq!(flipped.len(), 6);

        let next = apply_move(&board, Pos::new(0, 7), Player::Black).unwrap();
        assert_eq!(next.count(Player::Black), 8);
        assert_eq!(next.count(Player::White), 0);
    }

    #[test]
    fn test_legal_moves_never_include_occupied_cells() {
        let board = Board::initial();
        for player in [Player::Black, Player::White] {
            for pos in legal_moves(&board, player) {
                assert!(board.is_empty(pos));
            }
        }
    }

    #[test]
    fn test_legal_moves_idempotent() {
        let board = Board::initial();
        assert_eq!(
            legal_moves(&board, Player::Black),
            legal_moves(&board, Player::Black)
        );
    }

    #[test]
    fn test_applied_move_not_legal_again() {
        let board = Board::initial();
        let pos = Pos::new(2, 3);
        let next = apply_move(&board, pos, Player::Black).unwrap();
        assert!(!legal_moves(&next, Player::Black).contains(&pos));
        assert!(!legal_moves(&next, Player::White).contains(&pos));
    }

    #[test]
    fn test_initial_board_not_terminal() {
        let board = Board::initial();
        assert!(!is_terminal(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_terminal_and_winner() {
        let mut board = Board::empty();
        // 40 Black, 24 White
        for (idx, pos) in Board::positions().enumerate() {
            let player = if idx < 40 { Player::Black } else { Player::White };
            board.set(pos, Cell::Taken(player));
        }

        assert!(board.is_full());
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), Some(Outcome::Win(Player::Black)));
    }

    #[test]
    fn test_full_board_draw() {
        let mut board = Board::empty();
        for (idx, pos) in Board::positions().enumerate() {
            let player = if idx < 32 { Player::Black } else { Player::White };
            board.set(pos, Cell::Taken(player));
        }

        assert_eq!(board.score().black, 32);
        assert_eq!(board.score().white, 32);
        assert_eq!(winner(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_terminal_before_board_full() {
        // One Black disc alone: nobody can capture anything
        let mut board = Board::empty();
        place(&mut board, 0, 0, Player::Black);

        assert!(is_terminal(&board));
        assert_eq!(winner(&board), Some(Outcome::Win(Player::Black)));
    }

    #[test]
    fn test_score_bounded_by_board() {
        let board = Board::initial();
        let next = apply_move(&board, Pos::new(2, 3), Player::Black).unwrap();
        assert!(next.score().total() <= 64);
    }
}
