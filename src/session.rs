//! Turn and session sequencing
//!
//! A thin state machine over the rules engine. A session is either in
//! progress with a current player or over with a final outcome. After
//! every applied move the session re-enters the turn loop: a player
//! with no legal move passes automatically, and when neither side can
//! move the game ends. The cached legal-move list is always the rules
//! engine's answer for the current board and player, never maintained
//! incrementally.

use crate::board::{Board, Player, Pos};
use crate::error::MoveError;
use crate::rules::{self, Outcome};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress { current: Player },
    GameOver { outcome: Outcome },
}

/// A running game: board, whose turn it is, and the cached legal moves
/// for that player.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    state: SessionState,
    legal_moves: Vec<Pos>,
    /// Set when the previous transition skipped a stalled player
    last_pass: Option<Player>,
}

impl GameSession {
    /// New game: standard starting position, Black to move.
    pub fn new() -> Self {
        let board = Board::initial();
        let mut session = Self {
            board,
            state: SessionState::InProgress {
                current: Player::Black,
            },
            legal_moves: Vec::new(),
            last_pass: None,
        };
        session.enter_turn(Player::Black);
        session
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Player to move, `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            SessionState::InProgress { current } => Some(current),
            SessionState::GameOver { .. } => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, SessionState::GameOver { .. })
    }

    /// Final outcome, `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::GameOver { outcome } => Some(outcome),
            SessionState::InProgress { .. } => None,
        }
    }

    /// Legal moves for the current player (empty once the game is over).
    #[inline]
    pub fn legal_moves(&self) -> &[Pos] {
        &self.legal_moves
    }

    pub fn is_legal(&self, pos: Pos) -> bool {
        self.legal_moves.contains(&pos)
    }

    /// The player whose turn was skipped by the previous transition,
    /// if any. Cleared by the next successful move.
    pub fn last_pass(&self) -> Option<Player> {
        self.last_pass
    }

    /// Play a move for the current player.
    ///
    /// Rejects input that is not in the legal-move list; on success the
    /// board advances and the turn passes to the opponent, skipping
    /// stalled players and detecting the end of the game.
    pub fn play(&mut self, pos: Pos) -> Result<(), MoveError> {
        let SessionState::InProgress { current } = self.state else {
            // After game over every cell is "no capture"
            return Err(MoveError::NoFlips { pos });
        };

        if !self.is_legal(pos) {
            return Err(if self.board.is_empty(pos) {
                MoveError::NoFlips { pos }
            } else {
                MoveError::Occupied { pos }
            });
        }

        self.board = rules::apply_move(&self.board, pos, current)?;
        self.last_pass = None;
        self.enter_turn(current.opponent());
        Ok(())
    }

    /// Enter `player`'s turn, resolving passes and game over.
    ///
    /// If `player` has a legal move the session awaits it. Otherwise
    /// the turn passes to the opponent; if the opponent is also stuck
    /// the game is over. The pass itself is instantaneous — any delay
    /// shown to the user is the UI's concern.
    fn enter_turn(&mut self, player: Player) {
        let moves = rules::legal_moves(&self.board, player);
        if !moves.is_empty() {
            self.state = SessionState::InProgress { current: player };
            self.legal_moves = moves;
            return;
        }

        let opponent = player.opponent();
        let opponent_moves = rules::legal_moves(&self.board, opponent);
        if opponent_moves.is_empty() {
            let outcome = rules::winner(&self.board).expect("no moves for either player");
            self.state = SessionState::GameOver { outcome };
            self.legal_moves = Vec::new();
        } else {
            self.last_pass = Some(player);
            self.state = SessionState::InProgress { current: opponent };
            self.legal_moves = opponent_moves;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_new_session_black_to_move() {
        let session = GameSession::new();
        assert_eq!(
            session.state(),
            SessionState::InProgress {
                current: Player::Black
            }
        );
        assert_eq!(session.current_player(), Some(Player::Black));
        assert!(!session.is_over());
        assert_eq!(session.legal_moves().len(), 4);
        assert_eq!(session.last_pass(), None);
    }

    #[test]
    fn test_play_switches_turn() {
        let mut session = GameSession::new();
        session.play(Pos::new(2, 3)).unwrap();

        assert_eq!(session.current_player(), Some(Player::White));
        assert_eq!(session.board().score().black, 4);
        assert_eq!(session.board().score().white, 1);
    }

    #[test]
    fn test_cached_moves_match_rules_engine() {
        let mut session = GameSession::new();
        session.play(Pos::new(2, 3)).unwrap();

        assert_eq!(
            session.legal_moves().to_vec(),
            rules::legal_moves(session.board(), Player::White)
        );
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let mut session = GameSession::new();

        // Occupied center cell
        assert_eq!(
            session.play(Pos::new(3, 3)),
            Err(MoveError::Occupied { pos: Pos::new(3, 3) })
        );
        // Empty cell that captures nothing
        assert_eq!(
            session.play(Pos::new(0, 0)),
            Err(MoveError::NoFlips { pos: Pos::new(0, 0) })
        );
        // Board and turn unchanged
        assert_eq!(session.current_player(), Some(Player::Black));
        assert_eq!(session.board(), &Board::initial());
    }

    /// Drive a full game with both players taking their first legal
    /// move; it must terminate with a consistent outcome.
    #[test]
    fn test_full_game_terminates() {
        let mut session = GameSession::new();
        let mut plies = 0;

        while let Some(_player) = session.current_player() {
            let pos = session.legal_moves()[0];
            session.play(pos).unwrap();
            plies += 1;
            assert!(plies <= 64, "game did not terminate");
        }

        assert!(session.is_over());
        let outcome = session.outcome().unwrap();
        let score = session.board().score();
        match outcome {
            Outcome::Win(Player::Black) => assert!(score.black > score.white),
            Outcome::Win(Player::White) => assert!(score.white > score.black),
            Outcome::Draw => assert_eq!(score.black, score.white),
        }
    }

    #[test]
    fn test_automatic_pass() {
        // Hand-build a mid-game where White is stalled: after Black
        // plays (0,3), White has no reply and the turn returns to
        // Black, who can still capture at (0,7).
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Taken(Player::Black));
        board.set(Pos::new(0, 1), Cell::Taken(Player::White));
        board.set(Pos::new(0, 2), Cell::Taken(Player::White));
        board.set(Pos::new(0, 4), Cell::Taken(Player::Black));
        board.set(Pos::new(0, 5), Cell::Taken(Player::White));
        board.set(Pos::new(0, 6), Cell::Taken(Player::White));

        let mut session = GameSession::new();
        session.board = board;
        session.enter_turn(Player::Black);
        assert_eq!(session.current_player(), Some(Player::Black));

        session.play(Pos::new(0, 3)).unwrap();

        // White had nothing: back to Black with the pass recorded
        assert_eq!(session.current_player(), Some(Player::Black));
        assert_eq!(session.last_pass(), Some(Player::White));
        assert!(session.is_legal(Pos::new(0, 7)));
    }

    #[test]
    fn test_double_stall_ends_game() {
        // After Black's only move the board holds only Black discs:
        // neither player can capture, so the game ends immediately.
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Taken(Player::Black));
        board.set(Pos::new(0, 1), Cell::Taken(Player::White));

        let mut session = GameSession::new();
        session.board = board;
        session.enter_turn(Player::Black);

        session.play(Pos::new(0, 2)).unwrap();

        assert!(session.is_over());
        assert_eq!(session.outcome(), Some(Outcome::Win(Player::Black)));
        assert!(session.legal_moves().is_empty());
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Taken(Player::Black));
        board.set(Pos::new(0, 1), Cell::Taken(Player::White));

        let mut session = GameSession::new();
        session.board = board;
        session.enter_turn(Player::Black);
        session.play(Pos::new(0, 2)).unwrap();
        assert!(session.is_over());

        assert!(session.play(Pos::new(5, 5)).is_err());
    }
}
