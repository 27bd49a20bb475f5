//! Game state management for the Othello GUI

use crate::{CpuPlayer, Difficulty, GameSession, MoveResult, Player, Pos};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Minimum wall time before a CPU move is shown. The search itself is
/// usually much faster; the pause is pacing only, the core applies
/// moves instantly.
const CPU_PACING: Duration = Duration::from_millis(600);

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs CPU
    PvC { human_color: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvC {
            human_color: Player::Black,
        }
    }
}

/// CPU computation state
pub enum CpuState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
    /// Result received, waiting out the pacing delay
    Pending {
        result: MoveResult,
        ready_at: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub session: GameSession,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub last_move: Option<Pos>,
    pub last_cpu_result: Option<MoveResult>,
    pub cpu_state: CpuState,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            session: GameSession::new(),
            mode,
            difficulty,
            last_move: None,
            last_cpu_result: None,
            cpu_state: CpuState::Idle,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        self.session = GameSession::new();
        self.last_move = None;
        self.last_cpu_result = None;
        self.cpu_state = CpuState::Idle;
        self.message = None;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match (self.mode, self.session.current_player()) {
            (GameMode::PvC { human_color }, Some(current)) => current == human_color,
            (GameMode::PvP, Some(_)) => true,
            (_, None) => false,
        }
    }

    /// Check if it's the CPU's turn
    pub fn is_cpu_turn(&self) -> bool {
        match (self.mode, self.session.current_player()) {
            (GameMode::PvC { human_color }, Some(current)) => current != human_color,
            _ => false,
        }
    }

    /// Check if the CPU is currently computing or pacing
    pub fn is_cpu_busy(&self) -> bool {
        !matches!(self.cpu_state, CpuState::Idle)
    }

    /// Attempt to place a disc for the human player
    pub fn try_place_disc(&mut self, pos: Pos) -> Result<(), String> {
        if self.session.is_over() {
            return Err("Game is over".to_string());
        }

        if self.is_cpu_busy() {
            return Err("CPU is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !self.session.is_legal(pos) {
            return Err("Invalid move".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Apply a validated move (human or CPU) and surface pass events
    fn execute_move(&mut self, pos: Pos) {
        if self.session.play(pos).is_err() {
            // play() was validated by the caller; reaching here is a bug
            self.message = Some("Move rejected".to_string());
            return;
        }

        self.last_move = Some(pos);
        self.message = self.session.last_pass().map(|player| {
            let name = match player {
                Player::Black => "Black",
                Player::White => "White",
            };
            format!("{name} has no moves - turn passes")
        });
    }

    /// Kick off the CPU search on a worker thread
    pub fn start_cpu_thinking(&mut self) {
        if !self.is_cpu_turn() || self.is_cpu_busy() || self.session.is_over() {
            return;
        }

        let board = *self.session.board();
        let Some(player) = self.session.current_player() else {
            return;
        };
        let difficulty = self.difficulty;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut cpu = CpuPlayer::new();
            let result = cpu.choose_move_with_stats(&board, player, difficulty);
            let _ = tx.send(result);
        });

        self.cpu_state = CpuState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll the worker and apply its move once the pacing delay is up
    pub fn check_cpu_result(&mut self) {
        match std::mem::replace(&mut self.cpu_state, CpuState::Idle) {
            CpuState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => {
                    self.cpu_state = CpuState::Pending {
                        result,
                        ready_at: start_time + CPU_PACING,
                    };
                }
                Err(std::sync::mpsc::TryRecvError::Empty) => {
                    self.cpu_state = CpuState::Thinking { receiver, start_time };
                }
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.message = Some("CPU error".to_string());
                }
            },
            CpuState::Pending { result, ready_at } => {
                if Instant::now() >= ready_at {
                    self.last_cpu_result = Some(result);

                    if let Some(pos) = result.best_move {
                        self.execute_move(pos);
                    } else {
                        // The session auto-passes stalled players, so the
                        // CPU always has a move when asked
                        self.message = Some("CPU could not find a move".to_string());
                    }
                } else {
                    self.cpu_state = CpuState::Pending { result, ready_at };
                }
            }
            CpuState::Idle => {}
        }
    }

    /// Elapsed CPU thinking time, while computing
    pub fn cpu_thinking_elapsed(&self) -> Option<Duration> {
        match &self.cpu_state {
            CpuState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            _ => None,
        }
    }
}
