//! Board representation for Othello

pub mod board;


// Re-exports
pub use board::{Board, Score};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Disc colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for untrusted coordinates (UI input).
    pub fn try_new(row: i32, col: i32) -> Result<Self, crate::error::MoveError> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(crate::error::MoveError::OutOfRange { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// True for the 28 cells on the outer ring of the board.
    #[inline]
    pub fn is_edge(self) -> bool {
        self.row == 0
            || self.row == BOARD_SIZE as u8 - 1
            || self.col == 0
            || self.col == BOARD_SIZE as u8 - 1
    }

    /// True for the 4 corner cells.
    #[inline]
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == BOARD_SIZE as u8 - 1)
            && (self.col == 0 || self.col == BOARD_SIZE as u8 - 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
