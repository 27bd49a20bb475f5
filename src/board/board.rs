//! Board value type with the fixed Othello starting position

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Disc counts for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Total discs on the board
    #[inline]
    pub fn total(self) -> u32 {
        self.black + self.white
    }
}

/// Game board as a plain value type.
///
/// The board is `Copy`: placing a disc produces a new board value and
/// never mutates a shared one. This lets the search branch freely
/// without undo logic or aliasing between branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Empty board, no discs placed. Used for test setups;
    /// games start from `initial`.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Standard starting position: White on (3,3) and (4,4),
    /// Black on (3,4) and (4,3).
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.set(Pos::new(3, 3), Cell::Taken(Player::White));
        board.set(Pos::new(3, 4), Cell::Taken(Player::Black));
        board.set(Pos::new(4, 3), Cell::Taken(Player::Black));
        board.set(Pos::new(4, 4), Cell::Taken(Player::White));
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell state at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Overwrite a cell. Game moves go through `rules::apply_move`,
    /// which enforces the flip rule; this is the raw setter used by
    /// the rules engine and by test setups.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// A copy of this board with one cell replaced.
    #[inline]
    pub fn with(&self, pos: Pos, cell: Cell) -> Self {
        let mut next = *self;
        next.set(pos, cell);
        next
    }

    /// Count discs per color. Recomputed on demand, never cached.
    pub fn score(&self) -> Score {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Cell::Taken(Player::Black) => black += 1,
                Cell::Taken(Player::White) => white += 1,
                Cell::Empty => {}
            }
        }
        Score { black, white }
    }

    /// Number of discs of one color
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.score().black,
            Player::White => self.score().white,
        }
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.score().total()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterate all positions in row-major order
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
