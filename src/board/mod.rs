//! Board representation for Gobang (five-in-a-row)

pub mod state;


// Re-exports
pub use state::{Board, WIN_RUN};

/// Direction vectors for line checking (4 axes)
/// Each axis only needs to be listed once (scans run both ways from a cell)
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stone colors. `Empty` doubles as the empty-cell sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u16,
    pub col: u16,
}

impl Pos {
    #[inline]
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}
