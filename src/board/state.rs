//! Board state: grid, move history, turn and winner logic.

use super::{Pos, Stone, DIRECTIONS};
use crate::error::GameError;

/// Run length required to win.
pub const WIN_RUN: usize = 5;

/// Game board with fixed extents and an undoable move history.
///
/// The grid dimensions are set once at construction and never change.
/// The current player is a pure function of move count and the offensive
/// (first-moving) player; the winner is set the moment a move completes a
/// run of [`WIN_RUN`] stones and cleared again when that move is retracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Row-major grid; `Stone::Empty` marks free cells.
    grid: Vec<Stone>,
    /// Player who moves first.
    offensive: Stone,
    winner: Option<Stone>,
    /// Append-only history, undone strictly last-in first-out.
    history: Vec<Pos>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    /// `GameError::Configuration` if either extent is zero or `offensive`
    /// is `Stone::Empty`.
    pub fn new(rows: u16, cols: u16, offensive: Stone) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            return Err(GameError::Configuration {
                reason: "board extents must be non-zero",
            });
        }
        if offensive == Stone::Empty {
            return Err(GameError::Configuration {
                reason: "offensive player must be Black or White",
            });
        }
        Ok(Self {
            rows,
            cols,
            grid: vec![Stone::Empty; usize::from(rows) * usize::from(cols)],
            offensive,
            winner: None,
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Player who moves first in this game.
    #[inline]
    pub fn offensive(&self) -> Stone {
        self.offensive
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    fn index(&self, row: u16, col: u16) -> usize {
        usize::from(row) * usize::from(self.cols) + usize::from(col)
    }

    /// Stone at a position known to be on the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.grid[self.index(pos.row, pos.col)]
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < i32::from(self.rows) && col >= 0 && col < i32::from(self.cols)
    }

    /// Stone at signed coordinates; `None` past the board edge.
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    pub(crate) fn at(&self, row: i32, col: i32) -> Option<Stone> {
        self.in_bounds(row, col)
            .then(|| self.grid[self.index(row as u16, col as u16)])
    }

    /// Player whose turn it is: strict alternation from the offensive player.
    #[inline]
    pub fn current_player(&self) -> Stone {
        let offset = usize::from(self.offensive == Stone::White);
        if (self.history.len() + offset) & 1 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// Place the current player's stone at `(row, col)`.
    ///
    /// Scans outward from the placed stone along all four axes; any run of
    /// [`WIN_RUN`] or more sets the winner. The move is appended to history
    /// regardless of outcome.
    ///
    /// # Errors
    /// `GameError::GameOver` if the game has finished, `GameError::InvalidMove`
    /// if the position is out of range or occupied.
    pub fn play(&mut self, row: u16, col: u16) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        if row >= self.rows || col >= self.cols {
            return Err(GameError::InvalidMove {
                row,
                col,
                reason: "position out of range",
            });
        }
        let idx = self.index(row, col);
        if self.grid[idx] != Stone::Empty {
            return Err(GameError::InvalidMove {
                row,
                col,
                reason: "cell already occupied",
            });
        }

        let mover = self.current_player();
        self.grid[idx] = mover;
        if self.run_through(row, col, mover) >= WIN_RUN {
            self.winner = Some(mover);
        }
        self.history.push(Pos::new(row, col));
        Ok(())
    }

    /// Longest contiguous run of `color` through `(row, col)` over the four axes.
    ///
    /// Signed offsets throughout; scanning stops cleanly at the edge instead
    /// of wrapping an unsigned counter past zero.
    fn run_through(&self, row: u16, col: u16, color: Stone) -> usize {
        let mut best = 0;
        for &(dr, dc) in &DIRECTIONS {
            let mut count = 1;
            let (mut r, mut c) = (i32::from(row) + dr, i32::from(col) + dc);
            while self.at(r, c) == Some(color) {
                count += 1;
                r += dr;
                c += dc;
            }
            let (mut r, mut c) = (i32::from(row) - dr, i32::from(col) - dc);
            while self.at(r, c) == Some(color) {
                count += 1;
                r -= dr;
                c -= dc;
            }
            best = best.max(count);
        }
        best
    }

    /// Undo the last move, restoring the cell and the winner flag.
    ///
    /// `play` is rejected once a winner exists, so a set winner always belongs
    /// to the move being removed here; clearing it restores the pre-win state.
    ///
    /// # Errors
    /// `GameError::EmptyHistory` if no moves have been played.
    pub fn retract(&mut self) -> Result<Pos, GameError> {
        let last = self.history.pop().ok_or(GameError::EmptyHistory)?;
        let idx = self.index(last.row, last.col);
        self.grid[idx] = Stone::Empty;
        self.winner = None;
        Ok(last)
    }

    /// All empty cells in row-major order: the candidate moves for the side
    /// to move.
    ///
    /// Pure and restartable; safe to call repeatedly for sibling search
    /// branches. Yields nothing once the game is finished: a finished game
    /// has no legal moves, which is what lets the generic search treat won
    /// states as terminal without a separate terminal callback.
    pub fn candidates(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = usize::from(self.cols);
        let finished = self.is_finished();
        self.grid.iter().enumerate().filter_map(move |(i, &s)| {
            #[allow(clippy::cast_possible_truncation)]
            (!finished && s == Stone::Empty)
                .then(|| Pos::new((i / cols) as u16, (i % cols) as u16))
        })
    }

    /// A copy of this board with the move played.
    ///
    /// The clone owns its grid, so sibling search branches never observe
    /// each other's mutations. The position must be a legal move (as yielded
    /// by [`Board::candidates`]); anything else is a caller bug and aborts.
    #[must_use]
    pub fn child(&self, pos: Pos) -> Board {
        let mut next = self.clone();
        next.play(pos.row, pos.col)
            .expect("candidate move must be legal");
        next
    }
}
