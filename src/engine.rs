//! Engine glue: the generic search instantiated for [`Board`].
//!
//! Builds the transform/apply/evaluate closures over the concrete board type,
//! runs the search, and packages the outcome as a [`MoveResult`]. Everything
//! here is expressible through the generic [`Search`] API directly; the
//! engine is the convenient front door for drivers and tests.
//!
//! # Example
//!
//! ```
//! use gobang::{Board, Engine, Stone};
//!
//! let mut board = Board::new(5, 5, Stone::Black).unwrap();
//! board.play(2, 2).unwrap();
//!
//! let engine = Engine::with_depth(2);
//! let result = engine.best_move(&board);
//! assert!(result.best_move.is_some());
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Pos};
use crate::eval::evaluate;
use crate::search::Search;

/// Default fixed search depth in plies.
pub const DEFAULT_DEPTH: u32 = 4;

/// Outcome of a move search.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found; `None` when the position has no legal moves.
    pub best_move: Option<Pos>,
    /// Backed-up value from the perspective of the player to move.
    pub value: i32,
    /// Principal variation, starting with `best_move`.
    pub path: Vec<Pos>,
    /// Depth the returned result was computed at.
    pub depth: u32,
    /// Number of nodes searched.
    pub nodes: u64,
    /// Time taken in milliseconds.
    pub time_ms: u64,
}

/// Move chooser wiring [`Board`] and the pattern evaluator into the search.
#[derive(Debug, Clone)]
pub struct Engine {
    depth: u32,
    budget: Option<Duration>,
    workers: usize,
}

impl Engine {
    /// Engine with the default fixed depth.
    #[must_use]
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            budget: None,
            workers: 1,
        }
    }

    /// Engine searching to a fixed depth.
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            budget: None,
            workers: 1,
        }
    }

    /// Switch to iterative deepening: search up to `max_depth` plies but stop
    /// once the wall-clock budget is spent, keeping the deepest completed
    /// result.
    #[must_use]
    pub fn with_budget(max_depth: u32, budget: Duration) -> Self {
        Self {
            depth: max_depth,
            budget: Some(budget),
            workers: 1,
        }
    }

    /// Split the root moves across this many threads. Ignored when a time
    /// budget is set; the deepening loop stays sequential.
    #[must_use]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Maximum search depth in plies.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Find the best move for the player to move on `board`.
    ///
    /// A finished board (or one with no empty cells) yields no move; the
    /// returned value is then the board's static evaluation.
    #[must_use]
    pub fn best_move(&self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let transform = |b: &Board| b.candidates().collect::<Vec<_>>();
        let apply = |b: &Board, pos: &Pos| b.child(*pos);
        let score = |b: &Board| evaluate(b);

        let mut search = Search::new(board.clone());
        let result = match self.budget {
            Some(budget) => search.run_iterative(transform, apply, score, self.depth, budget),
            None if self.workers > 1 => {
                search.run_parallel(transform, apply, score, self.depth, self.workers)
            }
            None => search.run(transform, apply, score, self.depth),
        };
        let nodes = search.stats().nodes;

        debug!(
            best = ?result.path.first(),
            value = result.value,
            depth = result.depth,
            nodes,
            "move search finished"
        );

        MoveResult {
            best_move: result.path.first().copied(),
            value: result.value,
            path: result.path,
            depth: result.depth,
            nodes,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
