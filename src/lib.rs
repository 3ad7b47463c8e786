//! Gobang (five-in-a-row) game engine with a generic adversarial search core
//!
//! The crate splits into a concrete game model and a reusable search engine:
//! - A board of configurable extents with strict turn alternation, win
//!   detection on every move, and last-in-first-out retraction
//! - A pattern evaluator driven by a precomputed classification table over
//!   all 4096 configurations of a six-cell window
//! - A minimax/alpha-beta search that is fully generic over state, move and
//!   value types, driven by plain functions, with iterative deepening and
//!   root-split parallelism on top
//!
//! # Architecture
//!
//! - [`board`]: grid, history, turn and winner logic
//! - [`eval`]: pattern classification table and the window heuristic
//! - [`search`]: generic alpha-beta engine and the introspection tree
//! - [`engine`]: the concrete wiring of board + evaluator + search
//! - [`error`]: the crate-wide error type
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Board, Engine, Stone};
//!
//! let mut board = Board::new(15, 15, Stone::Black).unwrap();
//! board.play(7, 7).unwrap();
//!
//! // Shallow search for a fast doc test
//! let engine = Engine::with_depth(1);
//! let result = engine.best_move(&board);
//! if let Some(pos) = result.best_move {
//!     board.play(pos.row, pos.col).unwrap();
//! }
//! assert_eq!(board.move_count(), 2);
//! ```
//!
//! The search core carries no board-specific knowledge; any game expressible
//! as `{State, Move, Value}` plus transform/apply/evaluate functions can use
//! it directly, see [`search::Search`].

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, WIN_RUN};
pub use engine::{Engine, MoveResult};
pub use error::GameError;
pub use search::{Search, SearchResult, SearchStats, Value};
