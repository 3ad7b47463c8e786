//! Position evaluation: pattern classification table and window heuristic

pub mod heuristic;
pub mod patterns;
pub mod table;

// Re-exports
pub use heuristic::{evaluate, evaluate_for, TERMINAL_SCORE};
pub use patterns::{classify, Pattern, PatternScore, Slot, TABLE_SIZE, WINDOW};
pub use table::{encode, pattern_table, PatternTable};
