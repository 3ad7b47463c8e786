//! Adversarial search: generic alpha-beta engine, root-split parallelism,
//! and the arena tree recording explored lines

pub mod alphabeta;
mod parallel;
pub mod tree;

// Re-exports
pub use alphabeta::{Search, SearchResult, SearchStats, Value};
pub use tree::{Node, NodeId, SearchTree};
