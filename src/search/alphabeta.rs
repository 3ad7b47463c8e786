//! Generic depth-limited minimax with alpha-beta pruning.
//!
//! The engine is parameterized over a state type, a move type, and a value
//! type, and is driven by three functions: a transform (state to candidate
//! moves), an apply (state plus move to successor state), and an evaluator.
//! It uses the negamax formulation: the evaluator reports the value from the
//! perspective of the player to move, so swapping perspective between plies
//! is a pure negation and alternation follows whichever player is current in
//! the successor state.
//!
//! # Example
//!
//! ```
//! use gobang::search::Search;
//!
//! // Toy game: take 1 or 2 tokens, whoever takes the last token wins.
//! let transform = |&pile: &u32| (1..=2).filter(move |&t| t <= pile).collect::<Vec<_>>();
//! let apply = |&pile: &u32, &take: &u32| pile - take;
//! // Mover-relative: a player facing an empty pile has already lost.
//! let evaluate = |&pile: &u32| if pile == 0 { -100i32 } else { 0 };
//!
//! let mut search = Search::new(4u32);
//! let result = search.run(transform, apply, evaluate, 4);
//! assert_eq!(result.value, 100);
//! assert_eq!(result.path.first(), Some(&1));
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Neg;
use std::time::{Duration, Instant};

use tracing::debug;

use super::tree::{NodeId, SearchTree};

/// Numeric contract for search values: totally ordered and negatable, with
/// symmetric saturating bounds usable as the infinities of an alpha-beta
/// window. `MIN` must equal `-MAX` so that negating a bound stays in range.
pub trait Value: Copy + Ord + Neg<Output = Self> + Debug {
    const MIN: Self;
    const MAX: Self;
}

impl Value for i32 {
    const MIN: Self = -i32::MAX;
    const MAX: Self = i32::MAX;
}

impl Value for i64 {
    const MIN: Self = -i64::MAX;
    const MAX: Self = i64::MAX;
}

/// Search diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// States visited.
    pub nodes: u64,
    /// Total beta cutoffs (fail-high).
    pub beta_cutoffs: u64,
    /// Beta cutoffs on the first move tried (measures move ordering quality).
    pub first_move_cutoffs: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent.
    #[must_use]
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
            }
        }
    }

    pub(crate) fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.beta_cutoffs += other.beta_cutoffs;
        self.first_move_cutoffs += other.first_move_cutoffs;
    }
}

/// Outcome of a search: the principal variation and its value.
#[derive(Debug, Clone)]
pub struct SearchResult<M, V> {
    /// Best move sequence from the source to the chosen leaf; empty when the
    /// depth is zero or the source is terminal.
    pub path: Vec<M>,
    /// Backed-up value of the path, from the source's side to move.
    pub value: V,
    /// Depth this result was computed at.
    pub depth: u32,
    /// Root node in the search tree.
    pub source: NodeId,
    /// Leaf node of the principal variation; `None` when the path is empty.
    pub destination: Option<NodeId>,
}

/// Generic adversarial search over `{State, Move, Value}`.
pub struct Search<S, M, V> {
    pub(crate) source: S,
    pub(crate) tree: SearchTree<S, V>,
    pub(crate) stats: SearchStats,
    stopped: bool,
    deadline: Option<Instant>,
    _marker: PhantomData<fn() -> M>,
}

impl<S, M, V> Search<S, M, V>
where
    S: Clone,
    M: Clone,
    V: Value,
{
    /// Search starting from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            tree: SearchTree::new(),
            stats: SearchStats::default(),
            stopped: false,
            deadline: None,
            _marker: PhantomData,
        }
    }

    /// Starting point of the search.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Nodes recorded along the principal variation of the last run.
    #[inline]
    pub fn tree(&self) -> &SearchTree<S, V> {
        &self.tree
    }

    /// Diagnostics of the last run.
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Depth-limited alpha-beta search.
    ///
    /// A depth of zero returns an empty path and the source's static
    /// evaluation. When `transform` yields no moves the state is treated as
    /// terminal and evaluated directly. Candidate moves are ordered by a
    /// one-ply static evaluation of their successors before descending;
    /// on equal values the first move in `transform`'s iteration order wins,
    /// so results are deterministic.
    pub fn run<T, I, A, E>(&mut self, transform: T, apply: A, evaluate: E, depth: u32) -> SearchResult<M, V>
    where
        T: Fn(&S) -> I,
        I: IntoIterator<Item = M>,
        A: Fn(&S, &M) -> S,
        E: Fn(&S) -> V,
    {
        self.deadline = None;
        self.stats = SearchStats::default();
        self.run_at(&transform, &apply, &evaluate, depth)
    }

    /// Iterative deepening against a wall-clock budget.
    ///
    /// Runs the search at increasing depths up to `max_depth`, keeps the
    /// deepest fully-completed result, and stops cleanly once the budget is
    /// spent: the iteration in flight is discarded, never returned half-done.
    pub fn run_iterative<T, I, A, E>(
        &mut self,
        transform: T,
        apply: A,
        evaluate: E,
        max_depth: u32,
        budget: Duration,
    ) -> SearchResult<M, V>
    where
        T: Fn(&S) -> I,
        I: IntoIterator<Item = M>,
        A: Fn(&S, &M) -> S,
        E: Fn(&S) -> V,
    {
        let start = Instant::now();
        self.stats = SearchStats::default();
        self.deadline = Some(start + budget);

        let mut best = self.run_at(&transform, &apply, &evaluate, 0);
        for depth in 1..=max_depth {
            if Instant::now() >= start + budget {
                debug!(depth, "budget spent before starting depth");
                break;
            }
            let result = self.run_at(&transform, &apply, &evaluate, depth);
            if self.stopped {
                debug!(depth, "budget spent, discarding partial depth");
                break;
            }
            debug!(
                depth,
                value = ?result.value,
                nodes = self.stats.nodes,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "completed depth"
            );
            best = result;
        }
        self.deadline = None;

        // The tree may still describe a discarded iteration; re-record the
        // best completed path so introspection matches the returned result.
        let source = self.source.clone();
        self.record_pv(&source, best.path, best.value, best.depth, &apply, &evaluate)
    }

    /// One fixed-depth run with the currently configured deadline.
    fn run_at<T, I, A, E>(
        &mut self,
        transform: &T,
        apply: &A,
        evaluate: &E,
        depth: u32,
    ) -> SearchResult<M, V>
    where
        T: Fn(&S) -> I,
        I: IntoIterator<Item = M>,
        A: Fn(&S, &M) -> S,
        E: Fn(&S) -> V,
    {
        self.stopped = false;
        let source = self.source.clone();
        let (value, path) = self.negamax(&source, depth, V::MIN, V::MAX, transform, apply, evaluate);
        self.record_pv(&source, path, value, depth, apply, evaluate)
    }

    /// Recursive negamax with alpha-beta pruning. Returns the backed-up
    /// value and the principal variation below `state`.
    fn negamax<T, I, A, E>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: V,
        beta: V,
        transform: &T,
        apply: &A,
        evaluate: &E,
    ) -> (V, Vec<M>)
    where
        T: Fn(&S) -> I,
        I: IntoIterator<Item = M>,
        A: Fn(&S, &M) -> S,
        E: Fn(&S) -> V,
    {
        self.stats.nodes += 1;
        if self.stats.nodes & 1023 == 0 {
            self.check_deadline();
        }

        if depth == 0 || self.stopped {
            return (evaluate(state), Vec::new());
        }

        // Apply each candidate once; the successor is reused for both the
        // one-ply ordering score and the recursion below it.
        let mut successors: Vec<(M, S, V)> = transform(state)
            .into_iter()
            .map(|mov| {
                let next = apply(state, &mov);
                let score = evaluate(&next);
                (mov, next, score)
            })
            .collect();

        if successors.is_empty() {
            // No moves before the depth limit: the state is terminal.
            return (evaluate(state), Vec::new());
        }

        // Successor evaluations are from the opponent's perspective, so
        // ascending order puts the mover's strongest replies first. The sort
        // is stable: transform's order breaks ties deterministically.
        successors.sort_by(|a, b| a.2.cmp(&b.2));

        let mut best = V::MIN;
        let mut best_path = Vec::new();
        for (i, (mov, next, _)) in successors.iter().enumerate() {
            let (value, rest) =
                self.negamax(next, depth - 1, -beta, -alpha, transform, apply, evaluate);
            let value = -value;
            if self.stopped {
                break;
            }

            if i == 0 || value > best {
                best = value;
                let mut path = Vec::with_capacity(rest.len() + 1);
                path.push(mov.clone());
                path.extend(rest);
                best_path = path;
            }
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }
        (best, best_path)
    }

    /// Rebuild the introspection tree along the principal variation and
    /// package the result. Node costs are static evaluations; node scores
    /// are the backed-up value seen from each node's side to move.
    pub(crate) fn record_pv<A, E>(
        &mut self,
        source: &S,
        path: Vec<M>,
        value: V,
        depth: u32,
        apply: &A,
        evaluate: &E,
    ) -> SearchResult<M, V>
    where
        A: Fn(&S, &M) -> S,
        E: Fn(&S) -> V,
    {
        self.tree = SearchTree::new();
        let root = self.tree.insert_root(source.clone(), evaluate(source), value);
        let mut id = root;
        let mut state = source.clone();
        let mut score = value;
        for mov in &path {
            state = apply(&state, mov);
            score = -score;
            id = self
                .tree
                .insert_child(id, state.clone(), evaluate(&state), score);
        }
        SearchResult {
            path,
            value,
            depth,
            source: root,
            destination: (id != root).then_some(id),
        }
    }

    #[inline]
    fn check_deadline(&mut self) {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stopped = true;
            }
        }
    }
}
