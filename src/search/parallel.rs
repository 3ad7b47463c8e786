//! Root-split parallel search.
//!
//! The root's candidate moves are divided into contiguous chunks, one scoped
//! thread per chunk. Each worker searches its children at `depth - 1` with an
//! independent alpha-beta window (shared-nothing, no locked bounds), and the
//! chunk winners are merged by comparison on the main thread. Ties resolve to
//! the earliest candidate in the transform's iteration order, keeping results
//! deterministic regardless of thread scheduling.

use std::thread;

use tracing::debug;

use super::alphabeta::{Search, SearchResult, SearchStats, Value};

impl<S, M, V> Search<S, M, V>
where
    S: Clone + Send + Sync,
    // Workers borrow their chunk of the root move list across threads.
    M: Clone + Send + Sync,
    V: Value + Send,
{
    /// Fixed-depth search with the root moves split across `workers` threads.
    ///
    /// Returns the same value as [`Search::run`] at the same depth; only the
    /// work distribution differs. Falls back to the sequential search when
    /// `workers <= 1` or the depth is zero.
    pub fn run_parallel<T, I, A, E>(
        &mut self,
        transform: T,
        apply: A,
        evaluate: E,
        depth: u32,
        workers: usize,
    ) -> SearchResult<M, V>
    where
        T: Fn(&S) -> I + Sync,
        I: IntoIterator<Item = M>,
        A: Fn(&S, &M) -> S + Sync,
        E: Fn(&S) -> V + Sync,
    {
        if workers <= 1 || depth == 0 {
            return self.run(transform, apply, evaluate, depth);
        }

        let source = self.source.clone();
        let moves: Vec<M> = transform(&source).into_iter().collect();
        self.stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        if moves.is_empty() {
            let value = evaluate(&source);
            return self.record_pv(&source, Vec::new(), value, depth, &apply, &evaluate);
        }

        let chunk_size = moves.len().div_ceil(workers);
        debug!(
            candidates = moves.len(),
            workers,
            chunk_size,
            "splitting root moves across threads"
        );

        // One winner per chunk: (value, move index, reply path, stats).
        let winners: Vec<(V, usize, Vec<M>, SearchStats)> = thread::scope(|scope| {
            let handles: Vec<_> = moves
                .chunks(chunk_size)
                .enumerate()
                .map(|(chunk, slice)| {
                    let source = &source;
                    let transform = &transform;
                    let apply = &apply;
                    let evaluate = &evaluate;
                    scope.spawn(move || {
                        let mut stats = SearchStats::default();
                        let mut best: Option<(V, usize, Vec<M>)> = None;
                        for (offset, mov) in slice.iter().enumerate() {
                            let child = apply(source, mov);
                            let mut sub: Search<S, M, V> = Search::new(child);
                            let reply = sub.run(transform, apply, evaluate, depth - 1);
                            stats.merge(sub.stats());

                            let value = -reply.value;
                            let better = best.as_ref().map_or(true, |(b, _, _)| value > *b);
                            if better {
                                best = Some((value, chunk * chunk_size + offset, reply.path));
                            }
                        }
                        // Chunks are non-empty by construction.
                        let (value, index, path) = best.expect("chunk yielded no result");
                        (value, index, path, stats)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("search worker panicked"))
                .collect()
        });

        let mut best: Option<(V, usize, Vec<M>)> = None;
        for (value, index, path, stats) in winners {
            self.stats.merge(&stats);
            let better = best
                .as_ref()
                .map_or(true, |(b, i, _)| value > *b || (value == *b && index < *i));
            if better {
                best = Some((value, index, path));
            }
        }
        let (value, index, reply) = best.expect("at least one chunk must report");

        let mut path = Vec::with_capacity(reply.len() + 1);
        path.push(moves[index].clone());
        path.extend(reply);
        self.record_pv(&source, path, value, depth, &apply, &evaluate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Same toy game as the sequential tests: take 1 or 2 tokens, taking the
    // last one wins.
    fn transform(&pile: &u32) -> Vec<u32> {
        (1..=2).filter(|&t| t <= pile).collect()
    }

    fn apply(&pile: &u32, &take: &u32) -> u32 {
        pile - take
    }

    fn evaluate(&pile: &u32) -> i32 {
        if pile == 0 {
            -100
        } else {
            0
        }
    }

    #[test]
    fn test_parallel_matches_sequential_value() {
        for pile in 1..=10u32 {
            let mut sequential = Search::new(pile);
            let expected = sequential.run(transform, apply, evaluate, 6);

            let mut parallel = Search::new(pile);
            let result = parallel.run_parallel(transform, apply, evaluate, 6, 2);

            assert_eq!(
                result.value, expected.value,
                "pile {pile}: parallel and sequential values must agree"
            );
            assert_eq!(result.path.len(), expected.path.len(), "pile {pile}");
        }
    }

    #[test]
    fn test_parallel_is_deterministic() {
        let mut a = Search::new(9u32);
        let first = a.run_parallel(transform, apply, evaluate, 6, 3);
        let mut b = Search::new(9u32);
        let second = b.run_parallel(transform, apply, evaluate, 6, 3);

        assert_eq!(first.value, second.value);
        assert_eq!(first.path, second.path);
    }

    #[test]
    fn test_single_worker_falls_back_to_sequential() {
        let mut parallel = Search::new(7u32);
        let via_parallel = parallel.run_parallel(transform, apply, evaluate, 5, 1);

        let mut sequential = Search::new(7u32);
        let direct = sequential.run(transform, apply, evaluate, 5);

        assert_eq!(via_parallel.value, direct.value);
        assert_eq!(via_parallel.path, direct.path);
    }

    #[test]
    fn test_more_workers_than_moves() {
        let mut search = Search::new(2u32);
        let result = search.run_parallel(transform, apply, evaluate, 4, 8);
        assert_eq!(result.value, 100, "pile of 2 is won by taking both tokens");
        assert_eq!(result.path.first(), Some(&2));
    }

    #[test]
    fn test_terminal_source() {
        let mut search = Search::new(0u32);
        let result = search.run_parallel(transform, apply, evaluate, 4, 4);
        assert_eq!(result.value, -100);
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_stats_are_collected_from_workers() {
        let mut search = Search::new(10u32);
        search.run_parallel(transform, apply, evaluate, 8, 2);
        assert!(search.stats().nodes > 1);
    }
}
