#[cfg(test)]
mod tests;

use ahash::RandomState;
use hashbrown::HashSet;
use tracing::debug;

use super::{DirectedGraph, TRACE_TARGET, TraversalStats};
use crate::collections::FifoQueue;

/// Walks `graph` breadth-first from `start`, using `queue` as the frontier.
///
/// Each removed vertex enqueues every neighbor that has not been enqueued before. The queue is
/// drained when the walk finishes.
pub fn breadth_first_visit<Q>(queue: &mut Q, start: usize, graph: &DirectedGraph) -> TraversalStats
where
  Q: FifoQueue<usize> + ?Sized, {
  let mut seen: HashSet<usize, RandomState> = HashSet::with_hasher(RandomState::new());
  let mut stats = TraversalStats::default();

  queue.add(start);
  stats.record_add(queue.len());
  while !queue.is_empty() {
    let vertex = queue.remove();
    stats.record_remove();
    for neighbor in graph.neighbors(vertex) {
      if seen.insert(neighbor) {
        queue.add(neighbor);
        stats.record_add(queue.len());
      }
    }
  }

  debug!(
    target: TRACE_TARGET,
    start,
    added = stats.added(),
    removed = stats.removed(),
    peak_len = stats.peak_len(),
    "breadth-first visit finished"
  );
  stats
}
