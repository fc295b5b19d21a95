use super::breadth_first_visit;
use crate::{
  collections::{LinkedQueue, RingQueue, VecQueue},
  workload::DirectedGraph,
};

#[test]
fn visits_every_vertex_below_the_start_once() {
  let graph = DirectedGraph::new(100);
  let mut queue = RingQueue::new();
  let stats = breadth_first_visit(&mut queue, 99, &graph);
  assert_eq!(stats.added(), 100);
  assert_eq!(stats.removed(), 100);
  assert!(queue.is_empty());
}

#[test]
fn frontier_peaks_after_the_first_expansion() {
  let graph = DirectedGraph::new(50);
  let stats = breadth_first_visit(&mut RingQueue::new(), 49, &graph);
  assert_eq!(stats.peak_len(), 49);
}

#[test]
fn isolated_start_vertex_is_visited_alone() {
  let graph = DirectedGraph::new(10);
  let stats = breadth_first_visit(&mut RingQueue::new(), 0, &graph);
  assert_eq!(stats.added(), 1);
  assert_eq!(stats.removed(), 1);
  assert_eq!(stats.peak_len(), 1);
}

#[test]
fn backings_produce_identical_stats() {
  let graph = DirectedGraph::new(500);
  let ring = breadth_first_visit(&mut RingQueue::new(), 499, &graph);
  let vec = breadth_first_visit(&mut VecQueue::new(), 499, &graph);
  let linked = breadth_first_visit(&mut LinkedQueue::new(), 499, &graph);
  assert_eq!(ring, vec);
  assert_eq!(ring, linked);
}
