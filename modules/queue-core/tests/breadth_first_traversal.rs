//! Breadth-first traversal of the synthetic graph through each queue backing.

use fraktor_queue_core_rs::{
  FifoQueue, LinkedQueue, RingQueue,
  workload::{DEFAULT_VERTEX_COUNT, DirectedGraph, breadth_first_visit},
};

#[test]
fn ring_queue_visits_the_whole_default_graph() {
  let graph = DirectedGraph::default();
  let mut queue = RingQueue::new();
  let stats = breadth_first_visit(&mut queue, DEFAULT_VERTEX_COUNT - 1, &graph);

  assert_eq!(stats.removed(), DEFAULT_VERTEX_COUNT);
  assert_eq!(stats.added(), DEFAULT_VERTEX_COUNT);
  assert_eq!(stats.peak_len(), DEFAULT_VERTEX_COUNT - 1);
  assert!(queue.is_empty());
}

#[test]
fn ring_and_linked_queues_agree() {
  let graph = DirectedGraph::new(2_000);
  let mut ring = RingQueue::new();
  let mut linked = LinkedQueue::new();
  assert_eq!(breadth_first_visit(&mut ring, 1_999, &graph), breadth_first_visit(&mut linked, 1_999, &graph));
}

#[test]
fn traversal_through_a_trait_object() {
  let graph = DirectedGraph::new(64);
  let mut queue: Box<dyn FifoQueue<usize>> = Box::new(RingQueue::new());
  let stats = breadth_first_visit(queue.as_mut(), 63, &graph);
  assert_eq!(stats.removed(), 64);
}
