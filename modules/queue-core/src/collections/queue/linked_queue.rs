
use alloc::collections::LinkedList;

use super::{FifoQueue, QueueError};

/// Queue backed by a doubly-linked list, allocating one node per element.
///
/// Kept as a baseline for [`crate::RingQueue`].
#[derive(Debug)]
pub struct LinkedQueue<T> {
  nodes: LinkedList<T>,
}

impl<T> LinkedQueue<T> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { nodes: LinkedList::new() }
  }
}

impl<T> Default for LinkedQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> FifoQueue<T> for LinkedQueue<T> {
  fn add(&mut self, value: T) {
    self.nodes.push_back(value);
  }

  fn try_remove(&mut self) -> Result<T, QueueError<T>> {
    self.nodes.pop_front().ok_or(QueueError::Empty)
  }

  fn len(&self) -> usize {
    self.nodes.len()
  }

  fn clear(&mut self) {
    self.nodes.clear();
  }
}
