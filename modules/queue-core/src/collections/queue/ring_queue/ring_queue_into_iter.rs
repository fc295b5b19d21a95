use core::iter::FusedIterator;

use super::RingQueue;

/// Owning iterator that drains a [`RingQueue`] in FIFO order.
pub struct RingQueueIntoIter<T> {
  queue: RingQueue<T>,
}

impl<T> RingQueueIntoIter<T> {
  pub(super) const fn new(queue: RingQueue<T>) -> Self {
    Self { queue }
  }
}

impl<T> Iterator for RingQueueIntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.queue.try_remove().ok()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.queue.len();
    (len, Some(len))
  }
}

impl<T> ExactSizeIterator for RingQueueIntoIter<T> {}

impl<T> FusedIterator for RingQueueIntoIter<T> {}
