use core::iter::FusedIterator;

/// Borrowing iterator over the live elements of a [`super::RingQueue`] in FIFO order.
pub struct RingQueueIter<'a, T> {
  buffer:    &'a [Option<T>],
  position:  usize,
  remaining: usize,
}

impl<'a, T> RingQueueIter<'a, T> {
  pub(super) const fn new(buffer: &'a [Option<T>], head: usize, len: usize) -> Self {
    Self { buffer, position: head, remaining: len }
  }
}

impl<'a, T> Iterator for RingQueueIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let slot = self.buffer[self.position].as_ref();
    self.position = (self.position + 1) % self.buffer.len();
    self.remaining -= 1;
    slot
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for RingQueueIter<'_, T> {}

impl<T> FusedIterator for RingQueueIter<'_, T> {}
