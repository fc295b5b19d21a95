
use alloc::vec::Vec;

use super::{FifoQueue, QueueError};

/// Queue backed by a plain dynamic array.
///
/// Every removal shifts the remaining elements one slot to the front, so removal costs O(len).
/// Kept as a baseline for [`crate::RingQueue`].
#[derive(Debug)]
pub struct VecQueue<T> {
  items: Vec<T>,
}

impl<T> VecQueue<T> {
  /// Creates an empty queue. Does not allocate.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: Vec::new() }
  }

  /// Returns the number of elements the backing array can hold without reallocating.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.items.capacity()
  }
}

impl<T> Default for VecQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> FifoQueue<T> for VecQueue<T> {
  fn add(&mut self, value: T) {
    self.items.push(value);
  }

  fn try_add(&mut self, value: T) -> Result<(), QueueError<T>> {
    if self.items.try_reserve(1).is_err() {
      return Err(QueueError::AllocError(value));
    }
    self.items.push(value);
    Ok(())
  }

  fn try_remove(&mut self) -> Result<T, QueueError<T>> {
    if self.items.is_empty() {
      return Err(QueueError::Empty);
    }
    Ok(self.items.remove(0))
  }

  fn len(&self) -> usize {
    self.items.len()
  }

  fn clear(&mut self) {
    self.items = Vec::new();
  }
}
