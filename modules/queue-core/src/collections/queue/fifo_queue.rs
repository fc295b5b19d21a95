use super::QueueError;

/// First-in-first-out contract shared by every queue backing.
///
/// None of the implementations synchronize internally; wrap the queue in a mutex or use a
/// channel when several threads need access.
pub trait FifoQueue<T> {
  /// Appends `value` at the logical tail.
  ///
  /// # Panics
  ///
  /// Panics if the backing storage cannot be grown, like [`alloc::vec::Vec::push`].
  fn add(&mut self, value: T);

  /// Appends `value` at the logical tail without panicking on allocation failure.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] carrying `value` when storage could not be grown.
  fn try_add(&mut self, value: T) -> Result<(), QueueError<T>> {
    self.add(value);
    Ok(())
  }

  /// Removes and returns the logical head.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to remove.
  fn try_remove(&mut self) -> Result<T, QueueError<T>>;

  /// Removes and returns the logical head.
  ///
  /// # Panics
  ///
  /// Panics if the queue is empty. Removing from an empty queue is a caller bug; use
  /// [`FifoQueue::try_remove`] when emptiness is an expected condition.
  #[track_caller]
  fn remove(&mut self) -> T {
    match self.try_remove() {
      | Ok(value) => value,
      | Err(_) => panic!("remove called on an empty queue"),
    }
  }

  /// Returns the number of elements currently held.
  fn len(&self) -> usize;

  /// Indicates whether the queue holds no elements.
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drops every element and releases the backing storage.
  fn clear(&mut self);
}
