//! Growable ring buffer queue.

mod ring_queue_into_iter;
mod ring_queue_iter;

use alloc::{boxed::Box, collections::TryReserveError, vec::Vec};
use core::fmt;

pub use ring_queue_into_iter::RingQueueIntoIter;
pub use ring_queue_iter::RingQueueIter;
use tracing::trace;

use super::{FifoQueue, GrowthPolicy, QueueError};

const TRACE_TARGET: &str = "fraktor::queue::ring";

/// Unbounded FIFO queue backed by a circular buffer.
///
/// Live elements occupy `len` consecutive slots starting at `head`, wrapping around the end of the
/// buffer. Removal only advances `head`; nothing is shifted. When an insertion finds every slot
/// occupied the buffer is reallocated according to the [`GrowthPolicy`] and the live elements are
/// moved to the front of the new buffer in FIFO order.
///
/// Storage is allocated lazily on the first insertion and never shrinks until [`RingQueue::clear`].
pub struct RingQueue<T> {
  buffer: Box<[Option<T>]>,
  head:   usize,
  tail:   usize,
  len:    usize,
  policy: GrowthPolicy,
}

impl<T> RingQueue<T> {
  /// Creates an empty queue using [`GrowthPolicy::DEFAULT`]. Does not allocate.
  #[must_use]
  pub fn new() -> Self {
    Self::with_policy(GrowthPolicy::DEFAULT)
  }

  /// Creates an empty queue growing according to `policy`. Does not allocate.
  #[must_use]
  pub fn with_policy(policy: GrowthPolicy) -> Self {
    Self { buffer: Box::default(), head: 0, tail: 0, len: 0, policy }
  }

  /// Returns the growth policy.
  #[must_use]
  pub const fn policy(&self) -> GrowthPolicy {
    self.policy
  }

  /// Returns the number of allocated slots.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.buffer.len()
  }

  /// Returns the number of live elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the queue holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns a reference to the logical head without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    if self.len == 0 {
      return None;
    }
    self.buffer[self.head].as_ref()
  }

  /// Returns an iterator over the live elements in FIFO order.
  #[must_use]
  pub fn iter(&self) -> RingQueueIter<'_, T> {
    RingQueueIter::new(&self.buffer, self.head, self.len)
  }

  /// Appends `value` at the logical tail.
  ///
  /// # Panics
  ///
  /// Panics if the buffer cannot be grown.
  pub fn add(&mut self, value: T) {
    if let Err(error) = self.try_add(value) {
      panic!("ring queue capacity overflow: {error}");
    }
  }

  /// Appends `value` at the logical tail.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] carrying `value` when the buffer cannot be grown.
  pub fn try_add(&mut self, value: T) -> Result<(), QueueError<T>> {
    if self.len == self.buffer.len() && self.grow().is_err() {
      return Err(QueueError::AllocError(value));
    }
    self.buffer[self.tail] = Some(value);
    self.tail = (self.tail + 1) % self.buffer.len();
    self.len += 1;
    Ok(())
  }

  /// Removes and returns the logical head.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn try_remove(&mut self) -> Result<T, QueueError<T>> {
    if self.len == 0 {
      return Err(QueueError::Empty);
    }
    let Some(value) = self.buffer[self.head].take() else {
      unreachable!("live slot {} of ring queue was vacant", self.head);
    };
    self.head = (self.head + 1) % self.buffer.len();
    self.len -= 1;
    Ok(value)
  }

  /// Removes and returns the logical head.
  ///
  /// # Panics
  ///
  /// Panics if the queue is empty.
  #[track_caller]
  pub fn remove(&mut self) -> T {
    match self.try_remove() {
      | Ok(value) => value,
      | Err(_) => panic!("remove called on an empty queue"),
    }
  }

  /// Drops every element and releases the buffer. The growth policy is kept.
  pub fn clear(&mut self) {
    let released = self.buffer.len();
    self.buffer = Box::default();
    self.head = 0;
    self.tail = 0;
    self.len = 0;
    trace!(target: TRACE_TARGET, released, "ring queue cleared");
  }

  fn grow(&mut self) -> Result<(), TryReserveError> {
    let current = self.buffer.len();
    let next = self.policy.next_capacity(current, self.len);
    let mut relocated: Vec<Option<T>> = Vec::new();
    relocated.try_reserve_exact(next)?;

    // Unwrap the ring: the run from `head` to the end comes first, then the run before `head`.
    let (wrapped, leading) = self.buffer.split_at_mut(self.head);
    let leading_span = leading.len();
    relocated.extend(leading.iter_mut().map(Option::take));
    let wrapped_span = wrapped.len();
    relocated.extend(wrapped.iter_mut().map(Option::take));
    assert!(
      leading_span + wrapped_span == self.len,
      "ring queue relinearization moved {} elements but {} are live",
      leading_span + wrapped_span,
      self.len
    );
    relocated.resize_with(next, || None);

    self.buffer = relocated.into_boxed_slice();
    self.head = 0;
    self.tail = self.len;
    trace!(target: TRACE_TARGET, from = current, to = next, len = self.len, "ring queue grew");
    Ok(())
  }
}

impl<T> FifoQueue<T> for RingQueue<T> {
  fn add(&mut self, value: T) {
    RingQueue::add(self, value);
  }

  fn try_add(&mut self, value: T) -> Result<(), QueueError<T>> {
    RingQueue::try_add(self, value)
  }

  fn try_remove(&mut self) -> Result<T, QueueError<T>> {
    RingQueue::try_remove(self)
  }

  #[track_caller]
  fn remove(&mut self) -> T {
    RingQueue::remove(self)
  }

  fn len(&self) -> usize {
    self.len
  }

  fn is_empty(&self) -> bool {
    self.len == 0
  }

  fn clear(&mut self) {
    RingQueue::clear(self);
  }
}

impl<T> Default for RingQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T> Extend<T> for RingQueue<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.add(value);
    }
  }
}

impl<T> FromIterator<T> for RingQueue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut queue = Self::new();
    queue.extend(iter);
    queue
  }
}

impl<T> IntoIterator for RingQueue<T> {
  type IntoIter = RingQueueIntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    RingQueueIntoIter::new(self)
  }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
  type IntoIter = RingQueueIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
