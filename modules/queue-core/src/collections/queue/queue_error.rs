
use core::fmt;

/// Errors that occur during queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The queue has no elements to remove.
  Empty,
  /// Storage could not be grown to make room for the element. Contains the element that was
  /// attempted to be added.
  AllocError(T),
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the element on failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::AllocError(item) => Some(item),
      | Self::Empty => None,
    }
  }

  /// Indicates whether the error reports an empty queue.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    matches!(self, Self::Empty)
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Empty => f.write_str("queue is empty"),
      | Self::AllocError(_) => f.write_str("queue storage could not be grown"),
    }
  }
}

impl<T: fmt::Debug> core::error::Error for QueueError<T> {}
