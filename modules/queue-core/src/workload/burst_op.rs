/// One burst of identical queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstOp {
  /// Add the given number of elements.
  Add(usize),
  /// Remove the given number of elements.
  Remove(usize),
}

impl BurstOp {
  /// Returns the number of operations in the burst.
  #[must_use]
  pub const fn count(self) -> usize {
    match self {
      | Self::Add(count) | Self::Remove(count) => count,
    }
  }
}
