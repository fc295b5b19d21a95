/// Counters collected while [`super::breadth_first_visit`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
  added:    usize,
  removed:  usize,
  peak_len: usize,
}

impl TraversalStats {
  /// Returns how many vertices were added to the queue, including the start vertex.
  #[must_use]
  pub const fn added(&self) -> usize {
    self.added
  }

  /// Returns how many vertices were removed from the queue.
  #[must_use]
  pub const fn removed(&self) -> usize {
    self.removed
  }

  /// Returns the largest queue length observed.
  #[must_use]
  pub const fn peak_len(&self) -> usize {
    self.peak_len
  }

  pub(super) const fn record_add(&mut self, len: usize) {
    self.added += 1;
    if len > self.peak_len {
      self.peak_len = len;
    }
  }

  pub(super) const fn record_remove(&mut self) {
    self.removed += 1;
  }
}
