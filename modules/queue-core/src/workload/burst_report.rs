/// Outcome of [`super::run_bursts`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BurstReport {
  added:    usize,
  removed:  usize,
  peak_len: usize,
  in_order: bool,
}

impl BurstReport {
  pub(super) const fn new() -> Self {
    Self { added: 0, removed: 0, peak_len: 0, in_order: true }
  }

  /// Returns the number of elements added.
  #[must_use]
  pub const fn added(&self) -> usize {
    self.added
  }

  /// Returns the number of elements removed.
  #[must_use]
  pub const fn removed(&self) -> usize {
    self.removed
  }

  /// Returns the largest queue length observed.
  #[must_use]
  pub const fn peak_len(&self) -> usize {
    self.peak_len
  }

  /// Indicates whether every removal returned the oldest outstanding element.
  #[must_use]
  pub const fn in_order(&self) -> bool {
    self.in_order
  }

  pub(super) const fn record_add(&mut self, len: usize) {
    self.added += 1;
    if len > self.peak_len {
      self.peak_len = len;
    }
  }

  pub(super) const fn record_remove(&mut self, expected: bool) {
    self.removed += 1;
    self.in_order &= expected;
  }
}
