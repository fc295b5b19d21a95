
/// Element count up to which [`GrowthPolicy::default`] doubles the capacity.
pub const DEFAULT_DOUBLING_LIMIT: usize = 1024;

/// Right shifts summed onto the capacity once the doubling limit is exceeded.
///
/// `[1, 3, 5]` adds a half, an eighth and a thirty-second of the current capacity, i.e. grows by a
/// factor of `1.65625`.
pub const DEFAULT_FRACTIONAL_SHIFTS: [u32; 3] = [1, 3, 5];

/// Capacity growth policy applied by [`crate::RingQueue`] whenever an insertion finds the buffer
/// full.
///
/// Small buffers double so allocation cost stays amortized; large buffers grow by a fraction of
/// their capacity to limit unused memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
  doubling_limit:    usize,
  fractional_shifts: [u32; 3],
}

impl GrowthPolicy {
  /// Policy with the default thresholds.
  pub const DEFAULT: Self = Self { doubling_limit: DEFAULT_DOUBLING_LIMIT, fractional_shifts: DEFAULT_FRACTIONAL_SHIFTS };

  /// Creates a policy with explicit thresholds.
  ///
  /// # Panics
  ///
  /// Panics if any shift is not smaller than `usize::BITS`.
  #[must_use]
  pub const fn new(doubling_limit: usize, fractional_shifts: [u32; 3]) -> Self {
    let mut index = 0;
    while index < fractional_shifts.len() {
      assert!(fractional_shifts[index] < usize::BITS, "fractional shift must be smaller than usize::BITS");
      index += 1;
    }
    Self { doubling_limit, fractional_shifts }
  }

  /// Returns the element count up to which the capacity doubles.
  #[must_use]
  pub const fn doubling_limit(&self) -> usize {
    self.doubling_limit
  }

  /// Returns the shifts applied above the doubling limit.
  #[must_use]
  pub const fn fractional_shifts(&self) -> [u32; 3] {
    self.fractional_shifts
  }

  /// Computes the capacity a full buffer of `capacity` slots holding `count` elements grows to.
  ///
  /// The result is always larger than `capacity`; arithmetic saturates at `usize::MAX`.
  #[must_use]
  pub const fn next_capacity(&self, capacity: usize, count: usize) -> usize {
    if capacity == 0 {
      return 1;
    }
    let next = if count <= self.doubling_limit {
      capacity.saturating_mul(2)
    } else {
      let mut grown = capacity;
      let mut index = 0;
      while index < self.fractional_shifts.len() {
        grown = grown.saturating_add(capacity >> self.fractional_shifts[index]);
        index += 1;
      }
      grown
    };
    if next > capacity { next } else { capacity.saturating_add(1) }
  }
}

impl Default for GrowthPolicy {
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// Computes the next capacity using [`GrowthPolicy::DEFAULT`].
#[must_use]
pub const fn next_capacity(capacity: usize, count: usize) -> usize {
  GrowthPolicy::DEFAULT.next_capacity(capacity, count)
}
