//! Queue collections shared between runtimes.

pub mod queue;

pub use queue::{
  DEFAULT_DOUBLING_LIMIT, DEFAULT_FRACTIONAL_SHIFTS, FifoQueue, GrowthPolicy, LinkedQueue, QueueError, RingQueue,
  RingQueueIntoIter, RingQueueIter, VecQueue, next_capacity,
};
