//! FIFO queue backings sharing the [`FifoQueue`] contract.

mod fifo_queue;
mod growth_policy;
mod linked_queue;
mod queue_error;
mod ring_queue;
mod vec_queue;

pub use fifo_queue::FifoQueue;
pub use growth_policy::{DEFAULT_DOUBLING_LIMIT, DEFAULT_FRACTIONAL_SHIFTS, GrowthPolicy, next_capacity};
pub use linked_queue::LinkedQueue;
pub use queue_error::QueueError;
pub use ring_queue::{RingQueue, RingQueueIntoIter, RingQueueIter};
pub use vec_queue::VecQueue;
