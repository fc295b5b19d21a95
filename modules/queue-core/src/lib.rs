#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

//! FIFO queue primitives for the fraktor runtime.
//!
//! The central type is [`RingQueue`], a growable ring buffer with amortized
//! constant-time insertion and removal. [`VecQueue`] and [`LinkedQueue`] share
//! the same [`FifoQueue`] contract and serve as baselines; the [`workload`]
//! module drives any of them through synthetic traversal and burst patterns.

extern crate alloc;

pub mod collections;
pub mod workload;

pub use collections::{
  DEFAULT_DOUBLING_LIMIT, DEFAULT_FRACTIONAL_SHIFTS, FifoQueue, GrowthPolicy, LinkedQueue, QueueError, RingQueue,
  RingQueueIntoIter, RingQueueIter, VecQueue, next_capacity,
};
