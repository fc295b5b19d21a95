#[cfg(test)]
mod tests;

use tracing::debug;

use super::{BurstOp, BurstReport, TRACE_TARGET};
use crate::collections::FifoQueue;

/// Scripted stress pattern alternating large add and remove bursts.
///
/// Every prefix leaves a non-negative length and the script ends with an empty queue after
/// 1 260 000 additions and as many removals.
pub const STRESS_BURSTS: [BurstOp; 8] = [
  BurstOp::Add(50_000),
  BurstOp::Remove(25_000),
  BurstOp::Add(200_000),
  BurstOp::Remove(225_000),
  BurstOp::Add(10_000),
  BurstOp::Remove(5_000),
  BurstOp::Add(1_000_000),
  BurstOp::Remove(1_005_000),
];

/// Replays `bursts` against `queue`.
///
/// Added elements are consecutive sequence numbers continuing from zero, so each removal can be
/// checked against the oldest outstanding number.
///
/// # Panics
///
/// Panics if a removal burst runs past the end of the queue.
pub fn run_bursts<Q>(queue: &mut Q, bursts: &[BurstOp]) -> BurstReport
where
  Q: FifoQueue<usize> + ?Sized, {
  let mut report = BurstReport::new();
  let mut next = 0_usize;
  let mut expected = 0_usize;

  for burst in bursts {
    match *burst {
      | BurstOp::Add(count) => {
        for _ in 0..count {
          queue.add(next);
          next += 1;
          report.record_add(queue.len());
        }
      },
      | BurstOp::Remove(count) => {
        for _ in 0..count {
          let value = queue.remove();
          report.record_remove(value == expected);
          expected = value + 1;
        }
      },
    }
  }

  debug!(
    target: TRACE_TARGET,
    bursts = bursts.len(),
    added = report.added(),
    removed = report.removed(),
    peak_len = report.peak_len(),
    in_order = report.in_order(),
    "burst script finished"
  );
  report
}
