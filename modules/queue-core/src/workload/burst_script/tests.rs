use super::{STRESS_BURSTS, run_bursts};
use crate::{
  collections::{FifoQueue, LinkedQueue, RingQueue},
  workload::BurstOp,
};

#[test]
fn stress_script_is_balanced() {
  let added: usize = STRESS_BURSTS.iter().filter(|op| matches!(op, BurstOp::Add(_))).map(|op| op.count()).sum();
  let removed: usize = STRESS_BURSTS.iter().filter(|op| matches!(op, BurstOp::Remove(_))).map(|op| op.count()).sum();
  assert_eq!(added, 1_260_000);
  assert_eq!(removed, 1_260_000);

  let mut outstanding = 0_isize;
  for op in STRESS_BURSTS {
    match op {
      | BurstOp::Add(count) => outstanding += count as isize,
      | BurstOp::Remove(count) => outstanding -= count as isize,
    }
    assert!(outstanding >= 0);
  }
  assert_eq!(outstanding, 0);
}

#[test]
fn small_script_reports_counts_and_order() {
  let script = [BurstOp::Add(10), BurstOp::Remove(4), BurstOp::Add(6), BurstOp::Remove(12)];
  let mut queue = RingQueue::new();
  let report = run_bursts(&mut queue, &script);
  assert_eq!(report.added(), 16);
  assert_eq!(report.removed(), 16);
  assert_eq!(report.peak_len(), 12);
  assert!(report.in_order());
  assert!(queue.is_empty());
}

#[test]
fn leftover_elements_stay_queued() {
  let mut queue = LinkedQueue::new();
  let report = run_bursts(&mut queue, &[BurstOp::Add(5), BurstOp::Remove(2)]);
  assert_eq!(report.removed(), 2);
  assert_eq!(queue.len(), 3);
  assert_eq!(queue.remove(), 2);
}

#[test]
#[should_panic(expected = "remove called on an empty queue")]
fn over_draining_script_panics() {
  let mut queue = RingQueue::new();
  let _ = run_bursts(&mut queue, &[BurstOp::Add(3), BurstOp::Remove(4)]);
}
