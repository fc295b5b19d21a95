//! Synthetic workloads that drive a [`crate::FifoQueue`] for tests and benchmarks.

mod breadth_first;
mod burst_op;
mod burst_report;
mod burst_script;
mod directed_graph;
mod traversal_stats;

pub use breadth_first::breadth_first_visit;
pub use burst_op::BurstOp;
pub use burst_report::BurstReport;
pub use burst_script::{STRESS_BURSTS, run_bursts};
pub use directed_graph::{DEFAULT_VERTEX_COUNT, DirectedGraph};
pub use traversal_stats::TraversalStats;

const TRACE_TARGET: &str = "fraktor::queue::workload";
