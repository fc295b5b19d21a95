use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fraktor_queue_core_rs::{
  FifoQueue, LinkedQueue, RingQueue, VecQueue,
  workload::{DEFAULT_VERTEX_COUNT, DirectedGraph, STRESS_BURSTS, breadth_first_visit, run_bursts},
};

fn bench_breadth_first(c: &mut Criterion) {
  let mut group = c.benchmark_group("breadth_first_visit");
  let graph = DirectedGraph::default();
  let start = DEFAULT_VERTEX_COUNT - 1;

  group.bench_function(BenchmarkId::new("ring", DEFAULT_VERTEX_COUNT), |b| {
    b.iter(|| black_box(breadth_first_visit(&mut RingQueue::new(), start, &graph)));
  });
  group.bench_function(BenchmarkId::new("vec", DEFAULT_VERTEX_COUNT), |b| {
    b.iter(|| black_box(breadth_first_visit(&mut VecQueue::new(), start, &graph)));
  });
  group.bench_function(BenchmarkId::new("linked", DEFAULT_VERTEX_COUNT), |b| {
    b.iter(|| black_box(breadth_first_visit(&mut LinkedQueue::new(), start, &graph)));
  });

  group.finish();
}

fn bench_stress_bursts(c: &mut Criterion) {
  let mut group = c.benchmark_group("stress_bursts");
  group.sample_size(10);

  group.bench_function("ring", |b| {
    b.iter(|| black_box(run_bursts(&mut RingQueue::new(), &STRESS_BURSTS)));
  });
  group.bench_function("linked", |b| {
    b.iter(|| black_box(run_bursts(&mut LinkedQueue::new(), &STRESS_BURSTS)));
  });

  group.finish();
}

fn bench_add_remove(c: &mut Criterion) {
  let mut group = c.benchmark_group("add_then_remove");

  for size in [64_usize, 1_024, 16_384].iter() {
    group.bench_with_input(BenchmarkId::new("ring", size), size, |b, &size| {
      b.iter(|| {
        let mut queue = RingQueue::new();
        for value in 0..size {
          queue.add(value);
        }
        while !queue.is_empty() {
          black_box(queue.remove());
        }
      });
    });

    group.bench_with_input(BenchmarkId::new("linked", size), size, |b, &size| {
      b.iter(|| {
        let mut queue = LinkedQueue::new();
        for value in 0..size {
          queue.add(value);
        }
        while !queue.is_empty() {
          black_box(queue.remove());
        }
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_breadth_first, bench_stress_bursts, bench_add_remove);
criterion_main!(benches);
