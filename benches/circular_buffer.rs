use std::collections::VecDeque;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ringqueue::prelude::*;

const OPS_PER_ITER: u64 = 10_000;

/// Benchmarks growth from the minimum capacity, alternating ends.
fn bench_fill_both_ends(c: &mut Criterion) {
	let mut group = c.benchmark_group("fill_both_ends");
	group.throughput(Throughput::Elements(OPS_PER_ITER));

	group.bench_function("circular_buffer", |b| {
		b.iter(|| {
			let mut queue = CircularBuffer::new();
			for i in 0..OPS_PER_ITER {
				if i % 2 == 0 {
					queue.enqueue(black_box(i));
				} else {
					queue.push_front(black_box(i));
				}
			}
			queue
		})
	});

	group.bench_function("linked_queue", |b| {
		b.iter(|| {
			let mut queue = LinkedQueue::new();
			for i in 0..OPS_PER_ITER {
				if i % 2 == 0 {
					queue.enqueue(black_box(i));
				} else {
					queue.push_front(black_box(i));
				}
			}
			queue
		})
	});

	group.bench_function("vec_deque", |b| {
		b.iter(|| {
			let mut queue = VecDeque::with_capacity(1);
			for i in 0..OPS_PER_ITER {
				if i % 2 == 0 {
					queue.push_back(black_box(i));
				} else {
					queue.push_front(black_box(i));
				}
			}
			queue
		})
	});

	group.finish();
}

/// Benchmarks a steady-state FIFO at several queue depths, where the ring wraps constantly.
fn bench_fifo_cycle(c: &mut Criterion) {
	let mut group = c.benchmark_group("fifo_cycle");
	group.throughput(Throughput::Elements(OPS_PER_ITER));

	for depth in [8u64, 64, 1024] {
		group.bench_with_input(BenchmarkId::new("circular_buffer", depth), &depth, |b, &depth| {
			let mut queue: CircularBuffer<u64> = (0..depth).collect();
			b.iter(|| {
				for i in 0..OPS_PER_ITER {
					black_box(queue.dequeue().ok());
					queue.enqueue(i);
				}
			})
		});

		group.bench_with_input(BenchmarkId::new("linked_queue", depth), &depth, |b, &depth| {
			let mut queue: LinkedQueue<u64> = (0..depth).collect();
			b.iter(|| {
				for i in 0..OPS_PER_ITER {
					black_box(queue.dequeue().ok());
					queue.enqueue(i);
				}
			})
		});
	}

	group.finish();
}

/// Benchmarks back-relative reads across the whole queue.
fn bench_back_indexing(c: &mut Criterion) {
	let mut group = c.benchmark_group("back_indexing");
	let len = 4096usize;
	group.throughput(Throughput::Elements(len as u64));

	let mut queue = CircularBuffer::new();
	for i in 0..len {
		// Wrap the ring so indexing crosses the end of the storage.
		queue.push_front(i);
	}

	group.bench_function("circular_buffer", |b| {
		b.iter(|| {
			let mut sum = 0usize;
			for i in 0..len {
				sum += queue.get(black_box(i)).copied().unwrap_or_default();
			}
			sum
		})
	});

	group.finish();
}

criterion_group!(benches, bench_fill_both_ends, bench_fifo_cycle, bench_back_indexing);
criterion_main!(benches);
