//! Basic benchmarks for the `fixed_list` crate.
//!
//! Every operation after construction is expected to report zero bytes allocated.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use fixed_list::FixedList;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const CAPACITY: usize = 128;
static TEST_VALUES: [TestItem; CAPACITY] = [1024; CAPACITY];

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("fixed_list_basic");

    let allocs_op = allocs.operation("append_pop");
    group.bench_function("append_pop", |b| {
        b.iter_custom(|iters| {
            let mut list = FixedList::<TestItem, CAPACITY>::new();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                list.append(black_box(&TEST_VALUES[0])).unwrap();
                _ = black_box(list.pop());
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_pop_tail");
    group.bench_function("push_pop_tail", |b| {
        b.iter_custom(|iters| {
            let mut list = FixedList::<TestItem, CAPACITY>::new();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                list.push(black_box(&TEST_VALUES[0])).unwrap();
                _ = black_box(list.pop_tail());
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("fill_and_drain");
    group.bench_function("fill_and_drain", |b| {
        b.iter_custom(|iters| {
            let mut list = FixedList::<TestItem, CAPACITY>::new();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                for value in &TEST_VALUES {
                    list.append(black_box(value)).unwrap();
                }

                while black_box(list.pop()).is_some() {}
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("remove_middle");
    group.bench_function("remove_middle", |b| {
        b.iter_custom(|iters| {
            let mut list = FixedList::<TestItem, CAPACITY>::new();

            for value in &TEST_VALUES {
                list.append(value).unwrap();
            }

            let middle = &TEST_VALUES[CAPACITY / 2];

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(list.remove(black_box(middle)));
                list.append(middle).unwrap();
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
