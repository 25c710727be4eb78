use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use iowaittop::delta::{DEFAULT_TOP_COUNT, diff, rank};
use iowaittop::system::snapshot::{Snapshot, TaskSample};
use std::hint::black_box;

/// Two consecutive ticks over `n` processes with about 5% churn.
fn make_ticks(n: u32) -> (Snapshot, Snapshot) {
    let previous = (1..=n)
        .map(|pid| TaskSample::new(pid * 3, u64::from(pid) * 17))
        .collect();
    let current = (1..=n)
        .filter(|pid| pid % 20 != 0)
        .map(|pid| TaskSample::new(pid * 3, u64::from(pid) * 17 + u64::from(pid % 97)))
        .chain((1..=n / 20).map(|i| TaskSample::new(n * 3 + i, 1)))
        .collect();
    (
        Snapshot::from_samples(previous),
        Snapshot::from_samples(current),
    )
}

fn bench_snapshot_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_sort_500_1000_2000_5000");

    for size in [500u32, 1000, 2000, 5000] {
        let samples: Vec<TaskSample> = (1..=size)
            .rev()
            .map(|pid| TaskSample::new(pid, u64::from(pid)))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, samples| {
            b.iter(|| {
                let snap = Snapshot::from_samples(black_box(samples.clone()));
                black_box(snap);
            })
        });
    }

    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_500_1000_2000_5000");

    for size in [500u32, 1000, 2000, 5000] {
        let ticks = make_ticks(size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &ticks,
            |b, (previous, current)| {
                b.iter(|| {
                    let deltas = diff(black_box(previous), black_box(current));
                    black_box(deltas);
                })
            },
        );
    }

    group.finish();
}

fn bench_diff_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_rank_500_1000_2000_5000");

    for size in [500u32, 1000, 2000, 5000] {
        let ticks = make_ticks(size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &ticks,
            |b, (previous, current)| {
                b.iter(|| {
                    let deltas = diff(black_box(previous), black_box(current));
                    let top = rank(deltas, DEFAULT_TOP_COUNT);
                    black_box(top);
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_snapshot_build,
    bench_diff,
    bench_diff_and_rank
);
criterion_main!(benches);
