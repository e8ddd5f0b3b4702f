use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lrcsync_core::{sort_by_time, Timestamp};

fn make_cues(n: usize, distinct: i64) -> (Vec<i64>, Vec<String>, Vec<Timestamp>) {
    // Deterministic shuffle with many repeated times
    let millis: Vec<i64> = (0..n as i64).map(|i| (i * 7_919) % distinct * 10).collect();
    let lyrics = (0..n).map(|i| format!("line {}", i)).collect();
    let timestamps = millis.iter().map(|&ms| Timestamp::from_millis(ms)).collect();
    (millis, lyrics, timestamps)
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_time");

    for &(n, distinct) in &[(100usize, 100i64), (1000, 1000), (1000, 10), (10_000, 500)] {
        let input = make_cues(n, distinct);
        group.bench_with_input(
            BenchmarkId::new(format!("distinct_{}", distinct), n),
            &input,
            |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |(mut millis, mut lyrics, mut timestamps)| {
                        sort_by_time(&mut millis, &mut lyrics, &mut timestamps).unwrap();
                        criterion::black_box(millis);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
