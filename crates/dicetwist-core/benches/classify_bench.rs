use criterion::{criterion_group, criterion_main, Criterion};
use dicetwist_core::{generate_seeded, RollConfig, SumClassifier, TupleClassifier};
use std::hint::black_box;

fn bench_classify(c: &mut Criterion) {
    let config = RollConfig::new(200_000, 3, 6).unwrap();
    let results = generate_seeded(&config, 42);
    let sums = SumClassifier::new(vec![(3, 6), (7, 12), (13, 18)]);
    let tuples = TupleClassifier::new(results.config());

    // warm the face-occurrence cache so it isn't charged to the first case
    let _ = results.face_occurrences(0).unwrap();

    c.bench_function("classify_sum_200k", |b| {
        b.iter(|| black_box(results.classify(&sums)))
    });
    c.bench_function("par_classify_sum_200k", |b| {
        b.iter(|| black_box(results.par_classify(&sums)))
    });
    c.bench_function("classify_tuples_200k", |b| {
        b.iter(|| black_box(results.classify(&tuples)))
    });
}

fn bench_twisted_sum(c: &mut Criterion) {
    let config = RollConfig::new(200_000, 5, 6).unwrap();
    let results = generate_seeded(&config, 42);
    let _ = results.face_occurrences(0).unwrap();

    c.bench_function("twisted_sum_200k", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for roll in 0..results.rolls_count() {
                total += results.twisted_sum(roll, 2).unwrap() as u64;
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_classify, bench_twisted_sum);
criterion_main!(benches);
