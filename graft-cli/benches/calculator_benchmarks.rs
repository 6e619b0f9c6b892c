use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use graft_core::CrossbreedCalculator;
use graft_core::config::CrossbreedConfig;
use graft_core::sequence::GenePool;

use criterion_config::configure_criterion;

const LETTERS: [char; 3] = ['G', 'H', 'Y'];

// Deterministic spread of distinct sequences over the recessive letters
fn synthetic_sequences(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            (0..6)
                .map(|spot| LETTERS[(i / LETTERS.len().pow(spot)) % LETTERS.len()])
                .collect()
        })
        .collect()
}

fn bench_calculate(c: &mut Criterion) {
    let calculator = CrossbreedCalculator::new(CrossbreedConfig {
        possibilities: 2,
        ..Default::default()
    });

    let mut group = c.benchmark_group("calculate");
    for distinct in [5usize, 10, 20, 40] {
        let pool = GenePool::from_lines(synthetic_sequences(distinct)).unwrap();
        group.throughput(Throughput::Elements(pool.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(distinct), &pool, |b, pool| {
            b.iter(|| calculator.calculate(black_box(pool)));
        });
    }
    group.finish();
}

fn bench_pool_construction(c: &mut Criterion) {
    let lines = synthetic_sequences(100);
    c.bench_function("pool_from_lines_100", |b| {
        b.iter(|| GenePool::from_lines(black_box(&lines)).unwrap());
    });
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = bench_calculate, bench_pool_construction
}
criterion_main!(benches);
