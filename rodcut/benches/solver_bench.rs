use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use rodcut::io;
use rodcut::solvers::{self, SolverKind};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, solver_bench);

const ROD_LENGTHS: [i64; 3] = [100, 500, 1000];

/// Benchmark both solvers on random price tables of increasing rod length
fn solver_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("rod_cutting");
    let mut rng = SmallRng::seed_from_u64(0);

    for length in ROD_LENGTHS {
        let prices = (1..=length)
            .map(|l| l + rng.random_range(0..=l))
            .collect::<Vec<i64>>();
        let instance = io::validate(length, &prices).expect("valid instance");

        for kind in SolverKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.to_string(), length), &instance, |b, instance| {
                b.iter(|| solvers::solve(black_box(instance), kind))
            });
        }
    }
    group.finish();
}
