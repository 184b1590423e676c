//! Benchmarks for cross-math puzzle generation.
//!
//! Measures the complete generation process for a set of fixed seeds:
//! salted candidate draws, target range filtering, and solvability
//! confirmation through the solver.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use crossmath_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = ["2026-01-01", "2026-06-15", "2026-12-31"];

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::default();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::new(seed);
        c.bench_with_input(
            BenchmarkId::new("generate", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(seed.clone()),
                    |seed| generator.generate(&seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
