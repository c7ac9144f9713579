//! Network construction benchmarks.
//!
//! Measures validation plus graph assembly from a raw interaction list,
//! including duplicate and self-interaction handling.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use interactome_benches::{
    error::BenchSetupError,
    params::NetworkBenchParams,
    source::{SyntheticConfig, SyntheticInteractome},
};
use interactome_core::GraphModel;

const SEED: u64 = 42;

const SIZES: &[NetworkBenchParams] = &[
    NetworkBenchParams {
        protein_count: 1_000,
        interaction_count: 4_000,
    },
    NetworkBenchParams {
        protein_count: 10_000,
        interaction_count: 40_000,
    },
];

fn construction_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("graph_from_source");
    group.sample_size(20);

    for params in SIZES {
        let raw = SyntheticInteractome::generate(&SyntheticConfig {
            protein_count: params.protein_count,
            interaction_count: params.interaction_count,
            seed: SEED,
        })?;

        group.bench_with_input(BenchmarkId::from_parameter(params), &raw, |b, raw| {
            b.iter(|| GraphModel::from_source(raw));
        });
    }

    group.finish();
    Ok(())
}

fn construction(c: &mut Criterion) {
    if let Err(err) = construction_impl(c) {
        panic!("construction benchmark setup failed: {err}");
    }
}

criterion_group!(benches, construction);
criterion_main!(benches);
