//! Benchmarks for pallet load planning.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palletizer_core::{MaterialData, PalletConfig, Planner};
use palletizer_stack::PalletPacker;

fn packer_benchmark(c: &mut Criterion) {
    let pallet = PalletConfig::standard();
    let packer = PalletPacker::default_config();

    let carton = MaterialData::new("carton", 400.0, 300.0, 100.0);
    c.bench_function("plan_standard_carton", |b| {
        b.iter(|| black_box(packer.plan(black_box(&carton), black_box(&pallet))))
    });

    let small = MaterialData::new("small", 40.0, 30.0, 10.0);
    c.bench_function("plan_small_boxes", |b| {
        b.iter(|| black_box(packer.plan(black_box(&small), black_box(&pallet))))
    });
}

criterion_group!(benches, packer_benchmark);
criterion_main!(benches);
