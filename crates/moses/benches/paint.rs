//! Benchmark for lattice painting
//!
//! Benchmarks symmetry-table construction and the full three-phase
//! paint on a mixed-material periodic lattice.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::IVec3;
use lattice::{GridSpec, Lattice};
use moses::Moses;
use symmetry::SymmetryTable;

/// Two-material lattice with enough broken symmetry to exercise the
/// complementary phase
fn bench_grid(dims: IVec3) -> GridSpec {
    let mut spec = GridSpec::uniform(dims, 1);
    spec.set(IVec3::ZERO, 2);
    spec.set(IVec3::new(dims.x - 1, 0, 0), 2);
    spec
}

fn bench_symmetry_table(c: &mut Criterion) {
    let spec = bench_grid(IVec3::new(4, 4, 4));
    let lattice = Lattice::from_grid(&spec).unwrap();

    c.bench_function("symmetry_table_4x4x4", |b| {
        b.iter(|| black_box(SymmetryTable::build(&lattice)));
    });
}

fn bench_full_paint(c: &mut Criterion) {
    let spec = bench_grid(IVec3::new(4, 4, 4));

    c.bench_function("paint_4x4x4", |b| {
        b.iter(|| {
            let mut moses = Moses::from_grid(&spec).unwrap();
            black_box(moses.run())
        });
    });
}

criterion_group!(benches, bench_symmetry_table, bench_full_paint);

criterion_main!(benches);
