//! Criterion micro-benchmarks for elementwise mesh arithmetic.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use meshwork_bench::{reference_mesh, REFERENCE_SHAPE, VOLUME_SHAPE};
use meshwork_mesh::{IntegralMesh, Mesh, MeshDataMut, NumberMesh};
use meshwork_test_utils::random_i32_mesh;

/// Benchmark: in-place `add` of two 256x256 `f64` planes.
fn bench_add_plane(c: &mut Criterion) {
    let mut a = reference_mesh(&REFERENCE_SHAPE, 1).unwrap();
    let b_mesh = reference_mesh(&REFERENCE_SHAPE, 2).unwrap();

    c.bench_function("add_plane_64k", |b| {
        b.iter(|| {
            a.add(black_box(&b_mesh)).unwrap();
        });
    });
}

/// Benchmark: `add_scaled` on the 32^3 volume.
fn bench_add_scaled_volume(c: &mut Criterion) {
    let mut a = reference_mesh(&VOLUME_SHAPE, 1).unwrap();
    let b_mesh = reference_mesh(&VOLUME_SHAPE, 2).unwrap();

    c.bench_function("add_scaled_volume_32k", |b| {
        b.iter(|| {
            a.add_scaled(black_box(&b_mesh), -0.25).unwrap();
        });
    });
}

/// Benchmark: `set_sum` into a third mesh.
fn bench_set_sum_plane(c: &mut Criterion) {
    let a = reference_mesh(&REFERENCE_SHAPE, 1).unwrap();
    let b_mesh = reference_mesh(&REFERENCE_SHAPE, 2).unwrap();
    let mut out: Mesh<f64> = Mesh::create(&REFERENCE_SHAPE).unwrap();

    c.bench_function("set_sum_plane_64k", |b| {
        b.iter(|| {
            out.set_sum(&a, &b_mesh).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: `add` through a sub-mesh view of one volume plane.
fn bench_add_through_view(c: &mut Criterion) {
    let mut volume = reference_mesh(&VOLUME_SHAPE, 1).unwrap();
    let plane = reference_mesh(&VOLUME_SHAPE[1..], 2).unwrap();

    c.bench_function("add_through_view_1k", |b| {
        b.iter(|| {
            volume.sub_mesh_at_mut(&[16]).unwrap().add(&plane).unwrap();
        });
    });
}

/// Benchmark: integer `multiply_by` and `bit_xor_with` on 256x256 `i32`.
fn bench_integral_plane(c: &mut Criterion) {
    let mut a = random_i32_mesh(&REFERENCE_SHAPE, 1, 1 << 10);
    let b_mesh = random_i32_mesh(&REFERENCE_SHAPE, 2, 1 << 10);

    c.bench_function("multiply_xor_plane_64k", |b| {
        b.iter(|| {
            a.multiply_by(&b_mesh).unwrap();
            a.bit_xor_with(&b_mesh).unwrap();
        });
    });
}

/// Benchmark: reductions over the plane.
fn bench_reductions_plane(c: &mut Criterion) {
    let mesh = reference_mesh(&REFERENCE_SHAPE, 3).unwrap();

    c.bench_function("min_max_mean_plane_64k", |b| {
        b.iter(|| black_box((mesh.min(), mesh.max(), mesh.mean())));
    });
}

criterion_group!(
    benches,
    bench_add_plane,
    bench_add_scaled_volume,
    bench_set_sum_plane,
    bench_add_through_view,
    bench_integral_plane,
    bench_reductions_plane
);
criterion_main!(benches);
