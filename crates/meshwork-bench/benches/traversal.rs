//! Criterion micro-benchmarks for crawler traversal.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use meshwork_bench::{reference_mesh, REFERENCE_SHAPE, VOLUME_SHAPE};
use meshwork_mesh::{Crawl, MeshData, MeshDataMut};

/// Benchmark: full read crawl of the 256x256 reference plane.
fn bench_crawl_plane_64k(c: &mut Criterion) {
    let mesh = reference_mesh(&REFERENCE_SHAPE, 42).unwrap();

    c.bench_function("crawl_plane_64k", |b| {
        b.iter(|| {
            let mut crawler = mesh.crawler();
            let mut acc = 0.0;
            while crawler.has_next() {
                crawler.advance().unwrap();
                acc += *crawler.current().unwrap();
            }
            black_box(acc)
        });
    });
}

/// Benchmark: full crawl of the 32^3 volume, reading the position each step.
fn bench_crawl_volume_with_position(c: &mut Criterion) {
    let mesh = reference_mesh(&VOLUME_SHAPE, 42).unwrap();

    c.bench_function("crawl_volume_32k_with_position", |b| {
        let mut position = [0usize; 3];
        b.iter(|| {
            let mut crawler = mesh.crawler();
            while crawler.has_next() {
                crawler.advance().unwrap();
                crawler.position(&mut position).unwrap();
                black_box(&position);
            }
        });
    });
}

/// Benchmark: mutable crawl over an interior 128x128 range of the plane.
fn bench_crawl_range_mut(c: &mut Criterion) {
    let mut mesh = reference_mesh(&REFERENCE_SHAPE, 42).unwrap();

    c.bench_function("crawl_range_mut_16k", |b| {
        b.iter(|| {
            let mut crawler = mesh.crawler_range_mut(&[64, 64], &[192, 192]).unwrap();
            while crawler.has_next() {
                crawler.advance().unwrap();
                *crawler.current_mut().unwrap() *= 0.5;
            }
        });
    });
}

/// Benchmark: 1000 random-access `element_at` lookups on the volume.
fn bench_element_at_volume(c: &mut Criterion) {
    let mesh = reference_mesh(&VOLUME_SHAPE, 42).unwrap();
    let indices: Vec<[usize; 3]> = (0u64..1000)
        .map(|i| {
            let h = i.wrapping_mul(6364136223846793007);
            [(h % 32) as usize, ((h >> 8) % 32) as usize, ((h >> 16) % 32) as usize]
        })
        .collect();

    c.bench_function("element_at_volume_1k", |b| {
        b.iter(|| {
            for index in &indices {
                black_box(mesh.element_at(index).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_crawl_plane_64k,
    bench_crawl_volume_with_position,
    bench_crawl_range_mut,
    bench_element_at_volume
);
criterion_main!(benches);
