//! Benchmarks for ray-rs operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ray_core::{render, Image};
use ray_math::{lerp, vec3, Vec3, Vec4};

fn samples(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let f = i as f32 / n as f32;
            vec3(f - 0.5, 1.0 - f, 0.25 + f)
        })
        .collect()
}

/// Benchmark per-vector arithmetic over batches.
fn bench_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector");

    for size in [1000, 10000, 100000].iter() {
        let a = samples(*size);
        let b: Vec<Vec3> = a.iter().map(|v| v.zip_map(*v, |x, y| x * 0.5 + y)).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("add", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| {
                a.iter().zip(b.iter()).map(|(x, y)| black_box(*x) + *y).collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("mul_scalar", size), &a, |bench, a| {
            bench.iter(|| a.iter().map(|v| *v * black_box(2.0)).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("compound", size), &a, |bench, a| {
            bench.iter(|| {
                let mut acc = Vec3::ZERO;
                for v in a {
                    acc.add_mut(black_box(*v)).mul_scalar_mut(0.5);
                }
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("normalize", size), &a, |bench, a| {
            bench.iter(|| a.iter().map(|v| black_box(*v).normalize()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("cross", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| {
                a.iter().zip(b.iter()).map(|(x, y)| black_box(*x).cross(*y)).collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("lerp_vec4", size), &a, |bench, a| {
            bench.iter(|| {
                a.iter()
                    .map(|v| lerp(Vec4::ONE, black_box(v.extend(1.0)), 0.3))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark full-image fills.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for (w, h) in [(256u32, 128u32), (1025, 512)].iter() {
        group.throughput(Throughput::Elements((*w as u64) * (*h as u64)));

        group.bench_with_input(BenchmarkId::new("sky", format!("{w}x{h}")), &(*w, *h), |b, &(w, h)| {
            b.iter(|| render::sky(black_box(w), black_box(h)))
        });

        group.bench_with_input(BenchmarkId::new("gradient", format!("{w}x{h}")), &(*w, *h), |b, &(w, h)| {
            b.iter(|| render::gradient(black_box(w), black_box(h)))
        });
    }

    let image: Image = render::sky(256, 128);
    group.throughput(Throughput::Elements(image.pixel_count() as u64));
    group.bench_function("to_rgba8/256x128", |b| b.iter(|| black_box(&image).to_rgba8()));

    group.finish();
}

criterion_group!(benches, bench_vector, bench_render);
criterion_main!(benches);
