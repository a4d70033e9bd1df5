// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_blur_kernel::{BlurDirection, GaussianBlurKernel};

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel_construct");
    for &radius in &[4usize, 8, 16, 64] {
        group.throughput(Throughput::Elements((2 * radius + 1) as u64));
        group.bench_function(format!("radius_{}", radius), |b| {
            b.iter(|| {
                let k = GaussianBlurKernel::new(black_box(radius), 1.5, 1920.0, 1080.0).unwrap();
                black_box(k.total_weight());
            });
        });
    }
    group.finish();
}

fn bench_regenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel_regenerate");
    for &radius in &[8usize, 64] {
        let mut k = GaussianBlurKernel::new(radius, 1.5, 1920.0, 1080.0).unwrap();
        group.throughput(Throughput::Elements((2 * radius + 1) as u64));
        group.bench_function(format!("in_place_radius_{}", radius), |b| {
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let w = if flip { 1280.0 } else { 1920.0 };
                k.generate(black_box(w), 1080.0).unwrap();
                black_box(k.entries());
            });
        });
        group.bench_function(format!("rebuild_radius_{}", radius), |b| {
            b.iter(|| {
                let next = k.regenerated(black_box(1280.0), 720.0).unwrap();
                black_box(next);
            });
        });
    }
    group.finish();
}

fn bench_uniforms(c: &mut Criterion) {
    let k = GaussianBlurKernel::new(16, 1.5, 1920.0, 1080.0).unwrap();
    c.bench_function("kernel_uniforms_radius_16", |b| {
        b.iter(|| {
            for direction in BlurDirection::PASSES {
                black_box(k.uniforms(black_box(direction)));
            }
        });
    });
}

criterion_group!(benches, bench_construct, bench_regenerate, bench_uniforms);
criterion_main!(benches);
