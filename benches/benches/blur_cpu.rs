// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use image::{Rgba, Rgba32FImage};
use understory_blur_cpu::{SuperBlurGenerator, SuperBlurOptions, blur_pass};
use understory_blur_kernel::{BlurDirection, GaussianBlurKernel};

fn gen_checker(w: u32, h: u32, cell: u32) -> Rgba32FImage {
    Rgba32FImage::from_fn(w, h, |x, y| {
        let v = if (x / cell + y / cell) % 2 == 0 { 1.0 } else { 0.0 };
        Rgba([v, v, v, 1.0])
    })
}

fn bench_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_pass");
    for &(w, h) in &[(128u32, 128u32), (480, 320)] {
        let img = gen_checker(w, h, 8);
        let kernel = GaussianBlurKernel::new(8, 1.5, f64::from(w), f64::from(h)).unwrap();
        group.throughput(Throughput::Elements(u64::from(w * h)));
        for direction in BlurDirection::PASSES {
            group.bench_function(format!("{:?}_{}x{}", direction, w, h), |b| {
                b.iter(|| black_box(blur_pass(&img, &kernel, direction, (w, h)).unwrap()));
            });
        }
    }
    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("super_blur");
    let img = gen_checker(320, 240, 16);
    group.throughput(Throughput::Elements(320 * 240));
    for &level in &[1u32, 3] {
        let generator = SuperBlurGenerator::new(SuperBlurOptions {
            blur_level: level,
            ..Default::default()
        })
        .unwrap();
        group.bench_function(format!("level_{}", level), |b| {
            b.iter_batched(
                || img.clone(),
                |input| black_box(generator.generate(&input).unwrap()),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pass, bench_generator);
criterion_main!(benches);
