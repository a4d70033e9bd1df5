// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CPU blur.
//!
//! Blur a synthetic checkerboard with the super-blur generator and report how much
//! contrast survives at each progressive level.
//!
//! Run:
//! - `cargo run -p understory_blur_demos --example cpu_blur`

use image::{Rgba, Rgba32FImage};
use understory_blur_cpu::{SuperBlurGenerator, SuperBlurOptions};

fn contrast(img: &Rgba32FImage) -> f32 {
    let (min, max) = img
        .pixels()
        .map(|p| p.0[0])
        .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    max - min
}

fn main() {
    // 8×8 pixel checker cells
    let input = Rgba32FImage::from_fn(128, 96, |x, y| {
        let v = if (x / 8 + y / 8) % 2 == 0 { 1.0 } else { 0.0 };
        Rgba([v, v, v, 1.0])
    });
    println!("input: {:?}, contrast {:.3}", input.dimensions(), contrast(&input));

    let generator = SuperBlurGenerator::new(SuperBlurOptions {
        sample_radius: 6,
        bell_curve_width: 2.0,
        ..Default::default()
    })
    .unwrap();

    let levels = generator.generate_levels(&input, 4).unwrap();
    for (i, level) in levels.iter().enumerate() {
        println!(
            "level {i}: {:?}, contrast {:.3}",
            level.dimensions(),
            contrast(level)
        );
    }
}
