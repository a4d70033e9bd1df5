// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blur kernel basics.
//!
//! Build a kernel, print its taps, regenerate it for a resized texture, and pack
//! per-pass uniforms.
//!
//! Run:
//! - `cargo run -p understory_blur_demos --example kernel_basics`

use understory_blur_kernel::{BlurDirection, GaussianBlurKernel};

fn main() {
    // Two taps either side of the centre over a 256×256 texture
    let mut kernel = GaussianBlurKernel::new(2, 1.0, 256.0, 256.0).unwrap();
    for (i, tap) in kernel.entries().iter().enumerate() {
        println!(
            "tap {i}: offset=({:+.6}, {:+.6}) weight={:.6}",
            tap.offset.x, tap.offset.y, tap.weight
        );
    }
    println!("total weight: {:.9}", kernel.total_weight());

    // The texture became wider: x offsets shrink, y offsets and weights stay
    kernel.generate(512.0, 256.0).unwrap();
    println!("after resize, tap 1 offset: {:?}", kernel.offset(1).unwrap());

    // What a shader would receive for each pass
    for direction in BlurDirection::PASSES {
        let uniforms = kernel.uniforms(direction);
        println!("{direction:?} offsets: {:?}", uniforms.offsets);
    }

    // Reads past the end fail instead of returning garbage
    let err = kernel.weight(kernel.len()).unwrap_err();
    println!("out of range: {err}");
}
