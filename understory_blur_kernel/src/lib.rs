// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_blur_kernel --heading-base-level=0

//! Understory Blur Kernel: sample offsets and weights for separable Gaussian blur.
//!
//! A separable blur approximates a 2D Gaussian convolution with two 1D passes,
//! horizontal then vertical, that share one kernel. This crate precomputes that kernel:
//! an ordered list of taps, each an offset in normalized texture coordinates plus a
//! weight, ready to upload as shader uniforms or to drive a CPU pass.
//!
//! - Taps come in mirrored pairs around a centre tap; weights follow a bell curve and
//!   are normalized to sum to `1.0`, so a blur preserves overall brightness.
//! - Offsets are biased by half a texel. A bilinear sampler then averages two adjacent
//!   texels per fetch, halving the fetches needed to cover the same support.
//! - The x and y components of each offset are scaled by the source width and height,
//!   so one kernel serves both passes; [`BlurDirection`] masks the unused axis.
//!
//! It does not render anything. The host owns textures and passes, and calls
//! [`GaussianBlurKernel::generate`] again when its source texture is resized.
//!
//! ## API overview
//!
//! - [`GaussianBlurKernel`]: owns the taps; construct, regenerate, read.
//! - [`SampleEntry`]: one tap (`offset`, `weight`).
//! - [`KernelConfig`]: construction inputs with sensible defaults.
//! - [`BlurDirection`] and [`KernelUniforms`]: per-pass views and `f32` packing.
//! - [`KernelError`]: invalid arguments, out-of-range reads, degenerate source sizes.
//!
//! # Example
//!
//! ```rust
//! use understory_blur_kernel::{BlurDirection, GaussianBlurKernel};
//!
//! // Two taps either side of the centre, over a 256×256 texture.
//! let mut kernel = GaussianBlurKernel::new(2, 1.0, 256.0, 256.0).unwrap();
//! assert_eq!(kernel.len(), 5);
//! assert_eq!(kernel.offset(1).unwrap().x, 1.5 / 256.0);
//! assert!((kernel.total_weight() - 1.0).abs() < 1e-9);
//!
//! // The texture was resized: regenerate in place.
//! kernel.generate(512.0, 256.0).unwrap();
//! assert_eq!(kernel.offset(1).unwrap().x, 1.5 / 512.0);
//!
//! // Upload the horizontal pass.
//! let uniforms = kernel.uniforms(BlurDirection::Horizontal);
//! assert_eq!(uniforms.offsets[1][1], 0.0);
//!
//! // Reads are bounds-checked.
//! assert!(kernel.weight(5).is_err());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: `no_std` floating-point math through `libm`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("understory_blur_kernel requires either the `std` or `libm` feature");

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod gaussian;
pub mod kernel;
pub mod types;

pub use error::KernelError;
pub use gaussian::{MIN_BELL_CURVE_WIDTH, clamp_bell_curve_width, gaussian_shape, gaussian_weight};
pub use kernel::GaussianBlurKernel;
pub use types::{BlurDirection, KernelConfig, KernelUniforms, SampleEntry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernels_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GaussianBlurKernel>();
        assert_send_sync::<KernelError>();
    }

    #[test]
    fn default_config_builds_seventeen_taps() {
        let config = KernelConfig {
            source_size: kurbo::Size::new(480.0, 800.0),
            ..Default::default()
        };
        let kernel = GaussianBlurKernel::from_config(&config).unwrap();
        assert_eq!(kernel.len(), 17);
        assert_eq!(kernel.bell_curve_width(), 1.5);
        assert!((kernel.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn both_passes_share_weights() {
        let kernel = GaussianBlurKernel::new(3, 1.0, 64.0, 32.0).unwrap();
        let [h, v] = BlurDirection::PASSES.map(|d| kernel.uniforms(d));
        assert_eq!(h.weights, v.weights);
        assert_ne!(h.offsets, v.offsets);
    }
}
