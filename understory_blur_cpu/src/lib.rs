// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Blur CPU: a reference renderer for [`understory_blur_kernel`] kernels.
//!
//! A GPU host uploads a kernel's offsets and weights as uniforms and draws two
//! full-screen quads. This crate does the same work on the CPU, with the sampling
//! semantics the kernel assumes: normalized coordinates, bilinear filtering and
//! clamp-to-edge addressing.
//!
//! - [`sample_bilinear`]: one filtered texture fetch.
//! - [`blur_pass`]: one separable pass into a render target of any size.
//! - [`SuperBlurGenerator`]: horizontal pass into a reduced framebuffer, then vertical
//!   pass into the output, repeated per blur level; also builds progressive levels.
//!
//! Images are [`image::Rgba32FImage`]; use [`to_rgba32f`] and [`into_rgba8`] at the edges.
//!
//! # Example
//!
//! ```rust
//! use image::{Rgba, Rgba32FImage};
//! use understory_blur_cpu::{SuperBlurGenerator, SuperBlurOptions};
//!
//! let input = Rgba32FImage::from_fn(64, 48, |x, _| {
//!     let v = if x < 32 { 0.0 } else { 1.0 };
//!     Rgba([v, v, v, 1.0])
//! });
//!
//! let generator = SuperBlurGenerator::new(SuperBlurOptions::default()).unwrap();
//! let blurred = generator.generate(&input).unwrap();
//! assert_eq!(blurred.dimensions(), (64, 48));
//!
//! // The hard edge is now a ramp.
//! let mid = blurred.get_pixel(32, 24).0[0];
//! assert!(mid > 0.0 && mid < 1.0);
//! ```

pub mod error;
pub mod generator;
pub mod pass;
pub mod sampler;

pub use error::{BlurError, Result};
pub use generator::{SuperBlurGenerator, SuperBlurOptions};
pub use pass::{MAX_TARGET_PIXELS, blur_pass, resample};
pub use sampler::{into_rgba8, sample_bilinear, to_rgba32f};
