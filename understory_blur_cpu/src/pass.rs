// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single separable blur pass.

use image::{Rgba, Rgba32FImage};
use kurbo::{Point, Size};
use understory_blur_kernel::{BlurDirection, GaussianBlurKernel, SampleEntry};

use crate::error::{BlurError, Result};
use crate::sampler::sample_bilinear;

/// Largest render target, in pixels, a pass will allocate.
///
/// At four `f32` channels this is 4 GiB.
pub const MAX_TARGET_PIXELS: u64 = 1 << 28;

/// Render `src` into a `target`-sized image, blurring along `direction`.
///
/// This is a full-screen textured quad: each destination texel maps to a normalized
/// coordinate `uv` in `src` and evaluates `Σ weight[i] · sample(src, uv + offset[i])`
/// over the kernel's taps, with offsets masked to the pass axis. A target smaller than
/// `src` also downsamples, which adds some blur of its own through bilinear filtering.
///
/// # Errors
///
/// - [`BlurError::EmptyImage`] if `src` has no pixels.
/// - [`BlurError::EmptyTarget`] if either target dimension is zero.
/// - [`BlurError::TargetTooLarge`] if the target exceeds [`MAX_TARGET_PIXELS`].
/// - [`BlurError::KernelSizeMismatch`] unless `kernel` was generated for `src`'s size.
pub fn blur_pass(
    src: &Rgba32FImage,
    kernel: &GaussianBlurKernel,
    direction: BlurDirection,
    target: (u32, u32),
) -> Result<Rgba32FImage> {
    let (src_w, src_h) = src.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(BlurError::EmptyImage);
    }
    let (dst_w, dst_h) = target;
    check_target(target)?;
    let expected = Size::new(f64::from(src_w), f64::from(src_h));
    if kernel.source_size() != expected {
        let Size { width, height } = kernel.source_size();
        return Err(BlurError::KernelSizeMismatch {
            kernel_width: width,
            kernel_height: height,
            image_width: src_w,
            image_height: src_h,
        });
    }

    let taps: Vec<SampleEntry> = kernel.directional_entries(direction).collect();
    tracing::debug!(
        ?direction,
        taps = taps.len(),
        src_w,
        src_h,
        dst_w,
        dst_h,
        "blur pass"
    );

    let inv_w = 1.0 / f64::from(dst_w);
    let inv_h = 1.0 / f64::from(dst_h);
    Ok(Rgba32FImage::from_fn(dst_w, dst_h, |x, y| {
        let uv = Point::new(
            (f64::from(x) + 0.5) * inv_w,
            (f64::from(y) + 0.5) * inv_h,
        );
        let mut acc = [0.0_f64; 4];
        for tap in &taps {
            let texel = sample_bilinear(src, uv + tap.offset);
            for (a, c) in acc.iter_mut().zip(texel.0) {
                *a += tap.weight * f64::from(c);
            }
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Accumulated in f64, stored back at image precision."
        )]
        let texel = acc.map(|a| a as f32);
        Rgba(texel)
    }))
}

/// Reject targets that are empty or larger than [`MAX_TARGET_PIXELS`].
pub(crate) fn check_target((width, height): (u32, u32)) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(BlurError::EmptyTarget { width, height });
    }
    if u64::from(width) * u64::from(height) > MAX_TARGET_PIXELS {
        return Err(BlurError::TargetTooLarge { width, height });
    }
    Ok(())
}

/// Rescale `src` to `target` with plain bilinear filtering and no blur taps.
pub fn resample(src: &Rgba32FImage, target: (u32, u32)) -> Result<Rgba32FImage> {
    let (w, h) = src.dimensions();
    let identity = GaussianBlurKernel::new(0, 1.0, f64::from(w), f64::from(h))
        .map_err(|_| BlurError::EmptyImage)?;
    blur_pass(src, &identity, BlurDirection::Horizontal, target)
}
