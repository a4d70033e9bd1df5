// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-pass super-blur generator and progressive blur levels.

use image::Rgba32FImage;
use understory_blur_kernel::{BlurDirection, GaussianBlurKernel};

use crate::error::{BlurError, Result};
use crate::pass::{blur_pass, check_target};

/// Settings for [`SuperBlurGenerator`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SuperBlurOptions {
    /// Taps on each side of the centre tap.
    pub sample_radius: usize,
    /// Spread of the bell curve, in sample steps.
    pub bell_curve_width: f64,
    /// How many horizontal + vertical pass pairs to run. At least `1`.
    pub blur_level: u32,
    /// Size of the intermediate framebuffer relative to the pass source, in `(0, 1]`.
    ///
    /// Rendering the horizontal pass into a smaller framebuffer blurs further for free.
    pub downscale: f64,
    /// Size of the output relative to the input. Must be positive.
    pub output_scale: f64,
    /// Fixed intermediate framebuffer size; overrides `downscale` when set.
    pub framebuffer_size: Option<(u32, u32)>,
}

impl Default for SuperBlurOptions {
    fn default() -> Self {
        Self {
            sample_radius: 8,
            bell_curve_width: 1.5,
            blur_level: 1,
            downscale: 0.5,
            output_scale: 1.0,
            framebuffer_size: None,
        }
    }
}

/// Blurs whole images with a horizontal pass into a reduced framebuffer followed by
/// a vertical pass into the output.
///
/// The kernel is regenerated for the size of each pass's source, as a GPU host would
/// do when the bound texture changes.
#[derive(Clone, Debug)]
pub struct SuperBlurGenerator {
    options: SuperBlurOptions,
    kernel: GaussianBlurKernel,
}

impl SuperBlurGenerator {
    /// Validate `options` and prepare the kernel.
    ///
    /// # Errors
    ///
    /// - [`BlurError::InvalidOption`] for an out-of-range option.
    /// - [`BlurError::TargetTooLarge`] if `framebuffer_size` exceeds
    ///   [`MAX_TARGET_PIXELS`](crate::MAX_TARGET_PIXELS).
    /// - [`BlurError::Kernel`] if no kernel can be built from the sampling settings.
    pub fn new(options: SuperBlurOptions) -> Result<Self> {
        if options.blur_level == 0 {
            return Err(BlurError::InvalidOption {
                name: "blur_level",
                value: 0.0,
            });
        }
        if !(options.downscale.is_finite() && options.downscale > 0.0 && options.downscale <= 1.0)
        {
            return Err(BlurError::InvalidOption {
                name: "downscale",
                value: options.downscale,
            });
        }
        if !(options.output_scale.is_finite() && options.output_scale > 0.0) {
            return Err(BlurError::InvalidOption {
                name: "output_scale",
                value: options.output_scale,
            });
        }
        if let Some((w, h)) = options.framebuffer_size {
            if w == 0 || h == 0 {
                return Err(BlurError::InvalidOption {
                    name: "framebuffer_size",
                    value: f64::from(w.min(h)),
                });
            }
            check_target((w, h))?;
        }
        // Placeholder source size; every pass regenerates for its real source.
        let kernel =
            GaussianBlurKernel::new(options.sample_radius, options.bell_curve_width, 1.0, 1.0)?;
        Ok(Self { options, kernel })
    }

    /// The validated options.
    pub fn options(&self) -> &SuperBlurOptions {
        &self.options
    }

    /// Blur `input` `blur_level` times and return an image scaled by `output_scale`.
    ///
    /// # Errors
    ///
    /// [`BlurError::TargetTooLarge`] if the scaled output exceeds
    /// [`MAX_TARGET_PIXELS`](crate::MAX_TARGET_PIXELS); nothing is rendered then.
    pub fn generate(&self, input: &Rgba32FImage) -> Result<Rgba32FImage> {
        let output = scaled(input.dimensions(), self.options.output_scale);
        check_target(output)?;
        let mut current: Option<Rgba32FImage> = None;
        for level in 1..=self.options.blur_level {
            let src = current.as_ref().unwrap_or(input);
            let next = self.blur_once(src, output)?;
            tracing::debug!(level, width = output.0, height = output.1, "blur level done");
            current = Some(next);
        }
        Ok(current.unwrap_or_else(|| input.clone()))
    }

    /// Produce `count` progressively blurrier images.
    ///
    /// The first level is [`generate`](Self::generate) of `input`. Each later level
    /// blurs the previous one into half its resolution.
    pub fn generate_levels(
        &self,
        input: &Rgba32FImage,
        count: usize,
    ) -> Result<Vec<Rgba32FImage>> {
        let mut levels: Vec<Rgba32FImage> = Vec::with_capacity(count);
        for _ in 0..count {
            let next = match levels.last() {
                None => self.generate(input)?,
                Some(prev) => self.blur_once(prev, scaled(prev.dimensions(), 0.5))?,
            };
            levels.push(next);
        }
        Ok(levels)
    }

    fn blur_once(&self, src: &Rgba32FImage, output: (u32, u32)) -> Result<Rgba32FImage> {
        let framebuffer = self
            .options
            .framebuffer_size
            .unwrap_or_else(|| scaled(src.dimensions(), self.options.downscale));

        let kernel = self.kernel_for(src)?;
        let intermediate = blur_pass(src, &kernel, BlurDirection::Horizontal, framebuffer)?;

        let kernel = self.kernel_for(&intermediate)?;
        blur_pass(&intermediate, &kernel, BlurDirection::Vertical, output)
    }

    fn kernel_for(&self, src: &Rgba32FImage) -> Result<GaussianBlurKernel> {
        let (w, h) = src.dimensions();
        if w == 0 || h == 0 {
            return Err(BlurError::EmptyImage);
        }
        Ok(self.kernel.regenerated(f64::from(w), f64::from(h))?)
    }
}

/// Scale pixel dimensions, rounding and keeping at least one pixel per axis.
fn scaled((w, h): (u32, u32), factor: f64) -> (u32, u32) {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Factors are validated positive and finite; results saturate at u32 bounds."
    )]
    let scale = |v: u32| ((f64::from(v) * factor).round() as u32).max(1);
    (scale(w), scale(h))
}
