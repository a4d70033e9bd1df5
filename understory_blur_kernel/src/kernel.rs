// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The kernel generator: [`GaussianBlurKernel`].

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Size, Vec2};

use crate::error::KernelError;
use crate::gaussian::{MIN_BELL_CURVE_WIDTH, clamp_bell_curve_width, gaussian_shape};
use crate::types::{BlurDirection, KernelConfig, KernelUniforms, SampleEntry};

/// Symmetric sample offsets and normalized weights for one separable Gaussian blur pass.
///
/// The kernel holds `2 * sample_radius + 1` taps. Index `0` is the centre tap with a
/// zero offset; each step `i` in `1..=sample_radius` fills the pair `2i - 1` (positive
/// offset) and `2i` (negative offset) with the same weight.
///
/// Offsets are biased by half a texel so that a bilinear sampler blends two source
/// texels per fetch. Both components derive from the same pixel distance, scaled by
/// the source width and height respectively, so one kernel drives the horizontal and
/// the vertical pass (see [`directional_entries`](Self::directional_entries)).
///
/// Storage is sized once at construction. [`generate`](Self::generate) rewrites it in
/// place when the source texture is resized; [`regenerated`](Self::regenerated) builds
/// a fresh kernel instead, for callers that publish kernels to other threads.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianBlurKernel {
    sample_radius: usize,
    bell_curve_width: f64,
    source_size: Size,
    entries: Vec<SampleEntry>,
}

impl GaussianBlurKernel {
    /// Build a kernel with `sample_radius` taps on each side of the centre, for a
    /// `width`×`height` source texture.
    ///
    /// A `bell_curve_width` below [`MIN_BELL_CURVE_WIDTH`] (including zero, negative
    /// values and NaN) is raised to that floor and reported with a warning.
    ///
    /// # Errors
    ///
    /// - [`KernelError::DegenerateConfiguration`] if either dimension is not finite and positive.
    /// - [`KernelError::InvalidArgument`] if `bell_curve_width` is `+inf`.
    pub fn new(
        sample_radius: usize,
        bell_curve_width: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, KernelError> {
        let source_size = validate_source_size(width, height)?;
        let mut kernel = Self {
            sample_radius,
            bell_curve_width: MIN_BELL_CURVE_WIDTH,
            source_size,
            entries: vec![SampleEntry::default(); 2 * sample_radius + 1],
        };
        kernel.store_bell_curve_width(bell_curve_width)?;
        kernel.fill();
        Ok(kernel)
    }

    /// Build a kernel from a [`KernelConfig`]. See [`new`](Self::new).
    pub fn from_config(config: &KernelConfig) -> Result<Self, KernelError> {
        Self::new(
            config.sample_radius,
            config.bell_curve_width,
            config.source_size.width,
            config.source_size.height,
        )
    }

    /// Recompute offsets and weights for a (possibly new) source size.
    ///
    /// Storage is reused; the tap count never changes. Regenerating with the same size
    /// yields bit-identical output.
    ///
    /// # Errors
    ///
    /// [`KernelError::DegenerateConfiguration`] if either dimension is not finite and
    /// positive. The kernel is left untouched in that case.
    pub fn generate(&mut self, width: f64, height: f64) -> Result<(), KernelError> {
        self.source_size = validate_source_size(width, height)?;
        self.fill();
        Ok(())
    }

    /// Return a new kernel for a different source size, leaving `self` as is.
    ///
    /// This is the rebuild-and-swap form of [`generate`](Self::generate): readers on
    /// other threads keep their kernel while the replacement is prepared.
    pub fn regenerated(&self, width: f64, height: f64) -> Result<Self, KernelError> {
        let mut next = self.clone();
        next.generate(width, height)?;
        Ok(next)
    }

    /// Change the bell curve width and regenerate for the current source size.
    ///
    /// Returns the width actually applied, after clamping to [`MIN_BELL_CURVE_WIDTH`].
    ///
    /// # Errors
    ///
    /// [`KernelError::InvalidArgument`] if `width` is `+inf`; the kernel is unchanged.
    pub fn set_bell_curve_width(&mut self, width: f64) -> Result<f64, KernelError> {
        self.store_bell_curve_width(width)?;
        self.fill();
        Ok(self.bell_curve_width)
    }

    /// Offset of tap `index`, in normalized texture coordinates.
    pub fn offset(&self, index: usize) -> Result<Vec2, KernelError> {
        self.entry(index).map(|e| e.offset)
    }

    /// Normalized weight of tap `index`.
    pub fn weight(&self, index: usize) -> Result<f64, KernelError> {
        self.entry(index).map(|e| e.weight)
    }

    /// Tap `index`.
    ///
    /// # Errors
    ///
    /// [`KernelError::IndexOutOfRange`] unless `index < self.len()`.
    pub fn entry(&self, index: usize) -> Result<SampleEntry, KernelError> {
        self.entries
            .get(index)
            .copied()
            .ok_or(KernelError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// All taps, centre first.
    pub fn entries(&self) -> &[SampleEntry] {
        &self.entries
    }

    /// Number of taps: `2 * sample_radius + 1`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a kernel holds at least its centre tap.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Taps on each side of the centre.
    pub fn sample_radius(&self) -> usize {
        self.sample_radius
    }

    /// Bell curve width in use, after clamping.
    pub fn bell_curve_width(&self) -> f64 {
        self.bell_curve_width
    }

    /// Source texture size the offsets were generated for.
    pub fn source_size(&self) -> Size {
        self.source_size
    }

    /// Sum of all weights. `1.0` up to rounding.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Taps with offsets masked to the axis of `direction`.
    ///
    /// A horizontal pass keeps only the x offsets and a vertical pass only the y
    /// offsets; weights are unchanged.
    pub fn directional_entries(
        &self,
        direction: BlurDirection,
    ) -> impl ExactSizeIterator<Item = SampleEntry> + '_ {
        let axis = direction.axis();
        self.entries.iter().map(move |e| SampleEntry {
            offset: Vec2::new(e.offset.x * axis.x, e.offset.y * axis.y),
            weight: e.weight,
        })
    }

    /// Pack [`directional_entries`](Self::directional_entries) as `f32` uniforms.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Shader uniforms are single precision."
    )]
    pub fn uniforms(&self, direction: BlurDirection) -> KernelUniforms {
        let mut uniforms = KernelUniforms {
            offsets: Vec::with_capacity(self.len()),
            weights: Vec::with_capacity(self.len()),
        };
        for e in self.directional_entries(direction) {
            uniforms.offsets.push([e.offset.x as f32, e.offset.y as f32]);
            uniforms.weights.push(e.weight as f32);
        }
        uniforms
    }

    fn store_bell_curve_width(&mut self, requested: f64) -> Result<(), KernelError> {
        if requested == f64::INFINITY {
            return Err(KernelError::InvalidArgument {
                name: "bell_curve_width",
                value: requested,
            });
        }
        let applied = clamp_bell_curve_width(requested);
        if applied != requested {
            tracing::warn!(
                requested,
                applied,
                "bell curve width below the minimum; clamped"
            );
        }
        self.bell_curve_width = applied;
        Ok(())
    }

    fn fill(&mut self) {
        let bell = self.bell_curve_width;
        let Size { width, height } = self.source_size;

        // Shape only; the density's leading constant cancels below.
        let centre = gaussian_shape(0.0, bell);
        self.entries[0] = SampleEntry {
            offset: Vec2::ZERO,
            weight: centre,
        };
        let mut total = centre;

        for i in 0..self.sample_radius {
            let weight = gaussian_shape((i + 1) as f64, bell);
            total += weight * 2.0;

            // Land between two texels so bilinear filtering averages both in one fetch.
            let ofs = (i * 2) as f64 + 1.5;
            let offset = Vec2::new(ofs / width, ofs / height);

            self.entries[2 * i + 1] = SampleEntry { offset, weight };
            self.entries[2 * i + 2] = SampleEntry {
                offset: -offset,
                weight,
            };
        }

        for e in &mut self.entries {
            e.weight /= total;
        }

        tracing::trace!(
            taps = self.entries.len(),
            width,
            height,
            bell,
            "generated blur kernel"
        );
    }
}

fn validate_source_size(width: f64, height: f64) -> Result<Size, KernelError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(Size::new(width, height))
    } else {
        Err(KernelError::DegenerateConfiguration { width, height })
    }
}
