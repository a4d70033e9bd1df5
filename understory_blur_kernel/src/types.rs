// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types: taps, configuration, pass direction, and uniform packing.

use alloc::vec::Vec;

use kurbo::{Size, Vec2};

/// One tap of a blur kernel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SampleEntry {
    /// Offset from the sampled texel, in normalized texture coordinates.
    ///
    /// Roughly within `[-1, 1]` for sensible kernels, but not clamped.
    pub offset: Vec2,
    /// Weight of this tap. The weights of a whole kernel sum to `1.0`.
    pub weight: f64,
}

/// Inputs for building a [`GaussianBlurKernel`](crate::GaussianBlurKernel).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KernelConfig {
    /// Number of taps on each side of the centre tap.
    pub sample_radius: usize,
    /// Spread of the bell curve, in sample steps.
    pub bell_curve_width: f64,
    /// Size in pixels of the texture the kernel samples.
    pub source_size: Size,
}

impl KernelConfig {
    /// Create a configuration for a `width`×`height` source texture.
    pub const fn new(sample_radius: usize, bell_curve_width: f64, width: f64, height: f64) -> Self {
        Self {
            sample_radius,
            bell_curve_width,
            source_size: Size::new(width, height),
        }
    }

    /// Number of taps a kernel built from this configuration holds: `2 * radius + 1`.
    pub const fn tap_count(&self) -> usize {
        2 * self.sample_radius + 1
    }
}

impl Default for KernelConfig {
    /// Eight taps either side of the centre with a width of `1.5`, over a 1×1 source.
    fn default() -> Self {
        Self::new(8, 1.5, 1.0, 1.0)
    }
}

/// Axis of a single separable blur pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlurDirection {
    /// Blur along x.
    Horizontal,
    /// Blur along y.
    Vertical,
}

impl BlurDirection {
    /// Both passes, in the order a full 2D blur runs them.
    pub const PASSES: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Unit mask applied componentwise to kernel offsets for this pass.
    pub const fn axis(self) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(1.0, 0.0),
            Self::Vertical => Vec2::new(0.0, 1.0),
        }
    }
}

/// Offsets and weights of one pass packed as `f32`, ready to upload as uniforms.
///
/// `offsets[i]` and `weights[i]` describe the same tap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KernelUniforms {
    /// Per-tap offsets, already masked to the pass axis.
    pub offsets: Vec<[f32; 2]>,
    /// Per-tap weights.
    pub weights: Vec<f32>,
}

impl KernelUniforms {
    /// Number of taps.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if there are no taps.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_count_is_odd() {
        assert_eq!(KernelConfig::new(0, 1.0, 4.0, 4.0).tap_count(), 1);
        assert_eq!(KernelConfig::new(2, 1.0, 4.0, 4.0).tap_count(), 5);
        assert_eq!(KernelConfig::default().tap_count(), 17);
    }

    #[test]
    fn axes_are_unit_masks() {
        assert_eq!(BlurDirection::Horizontal.axis(), Vec2::new(1.0, 0.0));
        assert_eq!(BlurDirection::Vertical.axis(), Vec2::new(0.0, 1.0));
        assert_eq!(
            BlurDirection::PASSES,
            [BlurDirection::Horizontal, BlurDirection::Vertical]
        );
    }
}
