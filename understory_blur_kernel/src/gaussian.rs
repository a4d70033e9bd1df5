// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bell curve used to weight kernel taps.

use core::f64::consts::PI;

/// Smallest bell curve width a kernel will use.
///
/// A zero width makes every weight undefined, so narrower requests are raised
/// to this floor.
pub const MIN_BELL_CURVE_WIDTH: f64 = 0.001;

/// Raise `width` to at least [`MIN_BELL_CURVE_WIDTH`].
///
/// NaN maps to the floor as well.
#[inline]
pub fn clamp_bell_curve_width(width: f64) -> f64 {
    width.max(MIN_BELL_CURVE_WIDTH)
}

/// Unnormalized Gaussian weight at distance `x` (in sample steps) from the centre.
///
/// The leading factor is `1 / sqrt(2π·width)` rather than the textbook
/// `1 / sqrt(2π·width²)`. It is constant in `x` and cancels once a kernel is
/// normalized, so only the [`gaussian_shape`] matters.
#[inline]
pub fn gaussian_weight(x: f64, bell_curve_width: f64) -> f64 {
    (1.0 / sqrt(2.0 * PI * bell_curve_width)) * gaussian_shape(x, bell_curve_width)
}

/// The `exp(-x² / 2·width²)` term of [`gaussian_weight`], in `(0, 1]` for finite `x`
/// and a width at or above [`MIN_BELL_CURVE_WIDTH`].
///
/// It is exactly `1` at the centre, and tends to `1` everywhere as the width grows,
/// so a normalized kernel built from it never divides by zero.
#[inline]
pub fn gaussian_shape(x: f64, bell_curve_width: f64) -> f64 {
    let w = bell_curve_width;
    exp(-(x * x) / (2.0 * w * w))
}

#[cfg(feature = "std")]
fn sqrt(v: f64) -> f64 {
    v.sqrt()
}

#[cfg(feature = "std")]
fn exp(v: f64) -> f64 {
    v.exp()
}

#[cfg(not(feature = "std"))]
fn sqrt(v: f64) -> f64 {
    libm::sqrt(v)
}

#[cfg(not(feature = "std"))]
fn exp(v: f64) -> f64 {
    libm::exp(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_raises_small_and_nan_widths() {
        assert_eq!(clamp_bell_curve_width(0.0), MIN_BELL_CURVE_WIDTH);
        assert_eq!(clamp_bell_curve_width(-4.0), MIN_BELL_CURVE_WIDTH);
        assert_eq!(clamp_bell_curve_width(f64::NAN), MIN_BELL_CURVE_WIDTH);
        assert_eq!(clamp_bell_curve_width(2.5), 2.5);
    }

    #[test]
    fn weight_decays_with_distance() {
        let w0 = gaussian_weight(0.0, 1.5);
        let w1 = gaussian_weight(1.0, 1.5);
        let w2 = gaussian_weight(2.0, 1.5);
        assert!(w0 > w1 && w1 > w2, "weights must decrease: {w0} {w1} {w2}");
        assert_eq!(gaussian_weight(-1.0, 1.5), w1, "curve must be symmetric");
    }

    #[test]
    fn ratio_matches_plain_exponential() {
        // Only the shape matters once normalized.
        let width = 2.0;
        let ratio = gaussian_weight(3.0, width) / gaussian_weight(0.0, width);
        let expected = exp(-9.0 / (2.0 * width * width));
        assert!((ratio - expected).abs() < 1e-12, "ratio {ratio} vs {expected}");
    }

    #[test]
    fn shape_stays_finite_for_huge_widths() {
        for width in [1e200, 1e308, f64::MAX] {
            assert_eq!(gaussian_shape(0.0, width), 1.0, "width {width}");
            assert_eq!(gaussian_shape(16.0, width), 1.0, "width {width}");
        }
        // The leading factor underflows long before the shape does.
        assert_eq!(gaussian_weight(0.0, f64::MAX), 0.0);
    }

    #[test]
    fn centre_weight_uses_width_under_root() {
        let w = gaussian_weight(0.0, 4.0);
        assert!((w - 1.0 / sqrt(8.0 * PI)).abs() < 1e-12, "got {w}");
    }
}
