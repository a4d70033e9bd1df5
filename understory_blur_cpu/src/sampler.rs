// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture sampling with the addressing and filtering a GPU would apply.
//!
//! Coordinates are normalized: `(0, 0)` is the top-left corner of the image and
//! `(1, 1)` the bottom-right one. Texel `i` has its centre at `(i + 0.5) / size`.
//! Lookups are bilinearly filtered and clamped to the edge, which is what the
//! half-texel bias of [`GaussianBlurKernel`](understory_blur_kernel::GaussianBlurKernel)
//! offsets is designed for.

use image::{DynamicImage, Rgba, Rgba32FImage, RgbaImage};
use kurbo::Point;

/// Sample `image` at normalized coordinate `uv` with bilinear filtering and
/// clamp-to-edge addressing.
///
/// `image` must not be empty.
pub fn sample_bilinear(image: &Rgba32FImage, uv: Point) -> Rgba<f32> {
    let (width, height) = image.dimensions();
    let (x0, x1, fx) = axis_taps(uv.x, width);
    let (y0, y1, fy) = axis_taps(uv.y, height);

    let p00 = image.get_pixel(x0, y0).0;
    let p10 = image.get_pixel(x1, y0).0;
    let p01 = image.get_pixel(x0, y1).0;
    let p11 = image.get_pixel(x1, y1).0;

    let mut out = [0.0_f32; 4];
    for c in 0..4 {
        let top = p00[c] + (p10[c] - p00[c]) * fx;
        let bottom = p01[c] + (p11[c] - p01[c]) * fx;
        out[c] = top + (bottom - top) * fy;
    }
    Rgba(out)
}

/// Texel indices on either side of `coord` and the blend factor between them.
fn axis_taps(coord: f64, size: u32) -> (u32, u32, f32) {
    let texel = coord * f64::from(size) - 0.5;
    let base = texel.floor();
    let last = i64::from(size) - 1;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Coordinates are clamped to the image right after the cast."
    )]
    let i0 = base as i64;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Clamped to 0..size, which fits in u32."
    )]
    let clamp = |i: i64| i.clamp(0, last) as u32;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Blend factors are in [0, 1)."
    )]
    let frac = (texel - base) as f32;
    (clamp(i0), clamp(i0 + 1), frac)
}

/// Convert any decoded image into the floating-point working format.
pub fn to_rgba32f(image: &DynamicImage) -> Rgba32FImage {
    image.to_rgba32f()
}

/// Quantize a working image back to 8-bit RGBA for encoding.
pub fn into_rgba8(image: Rgba32FImage) -> RgbaImage {
    DynamicImage::ImageRgba32F(image).into_rgba8()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32) -> Rgba32FImage {
        Rgba32FImage::from_fn(width, 1, |x, _| {
            let v = x as f32;
            Rgba([v, v, v, 1.0])
        })
    }

    #[test]
    fn texel_centres_return_the_texel() {
        let img = ramp(4);
        for x in 0..4 {
            let uv = Point::new((f64::from(x) + 0.5) / 4.0, 0.5);
            assert_eq!(sample_bilinear(&img, uv).0[0], x as f32);
        }
    }

    #[test]
    fn half_texel_bias_averages_two_texels() {
        // Centre of texel 0 plus the kernel's first offset (1.5 texels)
        // lands between texels 1 and 2.
        let img = ramp(8);
        let uv = Point::new(0.5 / 8.0 + 1.5 / 8.0, 0.5);
        assert_eq!(sample_bilinear(&img, uv).0[0], 1.5);
    }

    #[test]
    fn lookups_clamp_to_edge() {
        let img = ramp(4);
        assert_eq!(sample_bilinear(&img, Point::new(-3.0, 0.5)).0[0], 0.0);
        assert_eq!(sample_bilinear(&img, Point::new(7.0, 0.5)).0[0], 3.0);
        assert_eq!(sample_bilinear(&img, Point::new(0.5 / 4.0, -2.0)).0[0], 0.0);
    }

    #[test]
    fn single_texel_image_is_constant() {
        let img = Rgba32FImage::from_pixel(1, 1, Rgba([0.25, 0.5, 0.75, 1.0]));
        for uv in [Point::new(0.0, 0.0), Point::new(0.9, 0.1), Point::new(5.0, -5.0)] {
            assert_eq!(sample_bilinear(&img, uv), Rgba([0.25, 0.5, 0.75, 1.0]));
        }
    }

    #[test]
    fn conversion_round_trips_extremes() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let float = to_rgba32f(&DynamicImage::ImageRgba8(img.clone()));
        assert_eq!(float.get_pixel(1, 0).0, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(into_rgba8(float), img);
    }
}
