// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error conditions reported while building or reading a kernel.

use thiserror::Error;

/// Failure produced by [`GaussianBlurKernel`](crate::GaussianBlurKernel).
///
/// All of these are local and deterministic: retrying with the same inputs
/// yields the same error.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum KernelError {
    /// An argument has a value no kernel can be built from.
    ///
    /// A bell curve width below [`MIN_BELL_CURVE_WIDTH`](crate::MIN_BELL_CURVE_WIDTH)
    /// is clamped rather than rejected, and every finite width above it yields a
    /// usable kernel; only `+inf` ends up here.
    #[error("invalid argument `{name}`: {value}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A sample index outside `0..len` was requested.
    #[error("sample index {index} is out of range for a kernel of {len} taps")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of taps in the kernel.
        len: usize,
    },
    /// The source texture size would produce infinite or NaN offsets.
    #[error("degenerate source size {width}x{height}: both dimensions must be finite and positive")]
    DegenerateConfiguration {
        /// Requested source width in pixels.
        width: f64,
        /// Requested source height in pixels.
        height: f64,
    },
}
