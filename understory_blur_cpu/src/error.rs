// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for CPU blur passes.

use thiserror::Error;
use understory_blur_kernel::KernelError;

/// Failure while running a blur pass or the super-blur generator.
#[derive(Debug, Error)]
pub enum BlurError {
    /// Building or reading a kernel failed.
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// The source image has no pixels.
    #[error("source image is empty")]
    EmptyImage,

    /// A pass was asked to render into a target with no pixels.
    #[error("render target {width}x{height} is empty")]
    EmptyTarget {
        /// Requested target width.
        width: u32,
        /// Requested target height.
        height: u32,
    },

    /// A render target has more than [`MAX_TARGET_PIXELS`](crate::MAX_TARGET_PIXELS) pixels.
    #[error("render target {width}x{height} is too large")]
    TargetTooLarge {
        /// Requested target width.
        width: u32,
        /// Requested target height.
        height: u32,
    },

    /// A generator option is out of range.
    #[error("invalid option `{name}`: {value}")]
    InvalidOption {
        /// Option name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The kernel was generated for a different source size than the image being sampled.
    #[error(
        "kernel generated for a {kernel_width}x{kernel_height} source but the image is {image_width}x{image_height}"
    )]
    KernelSizeMismatch {
        /// Source width the kernel was generated for.
        kernel_width: f64,
        /// Source height the kernel was generated for.
        kernel_height: f64,
        /// Actual image width.
        image_width: u32,
        /// Actual image height.
        image_height: u32,
    },
}

/// Result type for blur operations.
pub type Result<T> = std::result::Result<T, BlurError>;
