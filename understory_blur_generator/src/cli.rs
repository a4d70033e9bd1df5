// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line options.

use std::path::{Path, PathBuf};

use clap::Parser;
use understory_blur_cpu::SuperBlurOptions;

#[derive(Parser, Debug)]
#[command(name = "super-blur-generator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pre-render blurred images for super-blur views", long_about = None)]
pub(crate) struct Cli {
    /// File name of the image that will be blurred
    #[arg(long)]
    pub(crate) input_image: PathBuf,

    /// Folder the blurred images are written to
    #[arg(long)]
    pub(crate) output_folder: PathBuf,

    /// Name of the blurred image
    #[arg(long, default_value = "blurred.png")]
    pub(crate) output_image: String,

    /// How many horizontal + vertical pass pairs to run
    #[arg(long, default_value_t = 1)]
    pub(crate) blur_level: u32,

    /// Size of the first framebuffer relative to its source, in (0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub(crate) downscale: f64,

    /// Size of the output relative to the input image
    #[arg(long, default_value_t = 1.0)]
    pub(crate) output_scale: f64,

    /// Fixed size of the first framebuffer, as WIDTHxHEIGHT (overrides --downscale)
    #[arg(long, value_parser = parse_size)]
    pub(crate) framebuffer_size: Option<(u32, u32)>,

    /// Kernel taps on each side of the centre
    #[arg(long, default_value_t = 8)]
    pub(crate) sample_radius: usize,

    /// Spread of the Gaussian bell curve, in sample steps
    #[arg(long, default_value_t = 1.5)]
    pub(crate) bell_curve_width: f64,

    /// Write this many progressively blurrier levels instead of a single image
    #[arg(long)]
    pub(crate) levels: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) fn blur_options(&self) -> SuperBlurOptions {
        SuperBlurOptions {
            sample_radius: self.sample_radius,
            bell_curve_width: self.bell_curve_width,
            blur_level: self.blur_level,
            downscale: self.downscale,
            output_scale: self.output_scale,
            framebuffer_size: self.framebuffer_size,
        }
    }

    pub(crate) fn output_path(&self) -> PathBuf {
        self.output_folder.join(&self.output_image)
    }

    /// Path of level `index`: `<stem>-<index>.<ext>` next to the single-image output.
    pub(crate) fn level_path(&self, index: usize) -> PathBuf {
        let name = Path::new(&self.output_image);
        let stem = name
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "blurred".to_owned());
        let file = match name.extension() {
            Some(ext) => format!("{stem}-{index}.{}", ext.to_string_lossy()),
            None => format!("{stem}-{index}"),
        };
        self.output_folder.join(file)
    }
}

/// Parse `WIDTHxHEIGHT`.
pub(crate) fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid dimension '{v}': {e}"))
    };
    let size = (parse(w)?, parse(h)?);
    if size.0 == 0 || size.1 == 0 {
        return Err(format!("framebuffer size must be non-zero, got '{s}'"));
    }
    Ok(size)
}
