// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Super blur generator.
//!
//! Loads an image, blurs it with a two-pass Gaussian kernel and writes the result,
//! optionally as a series of progressively blurrier levels.
//!
//! Run:
//! - `cargo run -p understory_blur_generator -- --input-image in.png --output-folder out`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use image::Rgba32FImage;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use understory_blur_cpu::{SuperBlurGenerator, into_rgba8, to_rgba32f};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let generator =
        SuperBlurGenerator::new(cli.blur_options()).context("invalid blur options")?;

    let input = image::open(&cli.input_image)
        .with_context(|| format!("failed to open '{}'", cli.input_image.display()))?;
    info!(
        "Blurring {} ({}x{})",
        cli.input_image.display(),
        input.width(),
        input.height()
    );
    let input = to_rgba32f(&input);

    fs::create_dir_all(&cli.output_folder).with_context(|| {
        format!(
            "failed to create output folder '{}'",
            cli.output_folder.display()
        )
    })?;

    match cli.levels {
        None => {
            let blurred = generator.generate(&input)?;
            save(blurred, &cli.output_path())?;
        }
        Some(count) => {
            let levels = generator.generate_levels(&input, count)?;
            for (index, level) in levels.into_iter().enumerate() {
                save(level, &cli.level_path(index))?;
            }
        }
    }
    Ok(())
}

fn save(image: Rgba32FImage, path: &Path) -> Result<()> {
    let (width, height) = image.dimensions();
    debug!(width, height, path = %path.display(), "encoding");
    into_rgba8(image)
        .save(path)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    info!("Wrote {} ({}x{})", path.display(), width, height);
    Ok(())
}
