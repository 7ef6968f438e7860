/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use asciipnm_core::{FormatKind, Raster};

/// Get the parent directory from which this
/// crate is compiled from
pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

/// A diagonal gradient covering the whole sample range,
/// bitmaps get a checkerboard instead
pub fn gradient(kind: FormatKind, width: usize, height: usize, max_value: u32) -> Raster {
    let channels = kind.num_channels();
    let span = ((width + height) * channels).max(1) as u64;

    let samples = (0..height)
        .flat_map(|y| (0..width * channels).map(move |x| (x, y)))
        .map(|(x, y)| match kind {
            FormatKind::Bitmap => ((x + y) % 2) as u32,
            _ => ((x + y * channels) as u64 * u64::from(max_value) / span) as u32
        })
        .collect();

    let max_value = if kind == FormatKind::Bitmap { 1 } else { max_value };

    Raster::new(kind, width, height, max_value, samples).unwrap()
}
