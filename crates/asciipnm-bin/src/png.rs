/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG output through zune-png
use asciipnm_core::{FormatKind, Raster};
use log::debug;
use zune_core::bit_depth::BitDepth;
use zune_core::options::EncoderOptions;
use zune_png::PngEncoder;

/// Scale raster samples to 8 bit pixels
///
/// Samples are mapped with `sample * 255 / max_value`, bitmaps are inverted
/// since a set bit is black.
pub fn to_eight_bit(raster: &Raster) -> Vec<u8> {
    let max = u64::from(raster.max_value().max(1));

    match raster.kind() {
        FormatKind::Bitmap => raster
            .samples()
            .iter()
            .map(|&sample| if sample == 0 { 255 } else { 0 })
            .collect(),
        FormatKind::Grayscale | FormatKind::Color => raster
            .samples()
            .iter()
            .map(|&sample| {
                let clamped = u64::from(sample).min(max);
                (clamped * 255 / max) as u8
            })
            .collect()
    }
}

/// Encode a raster into a PNG file
pub fn encode_png(raster: &Raster) -> Vec<u8> {
    let pixels = to_eight_bit(raster);

    let options = EncoderOptions::new(
        raster.width(),
        raster.height(),
        raster.kind().colorspace(),
        BitDepth::Eight
    );
    debug!(
        "Encoding {}x{} {} raster as png",
        raster.width(),
        raster.height(),
        raster.kind().name()
    );

    PngEncoder::new(&pixels, options).encode()
}
