/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_core::Raster;
use log::trace;

use crate::errors::ProcsErrors;
use crate::traits::RasterOperation;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResizeMethod {
    /// Every output pixel copies the closest input pixel
    Nearest
}

/// Scale a raster up by an integer factor
///
/// # Arguments
/// - raster: Source raster, any kind
/// - factor: Scale factor for both axes, must be at least 1
/// - method: The resizing method to use
///
/// # Returns
/// A raster of `width * factor` by `height * factor` pixels with the same kind
/// and max value.
///
/// # Errors
/// If `factor` is zero, or the enlarged size does not fit in memory
pub fn resize(raster: &Raster, factor: usize, method: ResizeMethod) -> Result<Raster, ProcsErrors> {
    if factor == 0 {
        return Err(ProcsErrors::InvalidArgument("resize factor must be at least 1"));
    }
    let dimensions = raster
        .width()
        .checked_mul(factor)
        .zip(raster.height().checked_mul(factor))
        .filter(|(w, h)| {
            w.checked_mul(*h)
                .and_then(|x| x.checked_mul(raster.num_channels()))
                .is_some()
        });

    let Some((out_width, out_height)) = dimensions else {
        return Err(ProcsErrors::InvalidArgument(
            "resize factor is too large for the image"
        ));
    };
    match method {
        ResizeMethod::Nearest => Ok(nearest(raster, factor, out_width, out_height)?)
    }
}

fn nearest(
    raster: &Raster, factor: usize, out_width: usize, out_height: usize
) -> Result<Raster, asciipnm_core::RasterErrors> {
    let channels = raster.num_channels();

    trace!(
        "Nearest neighbour resize {:?} -> {:?}",
        raster.dimensions(),
        (out_width, out_height)
    );

    let mut out = Vec::with_capacity(out_width * out_height * channels);

    for row in raster.rows() {
        let start = out.len();

        for pixel in row.chunks_exact(channels) {
            for _ in 0..factor {
                out.extend_from_slice(pixel);
            }
        }
        // the widened row repeats for the remaining factor - 1 rows
        for _ in 1..factor {
            out.extend_from_within(start..start + out_width * channels);
        }
    }

    Raster::new(
        raster.kind(),
        out_width,
        out_height,
        raster.max_value(),
        out
    )
}

/// Nearest neighbour enlargement by an integer factor
#[derive(Copy, Clone, Debug)]
pub struct Enlarge {
    factor: usize
}

impl Enlarge {
    pub fn new(factor: usize) -> Enlarge {
        Enlarge { factor }
    }
}

impl RasterOperation for Enlarge {
    fn name(&self) -> &'static str {
        "enlarge"
    }

    fn execute(&self, raster: &Raster) -> Result<Raster, ProcsErrors> {
        resize(raster, self.factor, ResizeMethod::Nearest)
    }
}
