/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Lay out rasters on a grid separated by a margin
use asciipnm_core::{Raster, RasterErrors};
use log::trace;

use crate::errors::ProcsErrors;
use crate::pad::BorderColor;

/// Place `cols * rows` rasters on a grid
///
/// Rasters are placed row by row, `rasters[0]` at the top left.
/// Every cell and the outer edge is separated by a margin of `margin`
/// pixels, so the output is
/// `cols * width + (cols + 1) * margin` wide and
/// `rows * height + (rows + 1) * margin` tall.
///
/// # Errors
/// - The number of rasters is not `cols * rows`
/// - The rasters differ in dimensions, kind or max value
/// - `cols` or `rows` is zero
pub fn image_grid(
    rasters: &[Raster], cols: usize, rows: usize, margin: usize, color: BorderColor
) -> Result<Raster, ProcsErrors> {
    if cols == 0 || rows == 0 {
        return Err(ProcsErrors::InvalidArgument("grid must have at least one cell"));
    }
    if rasters.len() != cols * rows {
        return Err(ProcsErrors::WrongImageCount {
            expected: cols * rows,
            found:    rasters.len()
        });
    }
    // checked above, the slice has at least one element
    let first = &rasters[0];

    for raster in &rasters[1..] {
        if raster.dimensions() != first.dimensions() {
            return Err(ProcsErrors::DimensionsMismatch(
                first.dimensions(),
                raster.dimensions()
            ));
        }
        if raster.kind() != first.kind() {
            return Err(RasterErrors::KindMismatch(first.kind(), raster.kind()).into());
        }
        if raster.max_value() != first.max_value() {
            return Err(ProcsErrors::InvalidArgument(
                "all grid images must share a max value"
            ));
        }
    }
    let (width, height) = first.dimensions();
    let channels = first.num_channels();

    let out_width = cols * width + (cols + 1) * margin;
    let out_height = rows * height + (rows + 1) * margin;

    trace!("Building a {cols}x{rows} grid of {out_width}x{out_height} pixels");

    let value = color.sample(first.kind(), first.max_value());
    let out_stride = out_width * channels;
    let mut out = vec![value; out_stride * out_height];

    for (index, raster) in rasters.iter().enumerate() {
        let (cell_x, cell_y) = (index % cols, index / cols);

        let left = (margin + cell_x * (width + margin)) * channels;
        let top = margin + cell_y * (height + margin);

        for (y, row) in raster.rows().enumerate() {
            let start = (top + y) * out_stride + left;
            out[start..start + row.len()].copy_from_slice(row);
        }
    }

    Ok(Raster::new(
        first.kind(),
        out_width,
        out_height,
        first.max_value(),
        out
    )?)
}
