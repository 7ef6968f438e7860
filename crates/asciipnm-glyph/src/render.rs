/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_core::{FormatKind, Raster};
use log::trace;

use crate::ascii::AsciiArt;
use crate::atlas::{atlas, GlyphAtlas};
use crate::errors::GlyphErrors;

/// Expand a symbol grid into a bitmap using the process wide atlas
///
/// The result is `rows * glyph_height` pixels high and `cols * glyph_width`
/// pixels wide, glyph `(i, j)` starts at pixel `(i * glyph_height, j * glyph_width)`.
pub fn render(grid: &AsciiArt) -> Result<Raster, GlyphErrors> {
    render_with_atlas(grid, atlas()?)
}

/// Expand a symbol grid into a bitmap using `atlas`
///
/// # Errors
/// [`GlyphErrors::UnknownGlyph`] for a symbol the atlas cannot draw
pub fn render_with_atlas(grid: &AsciiArt, atlas: &GlyphAtlas) -> Result<Raster, GlyphErrors> {
    let glyph_w = atlas.glyph_width();
    let glyph_h = atlas.glyph_height();

    let out_width = grid.width() * glyph_w;
    let out_height = grid.height() * glyph_h;

    trace!("Rendering {}x{} symbols into {out_width}x{out_height} pixels", grid.width(), grid.height());

    let mut pixels = vec![0_u32; out_width * out_height];

    for (i, row) in grid.rows().enumerate() {
        for (j, symbol) in row.iter().enumerate() {
            let glyph = atlas.glyph(*symbol)?;

            let x = j * glyph_w;

            for (y, glyph_row) in glyph.chunks_exact(glyph_w).enumerate() {
                let start = (i * glyph_h + y) * out_width + x;

                pixels[start..start + glyph_w].copy_from_slice(glyph_row);
            }
        }
    }

    Ok(Raster::new(
        FormatKind::Bitmap,
        out_width,
        out_height,
        1,
        pixels
    )?)
}
