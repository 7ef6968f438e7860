/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The glyph atlas
//!
//! Maps every symbol of [`ATLAS_PALETTE`] to a fixed size bitmap.
//! The process wide atlas is decoded from an embedded image the first
//! time it is requested and shared read-only afterwards.
use std::collections::HashMap;
use std::sync::OnceLock;

use asciipnm_core::{set_max_color_value, FormatKind, Raster};
use log::debug;

use crate::errors::GlyphErrors;
use crate::palette::{ATLAS_PALETTE, GLYPH_PADDING, GLYPH_SOURCE};

static ATLAS: OnceLock<Result<GlyphAtlas, String>> = OnceLock::new();

/// Symbol to bitmap table
///
/// All glyphs share the same dimensions, so they tile uniformly
#[derive(Clone, Debug)]
pub struct GlyphAtlas {
    glyph_width:  usize,
    glyph_height: usize,
    index:        HashMap<char, usize>,
    // glyph_width * glyph_height samples per glyph, 0 or 1
    glyphs:       Vec<Vec<u32>>
}

impl GlyphAtlas {
    /// Build an atlas from a Netpbm image holding one glyph per symbol
    ///
    /// The image is split into `palette.chars().count()` vertical slices of
    /// equal width, the i-th slice is the glyph of the i-th symbol. Every slice
    /// is padded with `padding` blank columns on the left and on the right.
    ///
    /// Grayscale sources are thresholded to bitmaps, color sources are rejected.
    pub fn from_reference(source: &[u8], palette: &str, padding: usize) -> Result<GlyphAtlas, GlyphErrors> {
        let reference = asciipnm_netpbm::decode(source)?;

        let reference = match reference.kind() {
            FormatKind::Bitmap => reference,
            FormatKind::Grayscale => set_max_color_value(&reference, 1)?,
            kind => return Err(GlyphErrors::UnsupportedKind(kind))
        };
        let symbols: Vec<char> = palette.chars().collect();

        if symbols.is_empty() || reference.width() % symbols.len() != 0 {
            let msg = format!(
                "image width {} cannot be split into {} glyphs",
                reference.width(),
                symbols.len()
            );
            return Err(GlyphErrors::InvalidAtlas(msg));
        }
        let slice_width = reference.width() / symbols.len();

        let mut index = HashMap::with_capacity(symbols.len());
        let glyphs = symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| {
                index.insert(*symbol, i);
                cut_glyph(&reference, i * slice_width, slice_width, padding)
            })
            .collect();

        let atlas = GlyphAtlas {
            glyph_width: slice_width + 2 * padding,
            glyph_height: reference.height(),
            index,
            glyphs
        };
        debug!(
            "Built glyph atlas with {} glyphs of {}x{}",
            atlas.len(),
            atlas.glyph_width,
            atlas.glyph_height
        );
        Ok(atlas)
    }

    pub const fn glyph_width(&self) -> usize {
        self.glyph_width
    }

    pub const fn glyph_height(&self) -> usize {
        self.glyph_height
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Bitmap of `symbol`, row-major, `glyph_width * glyph_height` samples
    pub fn glyph(&self, symbol: char) -> Result<&[u32], GlyphErrors> {
        self.index
            .get(&symbol)
            .map(|i| self.glyphs[*i].as_slice())
            .ok_or(GlyphErrors::UnknownGlyph(symbol))
    }

    /// Bitmap of `symbol` as a standalone raster
    pub fn glyph_raster(&self, symbol: char) -> Result<Raster, GlyphErrors> {
        let glyph = self.glyph(symbol)?.to_vec();

        Ok(Raster::new(
            FormatKind::Bitmap,
            self.glyph_width,
            self.glyph_height,
            1,
            glyph
        )?)
    }
}

/// Copy columns `[start, start + width)` of `reference`, with `padding` blank
/// columns on both sides
fn cut_glyph(reference: &Raster, start: usize, width: usize, padding: usize) -> Vec<u32> {
    let padded = width + 2 * padding;
    let mut glyph = vec![0; padded * reference.height()];

    for (out, row) in glyph
        .chunks_exact_mut(padded)
        .zip(reference.rows())
    {
        out[padding..padding + width].copy_from_slice(&row[start..start + width]);
    }
    glyph
}

/// The process wide glyph atlas
///
/// Built from the embedded reference image on first use, concurrent first
/// calls wait for a single build.
pub fn atlas() -> Result<&'static GlyphAtlas, GlyphErrors> {
    let atlas = ATLAS.get_or_init(|| {
        GlyphAtlas::from_reference(GLYPH_SOURCE, ATLAS_PALETTE, GLYPH_PADDING)
            .map_err(|e| format!("{e:?}"))
    });
    match atlas {
        Ok(atlas) => Ok(atlas),
        Err(reason) => Err(GlyphErrors::InvalidAtlas(reason.clone()))
    }
}
