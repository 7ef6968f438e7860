/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_core::{FormatKind, Raster};
use log::debug;

use crate::errors::GlyphErrors;
use crate::palette::ASCII_PALETTE;
use crate::quantize::change_gradient;
use crate::render::render;

/// A grid of symbols, one per source pixel
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AsciiArt {
    width:   usize,
    height:  usize,
    symbols: Vec<char>
}

impl AsciiArt {
    /// Create a grid from row-major symbols
    pub fn new(width: usize, height: usize, symbols: Vec<char>) -> Result<AsciiArt, GlyphErrors> {
        if width * height != symbols.len() || symbols.is_empty() {
            return Err(GlyphErrors::ShapeMismatch {
                expected: width * height,
                found:    symbols.len()
            });
        }
        Ok(AsciiArt {
            width,
            height,
            symbols
        })
    }

    /// Create a grid from lines of text, all lines must have the same
    /// number of characters
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<AsciiArt, GlyphErrors> {
        let width = rows.first().map_or(0, |x| x.as_ref().chars().count());

        let mut symbols = Vec::with_capacity(width * rows.len());

        for row in rows {
            let before = symbols.len();
            symbols.extend(row.as_ref().chars());

            if symbols.len() - before != width {
                return Err(GlyphErrors::ShapeMismatch {
                    expected: width * rows.len(),
                    found:    before + row.as_ref().chars().count()
                });
            }
        }
        AsciiArt::new(width, rows.len(), symbols)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Row-major symbols
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Iterate over rows of symbols
    pub fn rows(&self) -> core::slice::ChunksExact<'_, char> {
        self.symbols.chunks_exact(self.width)
    }

    /// Symbol at column `x`, row `y`
    ///
    /// # Panics
    /// If the coordinates are out of bounds
    pub fn get(&self, x: usize, y: usize) -> char {
        self.symbols[y * self.width + x]
    }

    /// Text form, symbols separated by a space, one row per line
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.symbols.len() * 2);

        for row in self.rows() {
            for (i, symbol) in row.iter().enumerate() {
                if i != 0 {
                    text.push(' ');
                }
                text.push(*symbol);
            }
            text.push('\n');
        }
        text
    }

    /// Draw the grid with the process wide glyph atlas
    pub fn render(&self) -> Result<Raster, GlyphErrors> {
        render(self)
    }
}

/// Convert a grayscale raster into ASCII art
///
/// Every sample is quantized onto `[0, ASCII_PALETTE.len() - 1]` and replaced
/// by the palette symbol at that index, the result has the same dimensions
/// as the raster.
///
/// # Errors
/// Bitmap and color rasters are rejected with [`GlyphErrors::UnsupportedKind`]
pub fn to_ascii(raster: &Raster) -> Result<AsciiArt, GlyphErrors> {
    if raster.kind() != FormatKind::Grayscale {
        return Err(GlyphErrors::UnsupportedKind(raster.kind()));
    }
    let palette: Vec<char> = ASCII_PALETTE.chars().collect();
    let top = palette.len() - 1;

    let levels = change_gradient(raster, top as u32)?;

    debug!(
        "Converting {}x{} raster into ascii art",
        raster.width(),
        raster.height()
    );
    let symbols = levels
        .samples()
        .iter()
        .map(|x| palette[(*x as usize).min(top)])
        .collect();

    AsciiArt::new(raster.width(), raster.height(), symbols)
}
