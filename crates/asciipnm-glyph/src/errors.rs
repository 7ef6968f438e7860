/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use asciipnm_core::{FormatKind, RasterErrors};
use asciipnm_netpbm::NetpbmDecodeErrors;

/// Errors raised while converting to or from ASCII art
pub enum GlyphErrors {
    /// A symbol with no glyph in the atlas
    UnknownGlyph(char),
    /// The operation does not accept rasters of this kind
    UnsupportedKind(FormatKind),
    /// A symbol grid whose buffer does not match its dimensions
    ShapeMismatch { expected: usize, found: usize },
    /// The glyph reference image cannot be split into the palette
    InvalidAtlas(String),
    Raster(RasterErrors),
    Decode(NetpbmDecodeErrors)
}

impl Debug for GlyphErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            GlyphErrors::UnknownGlyph(symbol) => {
                writeln!(f, "No glyph for symbol {symbol:?}")
            }
            GlyphErrors::UnsupportedKind(kind) => {
                writeln!(f, "Unsupported raster kind {kind:?}")
            }
            GlyphErrors::ShapeMismatch { expected, found } => {
                writeln!(
                    f,
                    "Symbol grid shape mismatch, expected {expected} symbols but found {found}"
                )
            }
            GlyphErrors::InvalidAtlas(reason) => {
                writeln!(f, "Invalid glyph atlas: {reason}")
            }
            GlyphErrors::Raster(err) => {
                writeln!(f, "{err:?}")
            }
            GlyphErrors::Decode(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for GlyphErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for GlyphErrors {}

impl From<RasterErrors> for GlyphErrors {
    fn from(value: RasterErrors) -> Self {
        GlyphErrors::Raster(value)
    }
}

impl From<NetpbmDecodeErrors> for GlyphErrors {
    fn from(value: NetpbmDecodeErrors) -> Self {
        GlyphErrors::Decode(value)
    }
}
