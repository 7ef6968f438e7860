/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! ASCII art from grayscale rasters
//!
//! The pipeline has two directions
//!
//! - [`to_ascii`] quantizes every pixel of a grayscale raster onto
//!   [`ASCII_PALETTE`], giving one symbol per pixel
//! - [`render`] expands a grid of symbols back into pixels by tiling the
//!   bitmap of every symbol from the glyph atlas
//!
//! ```text
//!  raster ──change_gradient──► indices ──palette──► AsciiArt ──render──► raster
//! ```
//!
//! # Example
//! ```
//! use asciipnm_core::{FormatKind, Raster};
//! use asciipnm_glyph::{atlas, to_ascii};
//!
//! let raster = Raster::filled(FormatKind::Grayscale, 2, 2, 255, 255).unwrap();
//! let art = to_ascii(&raster).unwrap();
//!
//! assert_eq!(art.to_text(), "@ @\n@ @\n");
//!
//! let preview = art.render().unwrap();
//! assert_eq!(preview.height(), 2 * atlas().unwrap().glyph_height());
//! ```
pub use ascii::{to_ascii, AsciiArt};
pub use atlas::{atlas, GlyphAtlas};
pub use errors::GlyphErrors;
pub use palette::{ASCII_PALETTE, ATLAS_PALETTE, GLYPH_PADDING};
pub use quantize::change_gradient;
pub use render::{render, render_with_atlas};

mod ascii;
mod atlas;
mod errors;
mod palette;
mod quantize;
mod render;
