/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In-memory pixel grids
use zune_core::colorspace::ColorSpace;

use crate::errors::RasterErrors;

/// The kind of pixels a raster holds
///
/// This mirrors the three Netpbm families, PBM, PGM and PPM
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FormatKind {
    /// One boolean channel, `1` is foreground (ink), `0` is background
    Bitmap,
    /// One channel of intensities in `[0, max_value]`
    Grayscale,
    /// Three interleaved channels, R,G,B
    Color
}

impl FormatKind {
    /// Number of samples stored for every pixel
    pub const fn num_channels(self) -> usize {
        match self {
            FormatKind::Bitmap | FormatKind::Grayscale => 1,
            FormatKind::Color => 3
        }
    }

    /// The zune colorspace matching this kind
    ///
    /// Bitmaps are reported as `Luma`, the caller is expected to
    /// widen the 0/1 range before handing it to an encoder.
    pub const fn colorspace(self) -> ColorSpace {
        match self {
            FormatKind::Bitmap | FormatKind::Grayscale => ColorSpace::Luma,
            FormatKind::Color => ColorSpace::RGB
        }
    }

    /// Lower case name, as used in file extensions and metadata output
    pub const fn name(self) -> &'static str {
        match self {
            FormatKind::Bitmap => "bitmap",
            FormatKind::Grayscale => "grayscale",
            FormatKind::Color => "color"
        }
    }

    /// Conventional Netpbm file extension for this kind
    pub const fn extension(self) -> &'static str {
        match self {
            FormatKind::Bitmap => "pbm",
            FormatKind::Grayscale => "pgm",
            FormatKind::Color => "ppm"
        }
    }
}

/// A 2D pixel grid
///
/// Samples are stored row-major, and for [`FormatKind::Color`] channel-minor,
/// i.e. `R,G,B,R,G,B...` for every row.
///
/// A raster is a value, operations that change pixels return a new raster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Raster {
    kind:      FormatKind,
    width:     usize,
    height:    usize,
    max_value: u32,
    samples:   Vec<u32>
}

impl Raster {
    /// Create a new raster, validating its shape
    ///
    /// # Arguments
    /// - kind: Kind of pixels stored
    /// - width, height: Image dimensions, both must be non-zero
    /// - max_value: Largest value a sample may hold, must be at least 1.
    ///   Ignored for bitmaps which always use 1
    /// - samples: `width * height * kind.num_channels()` samples
    ///
    /// # Example
    /// ```
    /// use asciipnm_core::{FormatKind, Raster};
    /// let raster = Raster::new(FormatKind::Grayscale, 2, 1, 255, vec![0, 255]).unwrap();
    /// assert_eq!(raster.get(1, 0, 0), 255);
    /// assert!(Raster::new(FormatKind::Color, 2, 1, 255, vec![0, 255]).is_err());
    /// ```
    pub fn new(
        kind: FormatKind, width: usize, height: usize, max_value: u32, samples: Vec<u32>
    ) -> Result<Raster, RasterErrors> {
        if width == 0 || height == 0 {
            return Err(RasterErrors::ZeroDimensions(width, height));
        }
        if max_value == 0 {
            return Err(RasterErrors::InvalidMaxValue(max_value));
        }
        let raster = Raster::from_parts_unchecked(kind, width, height, max_value, samples);

        raster.validate()?;

        Ok(raster)
    }

    /// Create a raster without checking that the buffer matches the dimensions
    ///
    /// Consumers that write rasters (e.g. encoders) call [`Raster::validate`]
    /// before trusting the shape.
    pub fn from_parts_unchecked(
        kind: FormatKind, width: usize, height: usize, max_value: u32, samples: Vec<u32>
    ) -> Raster {
        let max_value = if kind == FormatKind::Bitmap {
            1
        } else {
            max_value
        };
        Raster {
            kind,
            width,
            height,
            max_value,
            samples
        }
    }

    /// Create a raster where every sample holds `value`
    pub fn filled(
        kind: FormatKind, width: usize, height: usize, max_value: u32, value: u32
    ) -> Result<Raster, RasterErrors> {
        let samples = vec![value; width * height * kind.num_channels()];

        Raster::new(kind, width, height, max_value, samples)
    }

    /// Check that the sample buffer agrees with the declared dimensions
    pub fn validate(&self) -> Result<(), RasterErrors> {
        let expected = self
            .width
            .saturating_mul(self.height)
            .saturating_mul(self.kind.num_channels());

        if expected != self.samples.len() {
            return Err(RasterErrors::ShapeMismatch {
                expected,
                found: self.samples.len()
            });
        }
        Ok(())
    }

    pub const fn kind(&self) -> FormatKind {
        self.kind
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn max_value(&self) -> u32 {
        self.max_value
    }

    pub const fn num_channels(&self) -> usize {
        self.kind.num_channels()
    }

    /// Raw samples, row-major and channel-minor
    pub fn samples(&self) -> &[u32] {
        &self.samples
    }

    /// Consume the raster and return its sample buffer
    pub fn into_samples(self) -> Vec<u32> {
        self.samples
    }

    /// Number of samples in one row
    pub const fn row_stride(&self) -> usize {
        self.width * self.kind.num_channels()
    }

    /// Iterate over rows of samples
    ///
    /// Each row holds `width * channels` samples
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u32> {
        self.samples.chunks_exact(self.row_stride().max(1))
    }

    /// Return the sample at column `x`, row `y` and channel `c`
    ///
    /// # Panics
    /// If the coordinates are out of bounds
    pub fn get(&self, x: usize, y: usize, c: usize) -> u32 {
        self.samples[y * self.row_stride() + x * self.num_channels() + c]
    }

    /// Return a copy of this raster with every sample clamped to `[0, max_value]`
    pub fn clamped(&self) -> Raster {
        let max_value = self.max_value;

        self.map_samples(self.kind, max_value, |x| x.min(max_value))
    }

    /// Create a new raster by applying `func` to every sample
    ///
    /// Dimensions are kept, kind and max value are replaced.
    pub fn map_samples<F>(&self, kind: FormatKind, max_value: u32, func: F) -> Raster
    where
        F: Fn(u32) -> u32
    {
        let samples = self.samples.iter().map(|x| func(*x)).collect();

        Raster::from_parts_unchecked(kind, self.width, self.height, max_value, samples)
    }
}
