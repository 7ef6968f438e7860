/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use crate::raster::FormatKind;

/// Errors that may occur when constructing or transforming a raster
pub enum RasterErrors {
    /// The sample buffer does not match the declared dimensions
    ///
    /// # Arguments
    /// - expected: `width * height * channels`
    /// - found: actual length of the sample buffer
    ShapeMismatch { expected: usize, found: usize },
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// A max value of zero was requested or declared
    InvalidMaxValue(u32),
    /// Rasters that should share a kind do not
    ///
    /// The first argument is the expected kind, the second is the one found
    KindMismatch(FormatKind, FormatKind)
}

impl Debug for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RasterErrors::ShapeMismatch { expected, found } => {
                writeln!(
                    f,
                    "Raster shape mismatch, expected {expected} samples but buffer has {found}"
                )
            }
            RasterErrors::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Raster dimensions must be non-zero, found width {width} and height {height}"
                )
            }
            RasterErrors::InvalidMaxValue(value) => {
                writeln!(f, "Invalid max value {value}, expected a value of at least 1")
            }
            RasterErrors::KindMismatch(expected, found) => {
                writeln!(f, "Expected a {expected:?} raster but found {found:?}")
            }
        }
    }
}

impl Display for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for RasterErrors {}
