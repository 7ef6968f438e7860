/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use asciipnm_core::RasterErrors;

/// Errors raised by raster operations
pub enum ProcsErrors {
    /// An argument outside the range the operation accepts
    InvalidArgument(&'static str),
    /// A grid was given the wrong number of images
    WrongImageCount { expected: usize, found: usize },
    /// Grid cells must share dimensions
    ///
    /// The first argument is the expected `(width, height)`, the second the one found
    DimensionsMismatch((usize, usize), (usize, usize)),
    Raster(RasterErrors)
}

impl Debug for ProcsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ProcsErrors::InvalidArgument(reason) => {
                writeln!(f, "Invalid argument: {reason}")
            }
            ProcsErrors::WrongImageCount { expected, found } => {
                writeln!(f, "Expected {expected} images for the grid but found {found}")
            }
            ProcsErrors::DimensionsMismatch(expected, found) => {
                writeln!(
                    f,
                    "All images must have dimensions {expected:?}, found {found:?}"
                )
            }
            ProcsErrors::Raster(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for ProcsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ProcsErrors {}

impl From<RasterErrors> for ProcsErrors {
    fn from(value: RasterErrors) -> Self {
        ProcsErrors::Raster(value)
    }
}
