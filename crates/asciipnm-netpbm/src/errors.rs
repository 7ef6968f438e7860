/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use std::io;

use asciipnm_core::RasterErrors;

/// Errors that may occur during decoding
pub enum NetpbmDecodeErrors {
    /// Missing or unknown magic number, or a header field that
    /// is absent or not a number
    MalformedHeader(String),
    /// The body holds fewer samples than the header declares
    ///
    /// # Arguments
    /// - expected: number of samples (ASCII) or bytes (binary) needed
    /// - found: number actually present
    InsufficientData { expected: usize, found: usize },
    /// A body token is not a decimal number
    InvalidSample(String),
    /// Dimensions larger than the configured limits
    ///
    /// The first argument is the limit, the second the value found
    LargeDimensions(usize, usize),
    /// Data left after the last sample, only reported in strict mode
    TrailingData(usize),
    Raster(RasterErrors)
}

impl Debug for NetpbmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedHeader(val) => {
                writeln!(f, "Malformed header, reason: {val}")
            }
            Self::InsufficientData { expected, found } => {
                writeln!(
                    f,
                    "Insufficient data, expected {expected} samples but stream has {found}"
                )
            }
            Self::InvalidSample(val) => {
                writeln!(f, "Invalid sample, {val}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::TrailingData(count) => {
                writeln!(f, "Found {count} unexpected trailing bytes/tokens after image data")
            }
            Self::Raster(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for NetpbmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for NetpbmDecodeErrors {}

impl From<RasterErrors> for NetpbmDecodeErrors {
    fn from(value: RasterErrors) -> Self {
        NetpbmDecodeErrors::Raster(value)
    }
}

/// Errors occurring during encoding
pub enum NetpbmEncodeErrors {
    /// The raster buffer disagrees with its declared dimensions,
    /// nothing has been written
    ShapeMismatch { expected: usize, found: usize },
    /// Raw files store at most 16 bits per sample
    UnsupportedMaxValue(u32),
    IoErrors(io::Error)
}

impl From<io::Error> for NetpbmEncodeErrors {
    fn from(err: io::Error) -> Self {
        NetpbmEncodeErrors::IoErrors(err)
    }
}

impl Debug for NetpbmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            NetpbmEncodeErrors::ShapeMismatch { expected, found } => {
                writeln!(
                    f,
                    "Raster shape mismatch, dimensions need {expected} samples but buffer has {found}"
                )
            }
            NetpbmEncodeErrors::UnsupportedMaxValue(value) => {
                writeln!(
                    f,
                    "Max value {value} cannot be stored in a binary file, the limit is 65535"
                )
            }
            NetpbmEncodeErrors::IoErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for NetpbmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for NetpbmEncodeErrors {}
