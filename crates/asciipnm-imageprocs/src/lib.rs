/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raster operations for asciipnm
//!
//! Every operation implements [`RasterOperation`](traits::RasterOperation) and
//! returns a new raster.
//!
//! # Example
//! - Enlarge a raster three times and frame it with a white border
//! ```
//! use asciipnm_core::{FormatKind, Raster};
//! use asciipnm_imageprocs::pad::{Border, BorderColor};
//! use asciipnm_imageprocs::resize::Enlarge;
//! use asciipnm_imageprocs::traits::RasterOperation;
//!
//! let raster = Raster::filled(FormatKind::Grayscale, 2, 2, 255, 10).unwrap();
//!
//! let enlarged = Enlarge::new(3).execute(&raster).unwrap();
//! let framed = Border::new(1, BorderColor::White).execute(&enlarged).unwrap();
//!
//! assert_eq!(framed.dimensions(), (8, 8));
//! assert_eq!(framed.get(0, 0, 0), 255);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::missing_errors_doc,
    clippy::panic
)]

pub mod depth;
pub mod errors;
pub mod grid;
pub mod pad;
pub mod resize;
pub mod traits;
