/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all asciipnm crates
//!
//! This crate provides
//!
//! - A [`Raster`](raster::Raster), the in-memory pixel grid every other crate
//!   consumes and produces
//! - [`FormatKind`](raster::FormatKind), the bitmap/grayscale/color distinction
//!   carried by Netpbm files
//! - Depth reduction ([`set_max_color_value`](depth::set_max_color_value)),
//!   the quantization policy used by the codec and by the ASCII-art pipeline
//!
//! All transforms here are pure, they return a new raster and never
//! touch their input.
pub use depth::set_max_color_value;
pub use errors::RasterErrors;
pub use raster::{FormatKind, Raster};

pub mod depth;
pub mod errors;
pub mod raster;

/// Re-export of the zune-core crate so downstream crates can speak
/// in terms of its colorspaces and decoder options without pinning
/// another version
pub use zune_core;
