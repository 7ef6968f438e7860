/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Netpbm decoder and encoder
//!
//! Netpbm is a family of self describing raster formats, every file starts
//! with a magic number identifying the kind of pixels and how they are stored
//!
//! ```text
//! ╔═══════╤══════════╤═══════════╤═════════════════════════╗
//! ║ Magic │ Encoding │ Kind      │ Header fields           ║
//! ╠═══════╪══════════╪═══════════╪═════════════════════════╣
//! ║ P1    │ ASCII    │ Bitmap    │ width height            ║
//! ║ P2    │ ASCII    │ Grayscale │ width height max_value  ║
//! ║ P3    │ ASCII    │ Color     │ width height max_value  ║
//! ║ P4    │ Binary   │ Bitmap    │ width height            ║
//! ║ P5    │ Binary   │ Grayscale │ width height max_value  ║
//! ║ P6    │ Binary   │ Color     │ width height max_value  ║
//! ╚═══════╧══════════╧═══════════╧═════════════════════════╝
//! ```
//!
//! ASCII bodies are decimal tokens separated by whitespace, `#` starts a comment
//! that runs to the end of the line. Binary bodies follow the single whitespace
//! byte after the last header field, one byte per sample (two, big endian, when
//! max value is above 255). Binary bitmaps pack eight pixels in a byte, most
//! significant bit first, with every row padded to a whole byte.
//!
//! # Example
//! ```
//! use asciipnm_netpbm::{decode, encode, Encoding};
//!
//! let raster = decode(b"P2\n2 2\n255\n0 85 170 255\n").unwrap();
//! assert_eq!(raster.samples(), &[0, 85, 170, 255]);
//!
//! let binary = encode(&raster, Encoding::Binary).unwrap();
//! assert_eq!(decode(&binary).unwrap(), raster);
//! ```
pub use asciipnm_core;
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use format::*;

mod decoder;
mod encoder;
mod errors;
mod format;
