/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::Write as _;
use std::io::Write;

use asciipnm_core::{FormatKind, Raster};
use log::debug;

use crate::errors::NetpbmEncodeErrors;
use crate::format::{Encoding, NetpbmFormat};

/// A Netpbm encoder
///
/// Writes a raster as P1-P6 depending on the raster kind and the
/// requested encoding.
pub struct NetpbmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> NetpbmEncoder<'a, W> {
    /// Create a new Netpbm encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> NetpbmEncoder<'a, W> {
        Self { writer }
    }

    /// Encode `raster` with the given encoding
    ///
    /// Samples are clamped to `[0, max_value]`. The raster is validated
    /// before anything is written, an inconsistent raster leaves the writer untouched.
    ///
    /// Returns the number of bytes written
    pub fn encode(&mut self, raster: &Raster, encoding: Encoding) -> Result<usize, NetpbmEncodeErrors> {
        let bytes = encode(raster, encoding)?;

        self.writer.write_all(&bytes)?;

        Ok(bytes.len())
    }
}

/// Encode `raster` into an in-memory Netpbm file
///
/// # Example
/// ```
/// use asciipnm_core::{FormatKind, Raster};
/// use asciipnm_netpbm::{encode, Encoding};
///
/// let raster = Raster::new(FormatKind::Grayscale, 2, 1, 255, vec![0, 300]).unwrap();
/// let bytes = encode(&raster, Encoding::Ascii).unwrap();
///
/// assert_eq!(bytes, b"P2\n2 1\n255\n0 255\n");
/// ```
pub fn encode(raster: &Raster, encoding: Encoding) -> Result<Vec<u8>, NetpbmEncodeErrors> {
    let expected = raster.width() * raster.height() * raster.num_channels();

    if expected != raster.samples().len() || expected == 0 {
        return Err(NetpbmEncodeErrors::ShapeMismatch {
            expected,
            found: raster.samples().len()
        });
    }
    if encoding == Encoding::Binary && raster.max_value() > 65535 {
        return Err(NetpbmEncodeErrors::UnsupportedMaxValue(raster.max_value()));
    }
    let format = NetpbmFormat::new(encoding, raster.kind());

    debug!(
        "Encoding {}x{} raster as {format}",
        raster.width(),
        raster.height()
    );

    let mut out = write_headers(format, raster);

    let clamped = raster.clamped();

    match (encoding, raster.kind()) {
        (Encoding::Ascii, _) => write_ascii_body(&clamped, &mut out),
        (Encoding::Binary, FormatKind::Bitmap) => write_packed_bits(&clamped, &mut out),
        (Encoding::Binary, _) => write_raw_bytes(&clamped, &mut out)
    }
    Ok(out)
}

/// Magic number, dimensions and max value
///
/// Plain files keep the dimensions on one line, raw files put every
/// field on its own line.
fn write_headers(format: NetpbmFormat, raster: &Raster) -> Vec<u8> {
    let mut header = format!("{format}\n");

    match format.encoding {
        Encoding::Ascii => {
            let _ = writeln!(header, "{} {}", raster.width(), raster.height());
        }
        Encoding::Binary => {
            let _ = write!(header, "{}\n{}\n", raster.width(), raster.height());
        }
    }
    if format.has_max_value() {
        let _ = writeln!(header, "{}", raster.max_value());
    }
    header.into_bytes()
}

fn write_ascii_body(raster: &Raster, out: &mut Vec<u8>) {
    let mut line = String::with_capacity(raster.row_stride() * 4);

    for row in raster.rows() {
        line.clear();

        for (i, sample) in row.iter().enumerate() {
            if i != 0 {
                line.push(' ');
            }
            let _ = write!(line, "{sample}");
        }
        line.push('\n');
        out.extend_from_slice(line.as_bytes());
    }
}

fn write_raw_bytes(raster: &Raster, out: &mut Vec<u8>) {
    if raster.max_value() > 255 {
        // big endian, as netpbm expects
        out.extend(raster.samples().iter().flat_map(|x| (*x as u16).to_be_bytes()));
    } else {
        out.extend(raster.samples().iter().map(|x| *x as u8));
    }
}

fn write_packed_bits(raster: &Raster, out: &mut Vec<u8>) {
    let row_bytes = raster.width().div_ceil(8);

    for row in raster.rows() {
        let mut packed = vec![0_u8; row_bytes];

        for (x, sample) in row.iter().enumerate() {
            if *sample != 0 {
                packed[x / 8] |= 1 << (7 - (x % 8));
            }
        }
        out.extend_from_slice(&packed);
    }
}
