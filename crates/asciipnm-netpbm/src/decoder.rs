/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_core::{FormatKind, Raster};
use log::{debug, info};
use zune_core::bytestream::ZByteReader;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::errors::NetpbmDecodeErrors;
use crate::format::{Encoding, NetpbmFormat};

/// Largest max value a binary file may declare, samples are at most two bytes
const MAX_BINARY_VALUE: u64 = 65535;

/// An instance of a Netpbm decoder
///
/// The decoder can decode all of P1 to P6
pub struct NetpbmDecoder<'a> {
    data:            &'a [u8],
    reader:          ZByteReader<&'a [u8]>,
    options:         DecoderOptions,
    format:          Option<NetpbmFormat>,
    width:           usize,
    height:          usize,
    max_value:       u32,
    decoded_headers: bool
}

impl<'a> NetpbmDecoder<'a> {
    /// Create a new Netpbm decoder with default options
    ///
    /// Data after the last sample is ignored, use
    /// [`new_with_options`](Self::new_with_options) with strict mode to reject it.
    ///
    /// # Arguments
    /// - data: Netpbm encoded pixels
    ///
    /// # Example
    /// ```
    /// use asciipnm_netpbm::NetpbmDecoder;
    /// let mut decoder = NetpbmDecoder::new(b"NOT VALID PBM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> NetpbmDecoder<'a> {
        // zune-core turns strict mode on by default
        let options = DecoderOptions::default().set_strict_mode(false);

        NetpbmDecoder::new_with_options(options, data)
    }

    /// Create a new Netpbm decoder with the specified options
    ///
    /// The decoder honours `max_width`, `max_height` and `strict_mode`.
    /// In strict mode, data after the last sample is an error instead
    /// of being ignored.
    ///
    /// # Example
    /// ```
    /// use asciipnm_netpbm::NetpbmDecoder;
    /// use zune_core::options::DecoderOptions;
    ///
    /// let options = DecoderOptions::default().set_strict_mode(true);
    /// let mut decoder = NetpbmDecoder::new_with_options(options, b"P1\n1 1\n0 1\n");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> NetpbmDecoder<'a> {
        NetpbmDecoder {
            data,
            reader: ZByteReader::new(data),
            options,
            format: None,
            width: 0,
            height: 0,
            max_value: 0,
            decoded_headers: false
        }
    }

    /// Read the magic number and header fields and store them in internal state
    ///
    /// Calling this more than once is a no-op
    pub fn read_headers(&mut self) -> Result<(), NetpbmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.reader.has(2) {
            let msg = format!(
                "Expected a 2 byte magic number but stream has {} bytes",
                self.reader.remaining()
            );
            return Err(NetpbmDecodeErrors::MalformedHeader(msg));
        }
        let p = self.reader.get_u8();
        let digit = self.reader.get_u8();

        if p != b'P' {
            let msg = format!("Expected P as first byte but got '{}'", p as char);
            return Err(NetpbmDecodeErrors::MalformedHeader(msg));
        }
        let format = NetpbmFormat::from_magic_digit(digit).ok_or_else(|| {
            let msg = format!(
                "Unsupported magic number `P{}`, supported ones are P1 to P6",
                digit as char
            );
            NetpbmDecodeErrors::MalformedHeader(msg)
        })?;

        info!("Format: {format} ({:?}, {:?})", format.encoding, format.kind);

        let width = self.read_header_field("width")?;

        if width > self.options.get_max_width() {
            return Err(NetpbmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        let height = self.read_header_field("height")?;

        if height > self.options.get_max_height() {
            return Err(NetpbmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        if width == 0 || height == 0 {
            let msg = format!("Zero sized image, width {width} and height {height}");
            return Err(NetpbmDecodeErrors::MalformedHeader(msg));
        }
        info!("Width: {width}, height: {height}");

        let max_value = if format.has_max_value() {
            let value = self.read_header_field("max value")?;

            if value == 0 {
                return Err(NetpbmDecodeErrors::MalformedHeader(
                    "Max value must be at least 1".to_string()
                ));
            }
            if format.encoding == Encoding::Binary && value as u64 > MAX_BINARY_VALUE {
                let msg = format!("Max value {value} greater than {MAX_BINARY_VALUE}");
                return Err(NetpbmDecodeErrors::MalformedHeader(msg));
            }
            u32::try_from(value).map_err(|_| {
                NetpbmDecodeErrors::MalformedHeader(format!("Max value {value} is too large"))
            })?
        } else {
            1
        };
        info!("Max value: {max_value}");

        if format.encoding == Encoding::Binary && !self.reader.eof() {
            // exactly one whitespace byte separates the header from the raster,
            // anything more belongs to the samples
            let byte = self.reader.get_u8();

            if !byte.is_ascii_whitespace() {
                let msg = format!(
                    "Expected whitespace after the last header field but found byte {byte:#04x}"
                );
                return Err(NetpbmDecodeErrors::MalformedHeader(msg));
            }
        }

        self.format = Some(format);
        self.width = width;
        self.height = height;
        self.max_value = max_value;
        self.decoded_headers = true;

        Ok(())
    }

    /// Skip whitespace and comments, then read one decimal header field
    fn read_header_field(&mut self, name: &str) -> Result<usize, NetpbmDecodeErrors> {
        skip_spaces(&mut self.reader);

        if self.reader.eof() {
            let msg = format!("Stream ended before the {name} field");
            return Err(NetpbmDecodeErrors::MalformedHeader(msg));
        }
        let value = read_decimal(&mut self.reader);

        match value {
            Some(value) if token_ends_here(&mut self.reader) => usize::try_from(value)
                .map_err(|_| {
                    NetpbmDecodeErrors::MalformedHeader(format!("{name} {value} is too large"))
                }),
            _ => {
                let token = self.current_token();
                let msg = format!("Expected a decimal {name} but found `{token}`");
                Err(NetpbmDecodeErrors::MalformedHeader(msg))
            }
        }
    }

    /// Return the format of the image or none if headers
    /// are not decoded
    pub const fn get_format(&self) -> Option<NetpbmFormat> {
        self.format
    }

    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub fn get_colorspace(&self) -> Option<ColorSpace> {
        self.format.map(|format| format.kind.colorspace())
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the declared max sample value or none if headers
    /// aren't decoded
    pub const fn get_max_value(&self) -> Option<u32> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode a Netpbm file into a raster
    ///
    /// Samples are taken as they are, values above the declared
    /// max value are not rejected.
    pub fn decode(&mut self) -> Result<Raster, NetpbmDecodeErrors> {
        self.read_headers()?;

        let format = self.format.ok_or_else(|| {
            NetpbmDecodeErrors::MalformedHeader("Headers were not decoded".to_string())
        })?;
        let count = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(format.kind.num_channels()))
            .ok_or(NetpbmDecodeErrors::LargeDimensions(usize::MAX, self.width))?;

        debug!("Expecting {count} samples");

        let samples = match (format.encoding, format.kind) {
            (Encoding::Ascii, FormatKind::Bitmap) => self.decode_ascii_bits(count)?,
            (Encoding::Ascii, _) => self.decode_ascii_tokens(count)?,
            (Encoding::Binary, FormatKind::Bitmap) => self.decode_packed_bits()?,
            (Encoding::Binary, _) => self.decode_raw_bytes(count)?
        };
        self.check_trailing_data()?;

        let raster = Raster::new(
            format.kind,
            self.width,
            self.height,
            self.max_value,
            samples
        )?;

        Ok(raster)
    }

    /// Plain bitmaps, every sample is a single `0` or `1`
    ///
    /// Samples need not be separated, `0110` is four pixels
    fn decode_ascii_bits(&mut self, count: usize) -> Result<Vec<u32>, NetpbmDecodeErrors> {
        // every sample takes at least one byte, so the stream bounds the reservation
        let mut samples = Vec::with_capacity(count.min(self.reader.remaining()));

        while samples.len() < count {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                return Err(NetpbmDecodeErrors::InsufficientData {
                    expected: count,
                    found:    samples.len()
                });
            }
            match self.reader.get_u8() {
                b'0' => samples.push(0),
                b'1' => samples.push(1),
                byte => {
                    let msg = format!(
                        "Expected 0 or 1 for bitmap sample {} but found '{}'",
                        samples.len(),
                        byte as char
                    );
                    return Err(NetpbmDecodeErrors::InvalidSample(msg));
                }
            }
        }
        Ok(samples)
    }

    /// Plain graymaps and pixmaps, whitespace separated decimal tokens
    fn decode_ascii_tokens(&mut self, count: usize) -> Result<Vec<u32>, NetpbmDecodeErrors> {
        let mut samples = Vec::with_capacity(count.min(self.reader.remaining()));

        while samples.len() < count {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                return Err(NetpbmDecodeErrors::InsufficientData {
                    expected: count,
                    found:    samples.len()
                });
            }
            let value = read_decimal(&mut self.reader)
                .filter(|_| token_ends_here(&mut self.reader))
                .and_then(|value| u32::try_from(value).ok());

            match value {
                Some(value) => samples.push(value),
                None => {
                    let token = self.current_token();
                    let msg = format!(
                        "Expected a decimal number for sample {} but found `{token}`",
                        samples.len()
                    );
                    return Err(NetpbmDecodeErrors::InvalidSample(msg));
                }
            }
        }
        Ok(samples)
    }

    /// Raw graymaps and pixmaps, one byte per sample, or two big endian
    /// bytes when max value needs more than 8 bits
    fn decode_raw_bytes(&mut self, count: usize) -> Result<Vec<u32>, NetpbmDecodeErrors> {
        let bytes_per_sample = if self.max_value > 255 { 2 } else { 1 };

        let size = count
            .checked_mul(bytes_per_sample)
            .ok_or(NetpbmDecodeErrors::LargeDimensions(usize::MAX, self.width))?;
        let body = self.take_body(size)?;

        let samples = if bytes_per_sample == 1 {
            body.iter().map(|x| u32::from(*x)).collect()
        } else {
            // 16 bit netpbm is big endian
            body.chunks_exact(2)
                .map(|x| u32::from(u16::from_be_bytes([x[0], x[1]])))
                .collect()
        };
        Ok(samples)
    }

    /// Raw bitmaps, eight pixels per byte, most significant bit first.
    /// Every row starts on a fresh byte.
    fn decode_packed_bits(&mut self) -> Result<Vec<u32>, NetpbmDecodeErrors> {
        let width = self.width;
        let row_bytes = width.div_ceil(8);

        let size = row_bytes
            .checked_mul(self.height)
            .ok_or(NetpbmDecodeErrors::LargeDimensions(usize::MAX, self.width))?;
        let body = self.take_body(size)?;

        let mut samples = Vec::with_capacity(width * self.height);

        for row in body.chunks_exact(row_bytes) {
            samples.extend((0..width).map(|x| u32::from((row[x / 8] >> (7 - (x % 8))) & 1)));
        }
        Ok(samples)
    }

    /// Borrow `size` bytes of binary body and advance past them
    fn take_body(&mut self, size: usize) -> Result<&'a [u8], NetpbmDecodeErrors> {
        let remaining = self.reader.remaining();

        if remaining < size {
            return Err(NetpbmDecodeErrors::InsufficientData {
                expected: size,
                found:    remaining
            });
        }
        let start = self.reader.get_position();
        let data: &'a [u8] = self.data;

        self.reader.skip(size);

        Ok(&data[start..start + size])
    }

    fn check_trailing_data(&mut self) -> Result<(), NetpbmDecodeErrors> {
        if self.format.map(|x| x.encoding) == Some(Encoding::Ascii) {
            // trailing whitespace and comments are fine for plain files
            skip_spaces(&mut self.reader);
        }
        let remaining = self.reader.remaining();

        if remaining > 0 {
            if self.options.get_strict_mode() {
                return Err(NetpbmDecodeErrors::TrailingData(remaining));
            }
            debug!("Ignoring {remaining} bytes after image data");
        }
        Ok(())
    }

    /// The token at the current position, for error messages
    fn current_token(&self) -> String {
        let start = self.reader.get_position().min(self.data.len());
        // step back to the start of a partially read token
        let start = self.data[..start]
            .iter()
            .rposition(|x| x.is_ascii_whitespace())
            .map_or(0, |x| x + 1)
            .max(2.min(start));

        let token = self.data[start..]
            .iter()
            .take_while(|x| !x.is_ascii_whitespace())
            .take(32)
            .copied()
            .collect::<Vec<u8>>();

        String::from_utf8_lossy(&token).into_owned()
    }
}

/// Decode a Netpbm file with default options
pub fn decode(data: &[u8]) -> Result<Raster, NetpbmDecodeErrors> {
    NetpbmDecoder::new(data).decode()
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ZByteReader<&[u8]>) {
    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // comment
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
}

/// Read a run of ascii digits
///
/// Returns `None` if the run is empty or does not fit a `u64`.
/// The first non-digit byte is left in the stream.
fn read_decimal(byte_stream: &mut ZByteReader<&[u8]>) -> Option<u64> {
    let mut value = 0_u64;
    let mut digits = 0;
    let mut overflow = false;

    while !byte_stream.eof() {
        let byte = byte_stream.get_u8();

        if byte.is_ascii_digit() {
            digits += 1;
            match value
                .checked_mul(10)
                .and_then(|x| x.checked_add(u64::from(byte - b'0')))
            {
                Some(v) => value = v,
                None => overflow = true
            }
        } else {
            // rewind to the previous byte
            byte_stream.rewind(1);
            break;
        }
    }
    if digits == 0 || overflow {
        return None;
    }
    Some(value)
}

/// Whether the stream is at a token boundary, whitespace, a comment or eof
fn token_ends_here(byte_stream: &mut ZByteReader<&[u8]>) -> bool {
    if byte_stream.eof() {
        return true;
    }
    let byte = byte_stream.get_u8();
    byte_stream.rewind(1);

    byte.is_ascii_whitespace() || byte == b'#'
}
