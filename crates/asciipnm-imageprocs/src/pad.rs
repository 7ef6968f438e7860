/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Borders around rasters
use asciipnm_core::{FormatKind, Raster};

use crate::errors::ProcsErrors;
use crate::traits::RasterOperation;

/// Color of a border or grid margin
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BorderColor {
    White,
    Black
}

impl BorderColor {
    /// The sample value drawing this color in a raster of `kind`
    ///
    /// Bitmaps store ink as `1`, so white is `0` there. Elsewhere white is the
    /// max value.
    pub const fn sample(self, kind: FormatKind, max_value: u32) -> u32 {
        match (self, kind) {
            (BorderColor::White, FormatKind::Bitmap) => 0,
            (BorderColor::Black, FormatKind::Bitmap) => 1,
            (BorderColor::White, _) => max_value,
            (BorderColor::Black, _) => 0
        }
    }
}

/// Pad pixels creating a constant border around actual pixels
///
///```text
///    padded width ──────────────────────────────►
/// │ ┌─────────────────────────────────────┐
/// │ │          PADDING                    │
/// │ │     ┌────────────────────┐          │
/// │ │     │                    │          │
/// │ │     │   IMAGE            │          │
/// │ │     │                    │          │
/// │ │     └────────────────────┘          │
/// ▼ │                                     │
///   └─────────────────────────────────────┘
/// ```
///
/// # Arguments
///  - pixels: Un-padded raw pixels, `width * height * channels` of them
///  - width, height: Dimensions of raw pixels
///  - channels: Samples per pixel
///  - pad_x: Columns added on the left and on the right
///  - pad_y: Rows added on the top and on the bottom
///  - value: Sample value of the padding
///
/// # Returns
///  - A vec containing padded pixels.
pub fn pad_constant(
    pixels: &[u32], width: usize, height: usize, channels: usize, pad_x: usize, pad_y: usize,
    value: u32
) -> Vec<u32> {
    let padded_w = (width + pad_x * 2) * channels;
    let padded_h = height + pad_y * 2;

    let mut out_pixels = vec![value; padded_h * padded_w];

    let start = pad_x * channels;
    let end = padded_w - pad_x * channels;

    for (out, in_pix) in out_pixels
        .chunks_exact_mut(padded_w)
        .skip(pad_y)
        .take(height)
        .zip(pixels.chunks_exact(width * channels))
    {
        out[start..end].copy_from_slice(in_pix);
    }
    out_pixels
}

/// Surround a raster with a border of `width` pixels on every side
#[derive(Copy, Clone, Debug)]
pub struct Border {
    width: usize,
    color: BorderColor
}

impl Border {
    pub fn new(width: usize, color: BorderColor) -> Border {
        Border { width, color }
    }
}

impl RasterOperation for Border {
    fn name(&self) -> &'static str {
        "border"
    }

    fn execute(&self, raster: &Raster) -> Result<Raster, ProcsErrors> {
        let value = self.color.sample(raster.kind(), raster.max_value());

        let pixels = pad_constant(
            raster.samples(),
            raster.width(),
            raster.height(),
            raster.num_channels(),
            self.width,
            self.width,
            value
        );

        Ok(Raster::new(
            raster.kind(),
            raster.width() + 2 * self.width,
            raster.height() + 2 * self.width,
            raster.max_value(),
            pixels
        )?)
    }
}

#[cfg(test)]
mod tests {
    use asciipnm_core::{FormatKind, Raster};

    use crate::pad::{pad_constant, Border, BorderColor};
    use crate::traits::RasterOperation;

    #[test]
    fn constant_pad_layout() {
        let padded = pad_constant(&[1, 2, 3, 4], 2, 2, 1, 1, 1, 9);

        assert_eq!(
            padded,
            [
                9, 9, 9, 9, //
                9, 1, 2, 9, //
                9, 3, 4, 9, //
                9, 9, 9, 9
            ]
        );
    }

    #[test]
    fn border_colors_follow_kind() {
        let gray = Raster::filled(FormatKind::Grayscale, 1, 1, 15, 7).unwrap();
        let white = Border::new(1, BorderColor::White).execute(&gray).unwrap();

        assert_eq!(white.get(0, 0, 0), 15);
        assert_eq!(white.get(1, 1, 0), 7);

        let bitmap = Raster::filled(FormatKind::Bitmap, 1, 1, 1, 1).unwrap();
        let white = Border::new(2, BorderColor::White).execute(&bitmap).unwrap();

        assert_eq!(white.dimensions(), (5, 5));
        assert_eq!(white.samples().iter().sum::<u32>(), 1);
    }

    #[test]
    fn color_border_fills_every_channel() {
        let color = Raster::new(FormatKind::Color, 1, 1, 255, vec![1, 2, 3]).unwrap();
        let framed = Border::new(1, BorderColor::Black).execute(&color).unwrap();

        assert_eq!(framed.dimensions(), (3, 3));
        assert_eq!(framed.get(1, 1, 1), 2);
        assert_eq!(framed.get(2, 2, 2), 0);
        assert_eq!(framed.samples().len(), 27);
    }

    #[test]
    fn zero_border_is_identity() {
        let raster = Raster::new(FormatKind::Grayscale, 2, 1, 255, vec![4, 5]).unwrap();

        assert_eq!(Border::new(0, BorderColor::White).execute(&raster).unwrap(), raster);
    }
}
