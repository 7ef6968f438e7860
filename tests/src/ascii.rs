/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use asciipnm_core::FormatKind;
use asciipnm_glyph::{atlas, to_ascii, ASCII_PALETTE};
use asciipnm_imageprocs::grid::image_grid;
use asciipnm_imageprocs::pad::BorderColor;
use asciipnm_imageprocs::resize::Enlarge;
use asciipnm_imageprocs::traits::RasterOperation;
use asciipnm_netpbm::{decode, encode, Encoding};

use crate::{hash, load_entries, netpbm_path};

#[test]
fn test_ascii_art_pipeline() {
    let default_path = netpbm_path();
    let glyphs = atlas().unwrap();

    for path in load_entries()
        .iter()
        .filter(|entry| entry.kind.to_kind() == FormatKind::Grayscale)
    {
        let raster = decode(&read(default_path.join(&path.name)).unwrap()).unwrap();
        let art = to_ascii(&raster).unwrap();

        assert_eq!((art.width(), art.height()), raster.dimensions());
        assert!(art.symbols().iter().all(|c| ASCII_PALETTE.contains(*c)));

        let rendered = art.render().unwrap();

        assert_eq!(rendered.kind(), FormatKind::Bitmap);
        assert_eq!(
            rendered.dimensions(),
            (
                raster.width() * glyphs.glyph_width(),
                raster.height() * glyphs.glyph_height()
            )
        );
        // rendered output must survive a trip through the packed bitmap format
        let packed = encode(&rendered, Encoding::Binary).unwrap();
        assert_eq!(hash(&decode(&packed).unwrap()), hash(&rendered));
    }
}

#[test]
fn test_ascii_art_is_deterministic() {
    let contents = read(netpbm_path().join("gradient_raw.pgm")).unwrap();

    let first = to_ascii(&decode(&contents).unwrap()).unwrap();
    let second = to_ascii(&decode(&contents).unwrap()).unwrap();

    assert_eq!(first.to_text(), second.to_text());
}

#[test]
fn test_grid_of_fixtures() {
    let default_path = netpbm_path();

    let ascii = decode(&read(default_path.join("depth15_ascii.pgm")).unwrap()).unwrap();
    let raw = decode(&read(default_path.join("depth15_raw.pgm")).unwrap()).unwrap();

    let grid = image_grid(&[ascii.clone(), raw], 2, 1, 1, BorderColor::White).unwrap();

    assert_eq!(grid.dimensions(), (2 * 7 + 3, 3 + 2));
    assert_eq!(grid.get(0, 0, 0), 15);
    assert_eq!(grid.get(1 + 6, 1 + 2, 0), ascii.get(6, 2, 0));
    assert_eq!(grid.get(2 + 7 + 6, 1 + 2, 0), ascii.get(6, 2, 0));

    let enlarged = Enlarge::new(2).execute(&grid).unwrap();
    assert_eq!(enlarged.dimensions(), (34, 10));
}
