/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Symbols used for ASCII art, from sparsest to densest
///
/// The two leading blanks are intentional, they spend two levels
/// on near white regions.
pub const ASCII_PALETTE: &str = "  -~:;=!*#$@";

/// Symbols drawn in the embedded glyph image, left to right
pub const ATLAS_PALETTE: &str = " .,-~:;=!*#$@";

/// Blank columns added on both sides of every glyph slice
///
/// Matched to the 5x7 glyphs of `resources/glyphs.pbm`, one column per side
/// keeps neighbouring symbols apart without stretching the text too wide.
/// Wider glyph sets need a different value.
pub const GLYPH_PADDING: usize = 1;

/// Reference image holding every glyph of [`ATLAS_PALETTE`] side by side
pub(crate) const GLYPH_SOURCE: &[u8] = include_bytes!("../resources/glyphs.pbm");

#[cfg(test)]
mod tests {
    use crate::{ASCII_PALETTE, ATLAS_PALETTE};

    #[test]
    fn ascii_palette_is_drawable() {
        assert_eq!(ASCII_PALETTE.chars().count(), 12);
        assert!(ASCII_PALETTE.chars().all(|c| ATLAS_PALETTE.contains(c)));
    }
}
