/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

use asciipnm_core::FormatKind;

/// How samples are laid out on the wire
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Encoding {
    /// Plain format, decimal tokens separated by whitespace
    Ascii,
    /// Raw format, packed bytes
    Binary
}

impl Encoding {
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Binary => "binary"
        }
    }
}

/// A Netpbm variant, one per magic number
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NetpbmFormat {
    pub encoding: Encoding,
    pub kind:     FormatKind
}

impl NetpbmFormat {
    /// Every format, in magic number order
    pub const ALL: [NetpbmFormat; 6] = [
        NetpbmFormat::new(Encoding::Ascii, FormatKind::Bitmap),
        NetpbmFormat::new(Encoding::Ascii, FormatKind::Grayscale),
        NetpbmFormat::new(Encoding::Ascii, FormatKind::Color),
        NetpbmFormat::new(Encoding::Binary, FormatKind::Bitmap),
        NetpbmFormat::new(Encoding::Binary, FormatKind::Grayscale),
        NetpbmFormat::new(Encoding::Binary, FormatKind::Color)
    ];

    pub const fn new(encoding: Encoding, kind: FormatKind) -> NetpbmFormat {
        NetpbmFormat { encoding, kind }
    }

    /// Map the digit following `P` in a magic number to a format
    ///
    /// Returns `None` for anything outside `b'1'..=b'6'`
    pub const fn from_magic_digit(digit: u8) -> Option<NetpbmFormat> {
        match digit {
            b'1'..=b'6' => Some(NetpbmFormat::ALL[(digit - b'1') as usize]),
            _ => None
        }
    }

    /// The magic number as an integer, `1..=6`
    pub const fn magic_number(self) -> u8 {
        let kind = match self.kind {
            FormatKind::Bitmap => 1,
            FormatKind::Grayscale => 2,
            FormatKind::Color => 3
        };
        match self.encoding {
            Encoding::Ascii => kind,
            Encoding::Binary => kind + 3
        }
    }

    /// The two magic bytes starting a file of this format
    pub const fn magic_bytes(self) -> [u8; 2] {
        [b'P', b'0' + self.magic_number()]
    }

    /// Whether the header carries a max value field
    pub const fn has_max_value(self) -> bool {
        !matches!(self.kind, FormatKind::Bitmap)
    }
}

impl Display for NetpbmFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "P{}", self.magic_number())
    }
}

#[cfg(test)]
mod tests {
    use crate::NetpbmFormat;

    #[test]
    fn magic_numbers_are_bijective() {
        for (i, format) in NetpbmFormat::ALL.iter().enumerate() {
            let digit = b'1' + i as u8;

            assert_eq!(format.magic_number(), i as u8 + 1);
            assert_eq!(NetpbmFormat::from_magic_digit(digit), Some(*format));
            assert_eq!(format.magic_bytes(), [b'P', digit]);
        }
        assert!(NetpbmFormat::from_magic_digit(b'0').is_none());
        assert!(NetpbmFormat::from_magic_digit(b'7').is_none());
    }

    #[test]
    fn display_matches_magic() {
        assert_eq!(NetpbmFormat::ALL[4].to_string(), "P5");
    }
}
