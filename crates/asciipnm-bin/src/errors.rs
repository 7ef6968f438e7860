/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use asciipnm_glyph::GlyphErrors;
use asciipnm_imageprocs::errors::ProcsErrors;
use asciipnm_netpbm::{NetpbmDecodeErrors, NetpbmEncodeErrors};

/// Errors that stop a workflow
pub enum CliErrors {
    Decode(NetpbmDecodeErrors),
    Encode(NetpbmEncodeErrors),
    Glyph(GlyphErrors),
    Operation(ProcsErrors),
    IoErrors(std::io::Error),
    GenericString(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CliErrors::Decode(err) => writeln!(f, "Decoding failed: {err:?}"),
            CliErrors::Encode(err) => writeln!(f, "Encoding failed: {err:?}"),
            CliErrors::Glyph(err) => writeln!(f, "ASCII art failed: {err:?}"),
            CliErrors::Operation(err) => writeln!(f, "Operation failed: {err:?}"),
            CliErrors::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            CliErrors::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<NetpbmDecodeErrors> for CliErrors {
    fn from(value: NetpbmDecodeErrors) -> Self {
        CliErrors::Decode(value)
    }
}

impl From<NetpbmEncodeErrors> for CliErrors {
    fn from(value: NetpbmEncodeErrors) -> Self {
        CliErrors::Encode(value)
    }
}

impl From<GlyphErrors> for CliErrors {
    fn from(value: GlyphErrors) -> Self {
        CliErrors::Glyph(value)
    }
}

impl From<ProcsErrors> for CliErrors {
    fn from(value: ProcsErrors) -> Self {
        CliErrors::Operation(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::IoErrors(value)
    }
}

impl From<String> for CliErrors {
    fn from(value: String) -> Self {
        CliErrors::GenericString(value)
    }
}
