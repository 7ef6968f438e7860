/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_imageprocs::pad::BorderColor;
use asciipnm_netpbm::Encoding;
use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};

/// Netpbm encoding picked on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IEncoding {
    Ascii,
    Binary
}

impl IEncoding {
    pub const fn to_encoding(self) -> Encoding {
        match self {
            IEncoding::Ascii => Encoding::Ascii,
            IEncoding::Binary => Encoding::Binary
        }
    }
}

impl ValueEnum for IEncoding {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Ascii, Self::Binary]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Ascii => PossibleValue::new("ascii").help("Plain text samples, P1 to P3"),
            Self::Binary => PossibleValue::new("binary").help("Raw samples, P4 to P6")
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IBorderColor {
    White,
    Black
}

impl IBorderColor {
    pub const fn to_border_color(self) -> BorderColor {
        match self {
            IBorderColor::White => BorderColor::White,
            IBorderColor::Black => BorderColor::Black
        }
    }
}

impl ValueEnum for IBorderColor {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::White, Self::Black]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::White => PossibleValue::new("white"),
            Self::Black => PossibleValue::new("black")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("asciipnm")
        .about("Convert Netpbm images, reduce their depth and turn them into ASCII art")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .long_help("Output to write the data to.\nThe format is picked from the extension: pbm, pgm, ppm and pnm write Netpbm,\npng writes PNG and txt writes ASCII art as text")
            .action(ArgAction::Append)
            .required_unless_present("probe"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image metadata as JSON and exit"))
        .arg(Arg::new("encoding")
            .long("encoding")
            .help_heading("OUTPUT")
            .help("Netpbm encoding of the output")
            .value_parser(value_parser!(IEncoding))
            .default_value("binary"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images accepted by the decoder")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images accepted by the decoder")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat data after the last sample as an error"))
        .arg(Arg::new("yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Overwrite existing output files"))
        .arg(Arg::new("depth")
            .long("depth")
            .help_heading("OPERATIONS")
            .help("Reduce the max value of the image, 1 gives a bitmap")
            .value_parser(value_parser!(u32).range(1..=65535)))
        .arg(Arg::new("enlarge")
            .long("enlarge")
            .help_heading("OPERATIONS")
            .help("Enlarge the image by an integer factor")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("border")
            .long("border")
            .help_heading("OPERATIONS")
            .help("Add a border of the given width")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("border-color")
            .long("border-color")
            .help_heading("OPERATIONS")
            .help("Color of the border")
            .value_parser(value_parser!(IBorderColor))
            .default_value("white"))
        .arg(Arg::new("ascii")
            .long("ascii")
            .action(ArgAction::SetTrue)
            .help_heading("ASCII ART")
            .help("Convert the image to ASCII art after the operations run")
            .long_help("Convert a grayscale image to ASCII art, one glyph per pixel.\nWith a txt output the glyphs are written as text, otherwise they are rendered into a bitmap"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::{create_cmd_args, IBorderColor, IEncoding};

    #[test]
    fn command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn parse_defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["asciipnm", "-i", "a.pgm", "-o", "b.pbm"])
            .unwrap();

        assert_eq!(
            matches.get_one::<IEncoding>("encoding").copied(),
            Some(IEncoding::Binary)
        );
        assert_eq!(
            matches.get_one::<IBorderColor>("border-color").copied(),
            Some(IBorderColor::White)
        );
        assert!(!matches.get_flag("ascii"));
    }

    #[test]
    fn probe_does_not_need_output() {
        assert!(create_cmd_args()
            .try_get_matches_from(["asciipnm", "-i", "a.pgm", "--probe"])
            .is_ok());
        assert!(create_cmd_args()
            .try_get_matches_from(["asciipnm", "-i", "a.pgm"])
            .is_err());
    }

    #[test]
    fn depth_zero_is_rejected() {
        assert!(create_cmd_args()
            .try_get_matches_from(["asciipnm", "-i", "a", "-o", "b", "--depth", "0"])
            .is_err());
    }
}
