/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_netpbm::Encoding;
use clap::ArgMatches;
use log::{info, Level};

use crate::cmd_args::IEncoding;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub encoding:       Encoding,
    pub max_width:      usize,
    pub max_height:     usize,
    pub strict_mode:    bool,
    pub override_files: bool,
    pub ascii_art:      bool,
    pub probe:          bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            encoding:       Encoding::Binary,
            max_width:      1 << 14,
            max_height:     1 << 14,
            strict_mode:    false,
            override_files: false,
            ascii_art:      false,
            probe:          false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(encoding) = options.get_one::<IEncoding>("encoding") {
        cmd_options.encoding = encoding.to_encoding();
    }
    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    if options.get_flag("strict") {
        info!("Decoding in strict mode");
        cmd_options.strict_mode = true;
    }
    if options.get_flag("yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options.ascii_art = options.get_flag("ascii");
    cmd_options.probe = options.get_flag("probe");

    cmd_options
}

/// Pick the log level from the logging flags, warn when none is given
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use asciipnm_netpbm::Encoding;
    use log::Level;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::{log_level, parse_options};

    #[test]
    fn options_from_flags() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "asciipnm",
                "-i",
                "in.pgm",
                "-o",
                "out.txt",
                "--encoding",
                "ascii",
                "--max-width",
                "20",
                "--strict",
                "--ascii"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.encoding, Encoding::Ascii);
        assert_eq!(options.max_width, 20);
        assert_eq!(options.max_height, 16384);
        assert!(options.strict_mode);
        assert!(options.ascii_art);
        assert!(!options.override_files);
        assert!(!options.probe);
    }

    #[test]
    fn default_log_level_is_warn() {
        let matches = create_cmd_args()
            .try_get_matches_from(["asciipnm", "-i", "a", "-o", "b"])
            .unwrap();
        assert_eq!(log_level(&matches), Level::Warn);

        let matches = create_cmd_args()
            .try_get_matches_from(["asciipnm", "-i", "a", "-o", "b", "--trace"])
            .unwrap();
        assert_eq!(log_level(&matches), Level::Trace);
    }
}
