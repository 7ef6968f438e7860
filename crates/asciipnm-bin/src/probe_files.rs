/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use asciipnm_netpbm::{NetpbmDecodeErrors, NetpbmDecoder};
use clap::ArgMatches;
use log::warn;
use zune_core::options::DecoderOptions;

use crate::errors::CliErrors;
use crate::serde::Metadata;

/// Read only the headers of `data` and collect its metadata
pub fn probe_buffer(file: &OsStr, data: &[u8]) -> Result<Metadata, NetpbmDecodeErrors> {
    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::default()
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    let mut decoder = NetpbmDecoder::new_with_options(options, data);
    decoder.read_headers()?;

    match (
        decoder.get_format(),
        decoder.get_dimensions(),
        decoder.get_max_value()
    ) {
        (Some(format), Some(dimensions), Some(max_value)) => Ok(Metadata::new(
            file.to_os_string(),
            data.len() as u64,
            format,
            dimensions,
            max_value
        )),
        _ => Err(NetpbmDecodeErrors::MalformedHeader(
            "Headers were not decoded".to_string()
        ))
    }
}

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), CliErrors> {
    let Some(inputs) = args.get_raw("in") else {
        return Ok(());
    };
    for in_file in inputs {
        let data = crate::file_io::read_input(in_file)?;

        match probe_buffer(in_file, &data) {
            Ok(metadata) => {
                let json = serde_json::to_string_pretty(&metadata)
                    .map_err(|e| CliErrors::GenericString(e.to_string()))?;
                println!("{json}");
            }
            Err(err) => warn!("Could not probe {:?}: {:?}", in_file, err)
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use crate::probe_files::probe_buffer;

    #[test]
    fn probe_reads_headers_only() {
        // the body is truncated, probing must still succeed
        let metadata = probe_buffer(OsStr::new("x.pgm"), b"P5\n4000 3000\n255\n\x00").unwrap();
        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["width"], 4000);
        assert_eq!(value["height"], 3000);
        assert_eq!(value["format"], "P5");
    }

    #[test]
    fn probe_bitmap_reports_max_one() {
        let metadata = probe_buffer(OsStr::new("x.pbm"), b"P1\n2 1\n0 1\n").unwrap();
        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["max_value"], 1);
        assert_eq!(value["kind"], "bitmap");
    }

    #[test]
    fn probe_rejects_other_files() {
        assert!(probe_buffer(OsStr::new("x.png"), b"\x89PNG\r\n").is_err());
    }
}
