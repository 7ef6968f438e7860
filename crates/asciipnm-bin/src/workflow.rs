/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::path::Path;
use std::time::Instant;

use asciipnm_core::Raster;
use asciipnm_glyph::to_ascii;
use asciipnm_imageprocs::traits::RasterOperation;
use asciipnm_netpbm::NetpbmDecoder;
use clap::ArgMatches;
use log::{debug, info, warn};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{get_decoder_options, operations};
use crate::errors::CliErrors;
use crate::file_io::{read_input, verify_file_paths, write_output};
use crate::png::encode_png;

/// What an output file holds, picked from its extension
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// Netpbm with the given extension, `pnm` accepts any kind
    Netpbm(&'static str),
    Png,
    Text
}

impl OutputFormat {
    pub fn from_path(path: &OsStr) -> Result<OutputFormat, CliErrors> {
        let extension = Path::new(path)
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pbm" => Ok(OutputFormat::Netpbm("pbm")),
            "pgm" => Ok(OutputFormat::Netpbm("pgm")),
            "ppm" => Ok(OutputFormat::Netpbm("ppm")),
            "pnm" => Ok(OutputFormat::Netpbm("pnm")),
            "png" => Ok(OutputFormat::Png),
            "txt" => Ok(OutputFormat::Text),
            _ => Err(CliErrors::GenericString(format!(
                "Cannot pick an output format for {path:?}, use pbm, pgm, ppm, pnm, png or txt"
            )))
        }
    }
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    info!("Creating workflows from input");

    let inputs: Vec<&OsStr> = args.get_raw("in").into_iter().flatten().collect();
    let outputs: Vec<&OsStr> = args.get_raw("out").into_iter().flatten().collect();

    if inputs.len() != outputs.len() {
        return Err(CliErrors::GenericString(format!(
            "Got {} inputs but {} outputs, each input needs one output",
            inputs.len(),
            outputs.len()
        )));
    }
    let operations = operations::get_operations(args);

    for (in_file, out_file) in inputs.into_iter().zip(outputs) {
        let started = Instant::now();

        verify_file_paths(in_file, out_file, cmd_opts.override_files)?;

        let format = OutputFormat::from_path(out_file)?;
        let data = read_input(in_file)?;

        debug!("Treating {:?} as a {:?} output", out_file, format);

        let output = convert_buffer(&data, &operations, cmd_opts, format)?;

        write_output(out_file, &output, started)?;
    }

    Ok(())
}

/// Decode `data`, run the operations and encode the result in `format`
pub fn convert_buffer(
    data: &[u8], operations: &[Box<dyn RasterOperation>], cmd_opts: &CmdOptions,
    format: OutputFormat
) -> Result<Vec<u8>, CliErrors> {
    let mut decoder = NetpbmDecoder::new_with_options(get_decoder_options(cmd_opts), data);
    let mut raster = decoder.decode()?;

    for operation in operations {
        let now = Instant::now();
        raster = operation.execute(&raster)?;

        debug!(
            "Finished running `{}` in {} ms",
            operation.name(),
            now.elapsed().as_millis()
        );
    }

    if cmd_opts.ascii_art {
        let art = to_ascii(&raster)?;

        if format == OutputFormat::Text {
            return Ok(art.to_text().into_bytes());
        }
        raster = art.render()?;
    } else if format == OutputFormat::Text {
        return Err(CliErrors::GenericString(
            "Text output needs --ascii".to_string()
        ));
    }

    encode_raster(&raster, cmd_opts, format)
}

fn encode_raster(
    raster: &Raster, cmd_opts: &CmdOptions, format: OutputFormat
) -> Result<Vec<u8>, CliErrors> {
    match format {
        OutputFormat::Netpbm(extension) => {
            if extension != "pnm" && extension != raster.kind().extension() {
                warn!(
                    "Writing a {} image into a .{} file, the usual extension is .{}",
                    raster.kind().name(),
                    extension,
                    raster.kind().extension()
                );
            }
            Ok(asciipnm_netpbm::encode(raster, cmd_opts.encoding)?)
        }
        OutputFormat::Png => Ok(encode_png(raster)),
        OutputFormat::Text => Err(CliErrors::GenericString(
            "Only ASCII art can be written as text".to_string()
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use asciipnm_imageprocs::pad::{Border, BorderColor};
    use asciipnm_imageprocs::resize::Enlarge;
    use asciipnm_imageprocs::traits::RasterOperation;
    use asciipnm_netpbm::{decode, Encoding};

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::errors::CliErrors;
    use crate::workflow::{convert_buffer, OutputFormat};

    const GRADIENT: &[u8] = b"P2\n2 2\n255\n0 85 170 255\n";

    #[test]
    fn output_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(OsStr::new("a/b.PGM")).unwrap(),
            OutputFormat::Netpbm("pgm")
        );
        assert_eq!(
            OutputFormat::from_path(OsStr::new("b.txt")).unwrap(),
            OutputFormat::Text
        );
        assert!(OutputFormat::from_path(OsStr::new("b.jpg")).is_err());
        assert!(OutputFormat::from_path(OsStr::new("b")).is_err());
    }

    #[test]
    fn ascii_art_as_text() {
        let mut options = CmdOptions::new();
        options.ascii_art = true;

        let text = convert_buffer(GRADIENT, &[], &options, OutputFormat::Text).unwrap();

        assert_eq!(text, b"  ~\n! @\n");
    }

    #[test]
    fn ascii_art_rendered_as_bitmap() {
        let mut options = CmdOptions::new();
        options.ascii_art = true;
        options.encoding = Encoding::Ascii;

        let out = convert_buffer(GRADIENT, &[], &options, OutputFormat::Netpbm("pbm")).unwrap();

        assert!(out.starts_with(b"P1\n"));
        let glyph = asciipnm_glyph::atlas().unwrap();
        let raster = decode(&out).unwrap();

        assert_eq!(
            raster.dimensions(),
            (2 * glyph.glyph_width(), 2 * glyph.glyph_height())
        );
    }

    #[test]
    fn operations_run_in_order() {
        let operations: Vec<Box<dyn RasterOperation>> = vec![
            Box::new(Enlarge::new(2)),
            Box::new(Border::new(1, BorderColor::Black))
        ];
        let options = CmdOptions::new();

        let out =
            convert_buffer(GRADIENT, &operations, &options, OutputFormat::Netpbm("pgm")).unwrap();
        let raster = decode(&out).unwrap();

        assert_eq!(raster.dimensions(), (6, 6));
        assert_eq!(raster.get(0, 0, 0), 0);
        assert_eq!(raster.get(4, 4, 0), 255);
    }

    #[test]
    fn text_needs_ascii_flag() {
        let options = CmdOptions::new();

        assert!(matches!(
            convert_buffer(GRADIENT, &[], &options, OutputFormat::Text),
            Err(CliErrors::GenericString(_))
        ));
    }

    #[test]
    fn decoder_limits_apply() {
        let mut options = CmdOptions::new();
        options.max_width = 1;

        assert!(matches!(
            convert_buffer(GRADIENT, &[], &options, OutputFormat::Png),
            Err(CliErrors::Decode(_))
        ));
    }
}
