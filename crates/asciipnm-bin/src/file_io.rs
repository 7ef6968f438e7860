/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::{stdin, BufRead, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{info, trace};

use crate::errors::CliErrors;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Read a whole input file into memory
pub fn read_input(path: &OsStr) -> Result<Vec<u8>, CliErrors> {
    let data = std::fs::read(path)?;
    trace!("Read {} bytes from {:?}", data.len(), path);

    Ok(data)
}

/// Write `data` to `path` and log a line describing the written file
pub fn write_output(path: &OsStr, data: &[u8], started: Instant) -> Result<(), CliErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(data)?;
    writer.flush()?;

    let name = Path::new(path)
        .file_name()
        .unwrap_or(path)
        .to_string_lossy();

    info!("{}", file_log_line(&name, started.elapsed(), data.len() as u64));
    Ok(())
}

/// Format a file size with decimal units, e.g. `12KB`
///
/// Each step divides by 1000 and rounds half to even.
pub fn human_size(mut size: u64) -> String {
    let mut unit = 0;

    while size >= 1000 && unit < SIZE_UNITS.len() - 1 {
        let (quotient, remainder) = (size / 1000, size % 1000);

        size = if remainder > 500 || (remainder == 500 && quotient % 2 == 1) {
            quotient + 1
        } else {
            quotient
        };
        unit += 1;
    }
    format!("{size}{}", SIZE_UNITS[unit])
}

/// The line logged after a file is written: `name | 0.123s | 12KB`
pub fn file_log_line(name: &str, elapsed: Duration, size: u64) -> String {
    format!(
        "{name} | {:.3}s | {}",
        elapsed.as_secs_f64(),
        human_size(size)
    )
}

/// Check that an input exists and an output may be written
pub fn verify_file_paths(input: &OsStr, output: &OsStr, override_files: bool) -> Result<(), CliErrors> {
    if input == output {
        return Err(CliErrors::GenericString(format!(
            "Cannot use {input:?} as both input and output"
        )));
    }
    let in_path = Path::new(input);
    let out_path = Path::new(output);

    if !in_path.exists() {
        return Err(CliErrors::GenericString(format!(
            "Path {in_path:?}, does not exist"
        )));
    }

    if !in_path.is_file() {
        return Err(CliErrors::GenericString(format!(
            "Path {in_path:?} is not a file"
        )));
    }

    if out_path.exists() {
        if override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(CliErrors::GenericString(format!(
                    "Not overwriting file {out_path:?}"
                )));
            }
        }
    }
    Ok(())
}
