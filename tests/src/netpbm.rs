/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use asciipnm_netpbm::{decode, encode, Encoding, NetpbmDecoder};

use crate::{hash, load_entries, netpbm_path};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_netpbm() {
    let paths = load_entries();
    let default_path = netpbm_path();

    let mut error = false;
    let mut files = Vec::new();

    for path in &paths {
        let file_name = default_path.join(&path.name);
        let pair_name = default_path.join(&path.pair);

        let contents = read(&file_name).unwrap();

        let mut decoder = NetpbmDecoder::new(&contents);
        decoder.read_headers().unwrap();

        let format = decoder.get_format().unwrap();
        assert_eq!(format.encoding, path.encoding.to_encoding(), "{:?}", path);
        assert_eq!(format.kind, path.kind.to_kind(), "{:?}", path);

        let raster = decoder.decode().unwrap();

        assert_eq!(raster.dimensions(), (path.width, path.height), "{:?}", path);
        assert_eq!(raster.max_value(), path.max_value, "{:?}", path);

        let sum: u64 = raster.samples().iter().map(|x| u64::from(*x)).sum();

        // the other encoding of the same image must decode to the same samples
        let pair = decode(&read(&pair_name).unwrap()).unwrap();

        if sum != path.sample_sum || hash(&raster) != hash(&pair) {
            error = true;
            files.push(path.to_owned());
            let err = format!(
                "Sample mismatch for file {:?}\nExpected sum {} but found {}\nConfig:{:#?}",
                file_name, path.sample_sum, sum, path
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

#[test]
fn test_netpbm_reencode() {
    let default_path = netpbm_path();

    for path in &load_entries() {
        let raster = decode(&read(default_path.join(&path.name)).unwrap()).unwrap();

        for encoding in [Encoding::Ascii, Encoding::Binary] {
            let encoded = encode(&raster, encoding).unwrap();
            let decoded = decode(&encoded).unwrap();

            assert_eq!(hash(&decoded), hash(&raster), "{} as {:?}", path.name, encoding);
            assert_eq!(decoded.kind(), raster.kind());
        }
    }
}

#[test]
fn test_binary_files_match_written_bytes() {
    // raw bodies written by the encoder match the corpus byte for byte
    let default_path = netpbm_path();

    for path in load_entries()
        .iter()
        .filter(|entry| entry.encoding.to_encoding() == Encoding::Binary)
    {
        let contents = read(default_path.join(&path.name)).unwrap();
        let raster = decode(&contents).unwrap();

        let encoded = encode(&raster, Encoding::Binary).unwrap();

        let header_len = |data: &[u8]| data.len() - raster_body_len(&raster);

        assert_eq!(
            &encoded[header_len(&encoded)..],
            &contents[header_len(&contents)..],
            "{}",
            path.name
        );
    }
}

fn raster_body_len(raster: &asciipnm_core::Raster) -> usize {
    use asciipnm_core::FormatKind;

    match raster.kind() {
        FormatKind::Bitmap => raster.width().div_ceil(8) * raster.height(),
        _ => {
            let bytes = if raster.max_value() > 255 { 2 } else { 1 };
            raster.samples().len() * bytes
        }
    }
}
