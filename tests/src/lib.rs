/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use asciipnm_core::{FormatKind, Raster};
use asciipnm_netpbm::Encoding;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod ascii;
mod netpbm;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Bitmap,
    Grayscale,
    Color
}

impl JsonKind {
    pub fn to_kind(self) -> FormatKind {
        match self {
            Self::Bitmap => FormatKind::Bitmap,
            Self::Grayscale => FormatKind::Grayscale,
            Self::Color => FormatKind::Color
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonEncoding {
    Ascii,
    Binary
}

impl JsonEncoding {
    pub fn to_encoding(self) -> Encoding {
        match self {
            Self::Ascii => Encoding::Ascii,
            Self::Binary => Encoding::Binary
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    /// The same image in the other encoding
    pub pair:       String,
    pub encoding:   JsonEncoding,
    pub kind:       JsonKind,
    pub width:      usize,
    pub height:     usize,
    pub max_value:  u32,
    pub sample_sum: u64,
    pub comment:    Option<String>
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

pub fn netpbm_path() -> PathBuf {
    sample_path().join("test-images/netpbm")
}

pub fn load_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/netpbm.json");

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

/// Hash of the decoded samples, wide enough to tell 16 bit samples apart
fn hash(raster: &Raster) -> u128 {
    let bytes: Vec<u8> = raster
        .samples()
        .iter()
        .flat_map(|sample| sample.to_le_bytes())
        .collect();

    xxh3_128(&bytes)
}
