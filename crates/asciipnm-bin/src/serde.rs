/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use asciipnm_netpbm::NetpbmFormat;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header details of one Netpbm file
pub struct Metadata {
    file:      OsString,
    size:      u64,
    format:    NetpbmFormat,
    width:     usize,
    height:    usize,
    max_value: u32
}

impl Metadata {
    pub fn new(
        file: OsString, size: u64, format: NetpbmFormat, (width, height): (usize, usize),
        max_value: u32
    ) -> Metadata {
        Metadata {
            file,
            size,
            format,
            width,
            height,
            max_value
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 8)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("format", &self.format.to_string())?;
        state.serialize_field("encoding", self.format.encoding.name())?;
        state.serialize_field("kind", self.format.kind.name())?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("max_value", &self.max_value)?;

        state.end()
    }
}
