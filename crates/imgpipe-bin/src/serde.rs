/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header information of a BMP file, printed by `--probe`
pub struct Metadata<'a> {
    pub file:             &'a Path,
    /// Bytes on disk
    pub file_size:        u64,
    /// File size as claimed by the header
    pub header_file_size: u32,
    pub width:            usize,
    pub height:           usize,
    pub bit_depth:        u16,
    pub info_header_size: u32,
    pub top_down:         bool
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 8)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("header_file_size", &self.header_file_size)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("bit_depth", &self.bit_depth)?;
        state.serialize_field("info_header_size", &self.info_header_size)?;
        state.serialize_field("top_down", &self.top_down)?;

        state.end()
    }
}
