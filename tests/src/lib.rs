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

use imgpipe_core::image::Image;
use imgpipe_core::pixel::Pixel;
use imgpipe_filters::filter::FilterSpec;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod pipelines;

#[derive(Clone, Deserialize, Debug)]
pub struct JsonFilter {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>
}

impl JsonFilter {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec {
            name: self.name.clone(),
            args: self.args.clone()
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    /// Source image size, `[width, height]`
    pub size:       [usize; 2],
    pub filters:    Vec<JsonFilter>,
    /// Output size, `[width, height]`
    pub expected:   [usize; 2],
    /// Expected top left pixel of the output
    pub top_left:   Option<Pixel>,
    /// Output may only contain black and white
    #[serde(default)]
    pub binary:     bool,
    pub comment:    Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_owned()
}

/// A deterministic test pattern, the top left pixel is `(0, 0, 255)`
pub fn test_pattern(width: usize, height: usize) -> Image {
    let pattern = Image::from_fn(width, height, |row, col| {
        Pixel::new(
            ((row * 7 + col * 3) % 256) as u8,
            ((row * col) % 256) as u8,
            (255 - (row + col) % 256) as u8
        )
    });
    pattern.unwrap()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
