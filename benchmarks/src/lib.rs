/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use imgpipe_core::image::Image;
use imgpipe_core::pixel::Pixel;

/// Width and height of the images benchmarks run on
pub const BENCH_DIMENSIONS: (usize, usize) = (1920, 1080);

/// A noisy looking but deterministic image, so runs are comparable
pub fn bench_image() -> Image {
    let (width, height) = BENCH_DIMENSIONS;
    let pattern = Image::from_fn(width, height, |row, col| {
        let seed = (row * 31 + col * 17) ^ (row * col);
        Pixel::new(seed as u8, (seed >> 3) as u8, (seed >> 6) as u8)
    });
    pattern.unwrap()
}
