/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;

use crate::traits::OperationsTrait;

/// Pixelate an image
///
/// The image is split into `pixel_size x pixel_size` blocks starting
/// from the top left corner, and every pixel in a block takes the value of the
/// block's top left pixel. Blocks on the right and bottom edges may be smaller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixelate {
    pixel_size: usize
}

impl Pixelate {
    /// Create a new pixelate filter
    ///
    /// A `pixel_size` of zero is treated as one.
    #[must_use]
    pub fn new(pixel_size: usize) -> Pixelate {
        Pixelate {
            pixel_size: pixel_size.max(1)
        }
    }
}

impl OperationsTrait for Pixelate {
    fn name(&self) -> &'static str {
        "Pixelate"
    }

    fn apply(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();
        let size = self.pixel_size;
        let pixels = image.pixels();

        Image::from_fn(width, height, |row, col| {
            let anchor_row = row - row % size;
            let anchor_col = col - col % size;

            pixels[anchor_row * width + anchor_col]
        })
    }
}
