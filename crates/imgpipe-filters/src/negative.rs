/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;
use imgpipe_core::pixel::MAX_CHANNEL_VALUE;

use crate::traits::OperationsTrait;

/// Invert an image
///
/// The formula for inverting a 8 bit pixel
///  is `pixel[x,y] = 255-pixel[x,y]`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Negative;

impl Negative {
    #[must_use]
    pub fn new() -> Negative {
        Negative
    }
}

impl OperationsTrait for Negative {
    fn name(&self) -> &'static str {
        "Negative"
    }

    fn apply(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .iter()
            .map(|pix| pix.map(|channel| MAX_CHANNEL_VALUE - channel))
            .collect();

        Image::from_pixels(pixels, width, height)
    }
}
