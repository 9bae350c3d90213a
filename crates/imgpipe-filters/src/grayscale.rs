/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an image to shades of gray
//!
//! Uses the Rec. 601 luma weights
//!
//! ```text
//! Y = 0.299 R + 0.587 G + 0.114 B
//! ```
//! rounded to the nearest integer, every channel of the output pixel is set to `Y`.
use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;
use imgpipe_core::pixel::{Pixel, MAX_CHANNEL_VALUE, MIN_CHANNEL_VALUE};

use crate::traits::OperationsTrait;

const RED_WEIGHT: f32 = 0.299;
const GREEN_WEIGHT: f32 = 0.587;
const BLUE_WEIGHT: f32 = 0.114;

/// Luma of a single pixel
#[inline]
pub fn luma(pixel: Pixel) -> u8 {
    let [r, g, b] = pixel.channels();
    let value = RED_WEIGHT * f32::from(r) + GREEN_WEIGHT * f32::from(g) + BLUE_WEIGHT * f32::from(b);

    value
        .round()
        .clamp(f32::from(MIN_CHANNEL_VALUE), f32::from(MAX_CHANNEL_VALUE)) as u8
}

/// Convert an RGB image to grayscale, keeping three channels
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Grayscale
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn apply(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .iter()
            .map(|pix| Pixel::gray(luma(*pix)))
            .collect();

        Image::from_pixels(pixels, width, height)
    }
}

#[cfg(test)]
mod tests {
    use imgpipe_core::image::Image;
    use imgpipe_core::pixel::Pixel;
    use nanorand::Rng;

    use crate::grayscale::{luma, Grayscale};
    use crate::traits::OperationsTrait;

    #[test]
    fn luma_of_primaries() {
        assert_eq!(luma(Pixel::WHITE), 255);
        assert_eq!(luma(Pixel::BLACK), 0);
        // 76.245
        assert_eq!(luma(Pixel::new(255, 0, 0)), 76);
        // 149.685
        assert_eq!(luma(Pixel::new(0, 255, 0)), 150);
        // 29.07
        assert_eq!(luma(Pixel::new(0, 0, 255)), 29);
    }

    #[test]
    fn grayscale_is_idempotent() {
        let mut rng = nanorand::WyRand::new();
        let image = Image::from_fn(20, 20, |_, _| {
            Pixel::new(rng.generate(), rng.generate(), rng.generate())
        })
        .unwrap();

        let once = Grayscale.apply(&image).unwrap();
        let twice = Grayscale.apply(&once).unwrap();

        assert_eq!(once, twice);
        for pix in once.pixels() {
            let [r, g, b] = pix.channels();
            assert!(r == g && g == b);
        }
    }
}
