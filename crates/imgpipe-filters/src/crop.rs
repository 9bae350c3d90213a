/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Crop an image
//!
//! ```text
//!    width ──────────────────────────────►
//! │ ┌────────────────────┬────────────────┐
//! │ │                    │                │
//! │ │  CROPPED IMAGE     │                │
//! │ │                    │                │
//! │ │         out height │                │
//! │ ├────────────────────┘                │
//! │ │   out width                         │
//! ▼ │                                     │
//!   └─────────────────────────────────────┘
//! ```
//! The crop is anchored at the top left corner. Requested sizes larger
//! than the image are reduced to the image size, the output is never padded.
use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;

use crate::traits::OperationsTrait;

/// Keep the top left `width x height` region of an image
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Crop {
    width:  usize,
    height: usize
}

impl Crop {
    /// Create a new crop operation
    ///
    /// # Arguments
    /// - width: The width of the new cropped out image
    /// - height: The height of the new cropped out image.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Crop {
        Crop { width, height }
    }
}

impl OperationsTrait for Crop {
    fn name(&self) -> &'static str {
        "Crop"
    }

    fn apply(&self, image: &Image) -> Result<Image, ImageErrors> {
        let out_width = self.width.min(image.width());
        let out_height = self.height.min(image.height());

        if out_width == 0 || out_height == 0 {
            return Err(ImageErrors::ZeroDimensions(out_width, out_height));
        }
        let pixels = image
            .rows()
            .take(out_height)
            .flat_map(|row| &row[..out_width])
            .copied()
            .collect();

        Image::from_pixels(pixels, out_width, out_height)
    }
}
