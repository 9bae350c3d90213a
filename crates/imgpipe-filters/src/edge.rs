/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Edge detection
//!
//! The image is first converted to grayscale, then convolved with a laplacian
//!
//! ```text
//!  0 -1  0
//! -1  4 -1
//!  0 -1  0
//! ```
//! and every response above `threshold*255` becomes white, the rest black.
use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;
use imgpipe_core::pixel::{Pixel, MAX_CHANNEL_VALUE};

use crate::convolve::{sample, Kernel};
use crate::grayscale::Grayscale;
use crate::traits::OperationsTrait;

const LAPLACIAN_KERNEL: [[i32; 3]; 3] = [[0, -1, 0], [-1, 4, -1], [0, -1, 0]];

/// Threshold based edge detection, output is pure black and white
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeDetect {
    threshold: f64
}

impl EdgeDetect {
    /// Create a new edge detector
    ///
    /// `threshold` is a fraction of the maximum channel value and
    /// should be in `[0,1]`, the filter factory rejects anything else.
    #[must_use]
    pub fn new(threshold: f64) -> EdgeDetect {
        EdgeDetect { threshold }
    }
}

impl OperationsTrait for EdgeDetect {
    fn name(&self) -> &'static str {
        "Edge detection"
    }

    fn apply(&self, image: &Image) -> Result<Image, ImageErrors> {
        let gray = Grayscale.apply(image)?;
        let (width, height) = gray.dimensions();

        let kernel = Kernel::new_3x3(LAPLACIAN_KERNEL);
        let cutoff = self.threshold * f64::from(MAX_CHANNEL_VALUE);

        Image::from_fn(width, height, |row, col| {
            // all channels are equal after grayscale
            let [response, _, _] = sample(&kernel, &gray, row, col);

            if f64::from(response) > cutoff {
                Pixel::WHITE
            } else {
                Pixel::BLACK
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use imgpipe_core::image::Image;
    use imgpipe_core::pixel::Pixel;
    use nanorand::Rng;

    use crate::edge::EdgeDetect;
    use crate::traits::OperationsTrait;

    #[test]
    fn output_is_black_or_white() {
        let mut rng = nanorand::WyRand::new();
        let image = Image::from_fn(16, 16, |_, _| {
            Pixel::new(rng.generate(), rng.generate(), rng.generate())
        })
        .unwrap();

        for threshold in [0.0, 0.1, 0.5, 1.0] {
            let edges = EdgeDetect::new(threshold).apply(&image).unwrap();
            assert!(edges
                .pixels()
                .iter()
                .all(|pix| *pix == Pixel::WHITE || *pix == Pixel::BLACK));
        }
    }

    #[test]
    fn uniform_image_has_no_edges() {
        let image = Image::fill(Pixel::new(90, 40, 200), 5, 5).unwrap();
        let edges = EdgeDetect::new(0.0).apply(&image).unwrap();

        assert!(edges.pixels().iter().all(|pix| *pix == Pixel::BLACK));
    }

    #[test]
    fn isolated_dot_is_an_edge() {
        let mut rows = vec![vec![Pixel::BLACK; 5]; 5];
        rows[2][2] = Pixel::WHITE;
        let image = Image::from_rows(rows).unwrap();

        let edges = EdgeDetect::new(0.5).apply(&image).unwrap();

        assert_eq!(edges.get(2, 2).unwrap(), Pixel::WHITE);
        // neighbours respond negatively and clamp to zero
        assert_eq!(edges.get(1, 2).unwrap(), Pixel::BLACK);
        assert_eq!(edges.get(0, 0).unwrap(), Pixel::BLACK);
    }

    #[test]
    fn threshold_one_is_never_exceeded() {
        let mut rows = vec![vec![Pixel::BLACK; 3]; 3];
        rows[1][1] = Pixel::WHITE;
        let image = Image::from_rows(rows).unwrap();

        let edges = EdgeDetect::new(1.0).apply(&image).unwrap();
        assert!(edges.pixels().iter().all(|pix| *pix == Pixel::BLACK));
    }
}
