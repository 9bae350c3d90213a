/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 2D convolution on images
//!
//! A kernel is centered on every pixel of the source image, the
//! neighbourhood under it is multiplied by the weights and summed per channel.
//!
//! # Borders
//! Coordinates that fall outside the image are clamped to the
//! nearest edge, so the border row/column is repeated as far as the kernel reaches
//!
//! ```text
//!  kernel reaching past the top left corner
//!
//!    a a b c
//!    a a b c      <- row 0 repeated
//!    d d e f
//!    g g h i
//!    ^
//!    column 0 repeated
//! ```
//!
//! The weighted sums are carried in a wider type (see [`KernelNum`])
//! and clamped to `[0,255]` before being written back.
use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;
use imgpipe_core::pixel::Pixel;

use crate::traits::KernelNum;

/// A convolution kernel with odd dimensions and row major weights
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel<T> {
    width:   usize,
    height:  usize,
    weights: Vec<T>
}

impl<T: KernelNum> Kernel<T> {
    /// Create a new kernel
    ///
    /// # Errors
    /// - Width or height is zero or even
    /// - `weights.len()` isn't `width*height`
    pub fn new(width: usize, height: usize, weights: Vec<T>) -> Result<Kernel<T>, ImageErrors> {
        if width == 0 || height == 0 {
            return Err(ImageErrors::InvalidKernel(format!(
                "Kernel dimensions must be non zero, got {width}x{height}"
            )));
        }
        if width % 2 == 0 || height % 2 == 0 {
            return Err(ImageErrors::InvalidKernel(format!(
                "Kernel dimensions must be odd, got {width}x{height}"
            )));
        }
        if weights.len() != width * height {
            return Err(ImageErrors::InvalidKernel(format!(
                "A {width}x{height} kernel needs {} weights, found {}",
                width * height,
                weights.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            weights
        })
    }

    /// Create a 3x3 kernel
    pub fn new_3x3(weights: [[T; 3]; 3]) -> Kernel<T> {
        Kernel {
            width:   3,
            height:  3,
            weights: weights.iter().flatten().copied().collect()
        }
    }

    /// A horizontal kernel, a single row of weights
    pub fn horizontal(weights: Vec<T>) -> Result<Kernel<T>, ImageErrors> {
        Kernel::new(weights.len(), 1, weights)
    }

    /// A vertical kernel, a single column of weights
    pub fn vertical(weights: Vec<T>) -> Result<Kernel<T>, ImageErrors> {
        Kernel::new(1, weights.len(), weights)
    }
}

/// Compute the weighted sum of the neighbourhood of `(row,col)` for each channel.
///
/// Neighbours outside the image are read from the nearest border pixel,
/// each of the three sums is clamped to `[0,255]`.
///
/// The returned array is in red, green, blue order.
pub fn sample<T: KernelNum>(kernel: &Kernel<T>, image: &Image, row: usize, col: usize) -> [T; 3] {
    let half_h = (kernel.height / 2) as isize;
    let half_w = (kernel.width / 2) as isize;

    let mut sums = [T::ZERO; 3];

    for (i, kernel_row) in kernel.weights.chunks_exact(kernel.width).enumerate() {
        let src_row = row as isize - half_h + i as isize;

        for (j, weight) in kernel_row.iter().enumerate() {
            let src_col = col as isize - half_w + j as isize;
            let pixel = image.pixel_clamped(src_row, src_col);

            for (sum, channel) in sums.iter_mut().zip(pixel.channels()) {
                *sum = *sum + *weight * T::from_channel(channel);
            }
        }
    }
    sums.map(T::clamp_channel)
}

/// Convolve every pixel of `image` with `kernel`, returning a new image
///
/// Channels are converted back to 8 bits by truncation.
pub fn convolve<T: KernelNum>(kernel: &Kernel<T>, image: &Image) -> Result<Image, ImageErrors> {
    let (width, height) = image.dimensions();

    let mut pixels = Vec::with_capacity(width * height);

    for row in 0..height {
        for col in 0..width {
            let [r, g, b] = sample(kernel, image, row, col);
            pixels.push(Pixel::new(r.to_channel(), g.to_channel(), b.to_channel()));
        }
    }
    Image::from_pixels(pixels, width, height)
}

#[cfg(test)]
mod tests {
    use imgpipe_core::errors::ImageErrors;
    use imgpipe_core::image::Image;
    use imgpipe_core::pixel::Pixel;
    use nanorand::Rng;

    use crate::convolve::{convolve, sample, Kernel};

    fn random_image(width: usize, height: usize) -> Image {
        let mut rng = nanorand::WyRand::new();
        Image::from_fn(width, height, |_, _| {
            Pixel::new(rng.generate(), rng.generate(), rng.generate())
        })
        .unwrap()
    }

    #[test]
    fn kernel_shape_is_validated() {
        assert!(matches!(
            Kernel::new(2, 3, vec![0_i32; 6]),
            Err(ImageErrors::InvalidKernel(_))
        ));
        assert!(matches!(
            Kernel::new(0, 1, Vec::<i32>::new()),
            Err(ImageErrors::InvalidKernel(_))
        ));
        assert!(matches!(
            Kernel::new(3, 3, vec![0_i32; 8]),
            Err(ImageErrors::InvalidKernel(_))
        ));
        assert!(Kernel::new(5, 1, vec![0.2_f32; 5]).is_ok());
    }

    #[test]
    fn identity_kernel_keeps_image() {
        let image = random_image(13, 7);
        let kernel = Kernel::new_3x3([[0, 0, 0], [0, 1, 0], [0, 0, 0]]);

        assert_eq!(convolve(&kernel, &image).unwrap(), image);
    }

    #[test]
    fn border_coordinates_are_clamped() {
        let image = Image::from_rows(vec![
            vec![Pixel::gray(10), Pixel::gray(20)],
            vec![Pixel::gray(30), Pixel::gray(40)],
        ])
        .unwrap();
        // sum of all nine neighbours of (0,0):
        // row -1 and row 0 both read row 0, col -1 and col 0 both read col 0
        let kernel = Kernel::new_3x3([[1, 1, 1], [1, 1, 1], [1, 1, 1]]);
        let sum = 4 * 10 + 2 * 20 + 2 * 30 + 40;

        assert_eq!(sample(&kernel, &image, 0, 0), [180, 180, 180]);
        assert_eq!(sum, 180);
    }

    #[test]
    fn sums_are_clamped() {
        let image = Image::fill(Pixel::new(200, 0, 100), 3, 3).unwrap();
        let kernel = Kernel::new_3x3([[0, 0, 0], [0, 2, 0], [0, 0, -1]]);

        assert_eq!(sample(&kernel, &image, 1, 1), [200, 0, 100]);

        let kernel = Kernel::new_3x3([[0, 0, 0], [0, 3, 0], [0, 0, 0]]);
        assert_eq!(sample(&kernel, &image, 1, 1), [255, 0, 255]);

        let kernel = Kernel::new_3x3([[0, 0, 0], [0, -1, 0], [0, 0, 0]]);
        assert_eq!(sample(&kernel, &image, 1, 1), [0, 0, 0]);
    }

    #[test]
    fn convolve_does_not_touch_input() {
        let image = random_image(9, 9);
        let copy = image.clone();
        let kernel = Kernel::new_3x3([[1, 1, 1], [1, -8, 1], [1, 1, 1]]);

        let _ = convolve(&kernel, &image).unwrap();
        assert_eq!(image, copy);
    }
}
