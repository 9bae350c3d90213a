/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - a row-major grid of [`Pixel`]s
//!     - `height` rows
//!         - each exactly `width` pixels wide
//!
//! Images are never empty, a zero width or height is rejected at construction,
//! and they are not modified after construction. Operations create new images.
use std::slice::ChunksExact;

use crate::errors::ImageErrors;
use crate::pixel::Pixel;

/// Represents a single image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    pixels: Vec<Pixel>,
    width:  usize,
    height: usize
}

impl Image {
    /// Create a black image of the given dimensions
    ///
    /// # Errors
    /// - [`ImageErrors::ZeroDimensions`] if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Image, ImageErrors> {
        Image::fill(Pixel::BLACK, width, height)
    }

    /// Create an image with a static color in it
    pub fn fill(pixel: Pixel, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let size = checked_size(width, height)?;

        Ok(Image {
            pixels: vec![pixel; size],
            width,
            height
        })
    }

    /// Create an image from row-major pixels
    ///
    /// The length of `pixels` must be exactly `width*height`
    pub fn from_pixels(pixels: Vec<Pixel>, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let size = checked_size(width, height)?;

        if pixels.len() != size {
            return Err(ImageErrors::DimensionsMisMatch(size, pixels.len()));
        }
        Ok(Image {
            pixels,
            width,
            height
        })
    }

    /// Create an image from a grid indexed as `grid[row][column]`
    ///
    /// The width is taken from the first row, every other row must match it.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Image, ImageErrors> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let size = checked_size(width, height)?;

        let mut pixels = Vec::with_capacity(size);

        for (position, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ImageErrors::RaggedRows(position, width, row.len()));
            }
            pixels.extend(row);
        }
        Ok(Image {
            pixels,
            width,
            height
        })
    }

    /// Create an image from a function
    ///
    /// The function receives the row and the column of the pixel being created
    /// and returns its color.
    ///
    /// ```
    /// use imgpipe_core::image::Image;
    /// use imgpipe_core::pixel::Pixel;
    ///
    /// // a horizontal band of grays from black to white
    /// let image = Image::from_fn(256, 10, |_, col| Pixel::gray(col as u8)).unwrap();
    /// assert_eq!(image.dimensions(), (256, 10));
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Result<Image, ImageErrors>
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let size = checked_size(width, height)?;

        let mut pixels = Vec::with_capacity(size);

        for row in 0..height {
            for col in 0..width {
                pixels.push(func(row, col));
            }
        }
        Ok(Image {
            pixels,
            width,
            height
        })
    }

    /// Image width, the number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height, the number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return the pixel at `row`, `col`
    ///
    /// # Errors
    /// - [`ImageErrors::OutOfBounds`] if the coordinates are outside the image
    pub fn get(&self, row: usize, col: usize) -> Result<Pixel, ImageErrors> {
        if row >= self.height || col >= self.width {
            return Err(ImageErrors::OutOfBounds(
                (row, col),
                (self.width, self.height)
            ));
        }
        Ok(self.pixels[row * self.width + col])
    }

    /// Return the pixel nearest to `row`, `col`
    ///
    /// Coordinates outside the image are clamped to the closest edge,
    /// so reads past the border replicate the border pixels.
    #[allow(clippy::cast_sign_loss)]
    pub fn pixel_clamped(&self, row: isize, col: isize) -> Pixel {
        let row = (row.max(0) as usize).min(self.height - 1);
        let col = (col.max(0) as usize).min(self.width - 1);

        self.pixels[row * self.width + col]
    }

    /// Return all pixels in row-major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over image rows, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width)
    }

    /// Copy pixels into a grid indexed as `grid[row][column]`
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }
}

fn checked_size(width: usize, height: usize) -> Result<usize, ImageErrors> {
    if width == 0 || height == 0 {
        return Err(ImageErrors::ZeroDimensions(width, height));
    }
    width
        .checked_mul(height)
        .ok_or(ImageErrors::GenericStatic(
            "Image dimensions overflow a usize"
        ))
}
