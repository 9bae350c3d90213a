/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A 24-bit BMP decoder and encoder
//!
//! This crate reads and writes the one BMP flavour the imgpipe tools
//! work with, an uncompressed (`BI_RGB`) bitmap with 24 bits per pixel.
//!
//! # Supported formats
//! - `BITMAPINFOHEADER` and its V4/V5 extensions with 24 bits per pixel
//! - Bottom-up (positive height) and top-down (negative height) row order
//!
//! # Unsupported formats
//! - Paletted, masked, RLE or embedded PNG/JPEG images
//!
//! # Example
//! ```
//! use imgpipe_bmp::{BmpDecoder, BmpEncoder};
//! use imgpipe_core::image::Image;
//! use imgpipe_core::pixel::Pixel;
//!
//! let image = Image::fill(Pixel::new(10, 20, 30), 3, 2).unwrap();
//! let bytes = BmpEncoder::new(&image).encode().unwrap();
//!
//! let decoded = BmpDecoder::new(&bytes).decode().unwrap();
//! assert_eq!(decoded, image);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

pub use crate::decoder::{probe_bmp, BmpDecoder};
pub use crate::encoder::BmpEncoder;
pub use crate::errors::{BmpDecoderErrors, BmpEncoderErrors};

mod common;
mod decoder;
mod encoder;
mod errors;
