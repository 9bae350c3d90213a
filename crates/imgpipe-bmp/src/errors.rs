/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use imgpipe_core::bytestream::ByteIoError;
use imgpipe_core::errors::ImageErrors;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// The buffer is too small, expected at least
    /// a size but got another size
    TooSmallBuffer(usize, usize),
    /// Generic message
    GenericStatic(&'static str),
    /// Generic allocated message
    Generic(String),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// Only 24 bits per pixel are supported
    UnsupportedBitDepth(u16),
    /// Only uncompressed images are supported
    UnsupportedCompression(u32),
    IoErrors(ByteIoError),
    ImageErrors(ImageErrors)
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                write!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::TooSmallBuffer(expected, found) => {
                write!(
                    f,
                    "Too small of buffer, expected {expected} but found {found}"
                )
            }
            Self::GenericStatic(header) => {
                write!(f, "{header}")
            }
            Self::Generic(message) => {
                write!(f, "{message}")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                write!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::UnsupportedBitDepth(depth) => {
                write!(
                    f,
                    "Unsupported bit depth {depth}, only 24 bits per pixel images are supported"
                )
            }
            Self::UnsupportedCompression(compression) => {
                write!(
                    f,
                    "Unsupported compression scheme {compression}, only uncompressed images are supported"
                )
            }
            Self::IoErrors(err) => {
                write!(f, "{err:?}")
            }
            Self::ImageErrors(err) => {
                write!(f, "{err:?}")
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BmpDecoderErrors {}

impl From<ByteIoError> for BmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}

impl From<ImageErrors> for BmpDecoderErrors {
    fn from(value: ImageErrors) -> Self {
        BmpDecoderErrors::ImageErrors(value)
    }
}

/// BMP errors that can occur during encoding
pub enum BmpEncoderErrors {
    /// The image is too large to be described by BMP headers
    ///
    /// Contains image width and height
    TooLargeDimensions(usize, usize),
    IoErrors(std::io::Error)
}

impl Debug for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLargeDimensions(width, height) => {
                write!(
                    f,
                    "Image of {width}x{height} is too large to be stored as a BMP"
                )
            }
            Self::IoErrors(err) => {
                write!(f, "{err}")
            }
        }
    }
}

impl Display for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BmpEncoderErrors {}

impl From<std::io::Error> for BmpEncoderErrors {
    fn from(value: std::io::Error) -> Self {
        BmpEncoderErrors::IoErrors(value)
    }
}
