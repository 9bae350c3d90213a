/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image construction and processing
use std::fmt::{Debug, Display, Formatter};

/// All possible image errors that can occur.
///
/// This is the common error type for image construction,
/// pixel access and filter execution.
#[non_exhaustive]
pub enum ImageErrors {
    /// An image was requested with a width or height of zero
    ///
    /// Contains the requested width and height
    ZeroDimensions(usize, usize),
    /// A grid of rows did not have the same number of pixels in each row
    ///
    /// Contains the row index, the expected width and the width found
    RaggedRows(usize, usize, usize),
    /// A pixel access went outside the image
    ///
    /// Contains requested (row, column) and image (width, height)
    OutOfBounds((usize, usize), (usize, usize)),
    /// The number of pixels does not match `width*height`
    ///
    /// Contains expected and found lengths
    DimensionsMisMatch(usize, usize),
    /// A convolution kernel had an invalid shape
    InvalidKernel(String),
    /// An operation failed, contains the operation name and a reason
    OperationFailed(&'static str, String),
    GenericString(String),
    GenericStatic(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimensions(width, height) => {
                write!(
                    f,
                    "Image dimensions must be greater than zero, got width={width} and height={height}"
                )
            }
            Self::RaggedRows(row, expected, found) => {
                write!(
                    f,
                    "Row {row} has {found} pixels but the image width is {expected}"
                )
            }
            Self::OutOfBounds((row, col), (width, height)) => {
                write!(
                    f,
                    "Invalid coordinates (row={row}, column={col}) for an image of {width}x{height}"
                )
            }
            Self::DimensionsMisMatch(expected, found) => {
                write!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::InvalidKernel(reason) => {
                write!(f, "Invalid kernel: {reason}")
            }
            Self::OperationFailed(operation, reason) => {
                write!(f, "Operation `{operation}` failed: {reason}")
            }
            Self::GenericString(err) => {
                write!(f, "{err}")
            }
            Self::GenericStatic(err) => {
                write!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<&'static str> for ImageErrors {
    fn from(value: &'static str) -> Self {
        Self::GenericStatic(value)
    }
}

impl From<String> for ImageErrors {
    fn from(value: String) -> Self {
        Self::GenericString(value)
    }
}
