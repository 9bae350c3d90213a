/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use imgpipe_bmp::{BmpDecoderErrors, BmpEncoderErrors};
use imgpipe_core::errors::ImageErrors;
use imgpipe_filters::errors::FilterErrors;

/// Errors that can stop the command line workflow
pub enum CliErrors {
    /// A filter specification could not be turned into a filter
    FilterErrors(FilterErrors),
    /// A filter failed while running
    ImageErrors(ImageErrors),
    DecodeErrors(BmpDecoderErrors),
    EncodeErrors(BmpEncoderErrors),
    IoErrors(std::io::Error),
    /// Bad paths or a malformed command line
    GenericString(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FilterErrors(err) => writeln!(f, "{err:?}"),
            Self::ImageErrors(err) => writeln!(f, "{err:?}"),
            Self::DecodeErrors(err) => writeln!(f, "Could not decode input, {err:?}"),
            Self::EncodeErrors(err) => writeln!(f, "Could not encode output, {err:?}"),
            Self::IoErrors(err) => writeln!(f, "{err}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CliErrors {}

impl From<FilterErrors> for CliErrors {
    fn from(value: FilterErrors) -> Self {
        CliErrors::FilterErrors(value)
    }
}

impl From<ImageErrors> for CliErrors {
    fn from(value: ImageErrors) -> Self {
        CliErrors::ImageErrors(value)
    }
}

impl From<BmpDecoderErrors> for CliErrors {
    fn from(value: BmpDecoderErrors) -> Self {
        CliErrors::DecodeErrors(value)
    }
}

impl From<BmpEncoderErrors> for CliErrors {
    fn from(value: BmpEncoderErrors) -> Self {
        CliErrors::EncodeErrors(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::IoErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::GenericString(value.to_string())
    }
}

impl From<String> for CliErrors {
    fn from(value: String) -> Self {
        CliErrors::GenericString(value)
    }
}
