/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors raised while turning filter specifications into filters
use std::fmt::{Debug, Display, Formatter};

/// Possible errors when constructing a filter from its name and arguments
pub enum FilterErrors {
    /// No filter is known under this name
    UnknownFilter(String),
    /// The filter received the wrong number of arguments
    WrongArgumentCount {
        filter:   &'static str,
        expected: usize,
        found:    usize
    },
    /// An argument could not be parsed as a number of the required type
    InvalidArgument {
        filter:   &'static str,
        argument: String,
        reason:   String
    },
    /// An argument parsed but lies outside the accepted range
    OutOfRange {
        filter:   &'static str,
        argument: String,
        reason:   &'static str
    }
}

impl Debug for FilterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFilter(name) => {
                write!(f, "Unknown filter `{name}`")
            }
            Self::WrongArgumentCount {
                filter,
                expected,
                found
            } => {
                write!(
                    f,
                    "Filter `{filter}` expects {expected} argument(s) but {found} were given"
                )
            }
            Self::InvalidArgument {
                filter,
                argument,
                reason
            } => {
                write!(
                    f,
                    "Invalid argument `{argument}` for filter `{filter}`: {reason}"
                )
            }
            Self::OutOfRange {
                filter,
                argument,
                reason
            } => {
                write!(
                    f,
                    "Argument `{argument}` for filter `{filter}` is out of range: {reason}"
                )
            }
        }
    }
}

impl Display for FilterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for FilterErrors {}
