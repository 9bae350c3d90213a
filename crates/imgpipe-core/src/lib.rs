/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all imgpipe crates
//!
//! It currently contains
//!
//! - The [`Pixel`](crate::pixel::Pixel) type, an RGB triple of 8 bit channels
//! - The owned [`Image`](crate::image::Image) grid every filter consumes and produces
//! - A bytestream reader and writer with little endian aware reads and writes
//! - Decoder options shared by image readers
//! - The error type used by image construction and pixel access
//!
//! # Features
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
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
    clippy::similar_names,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

pub mod bytestream;
pub mod errors;
pub mod image;
pub mod options;
pub mod pixel;
