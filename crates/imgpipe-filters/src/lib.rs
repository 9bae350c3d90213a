/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image filters for imgpipe
//!
//! Every filter is a small immutable value implementing [`OperationsTrait`](traits::OperationsTrait),
//! `apply` reads an image and returns a new one, leaving the input untouched.
//!
//! Filters are usually created from command line tokens through
//! [`Filter::from_spec`](filter::Filter::from_spec) and run in order by a [`Pipeline`](pipeline::Pipeline).
//!
//! # Example
//! - Invert an image then blur it
//! ```
//! use imgpipe_core::image::Image;
//! use imgpipe_core::pixel::Pixel;
//! use imgpipe_filters::filter::{Filter, FilterSpec};
//! use imgpipe_filters::pipeline::Pipeline;
//!
//! let image = Image::fill(Pixel::new(10, 200, 30), 8, 8).unwrap();
//!
//! let specs = [
//!     FilterSpec::new("-neg", &[]),
//!     FilterSpec::new("-blur", &["1.5"])
//! ];
//! let pipeline = Pipeline::from_specs(&specs).unwrap();
//! assert_eq!(pipeline.filters().len(), 2);
//!
//! let output = pipeline.run(image).unwrap();
//! assert_eq!(output.dimensions(), (8, 8));
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
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

pub mod convolve;
pub mod crop;
pub mod edge;
pub mod errors;
pub mod filter;
pub mod gaussian_blur;
pub mod grayscale;
pub mod negative;
pub mod pipeline;
pub mod pixelate;
pub mod sharpen;
pub mod traits;
