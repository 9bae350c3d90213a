/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;

use crate::convolve::{convolve, Kernel};
use crate::traits::OperationsTrait;

const SHARPEN_KERNEL: [[i32; 3]; 3] = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];

/// Sharpen an image
///
/// Convolves with
/// ```text
///  0 -1  0
/// -1  5 -1
///  0 -1  0
/// ```
/// Border pixels are replicated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sharpen;

impl Sharpen {
    #[must_use]
    pub fn new() -> Sharpen {
        Sharpen
    }
}

impl OperationsTrait for Sharpen {
    fn name(&self) -> &'static str {
        "Sharpen"
    }

    fn apply(&self, image: &Image) -> Result<Image, ImageErrors> {
        convolve(&Kernel::new_3x3(SHARPEN_KERNEL), image)
    }
}
