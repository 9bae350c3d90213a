/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gaussian blur
//!
//! The 2D gaussian is separable, so the blur runs as a horizontal
//! pass followed by a vertical pass with the same 1D kernel.
//!
//! The kernel has `2*ceil(3*sigma)+1` taps with weights `exp(-i^2/(2*sigma^2))`
//! normalized to sum to one. Channels are truncated to integers after each pass.
use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;
use log::trace;

use crate::convolve::{convolve, Kernel};
use crate::traits::OperationsTrait;

/// Largest kernel radius accepted, `3*sigma` above this is rejected
pub const MAX_RADIUS: usize = 1 << 14;

/// Blur an image with a gaussian kernel
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaussianBlur {
    sigma: f32
}

impl GaussianBlur {
    /// Create a new gaussian blur filter
    ///
    /// Only the magnitude of `sigma` matters, a sigma of zero leaves the image unchanged.
    /// A sigma that isn't finite or whose radius exceeds [`MAX_RADIUS`] makes
    /// [`apply`](OperationsTrait::apply) fail.
    #[must_use]
    pub fn new(sigma: f32) -> GaussianBlur {
        GaussianBlur { sigma: sigma.abs() }
    }
}

/// Radius of the kernel for `sigma`, `ceil(3*sigma)`
///
/// Saturates at `usize::MAX` for huge or infinite sigmas.
pub fn kernel_radius(sigma: f32) -> usize {
    (3.0 * sigma.abs()).ceil() as usize
}

/// Create the normalized 1D kernel used by both passes
///
/// # Errors
/// [`ImageErrors::OperationFailed`] if `sigma` isn't finite or
/// its radius is larger than [`MAX_RADIUS`]
pub fn gaussian_kernel(sigma: f32) -> Result<Vec<f32>, ImageErrors> {
    if !sigma.is_finite() {
        return Err(ImageErrors::OperationFailed(
            "Gaussian blur",
            format!("sigma must be finite, got {sigma}")
        ));
    }
    let radius = kernel_radius(sigma);

    if radius > MAX_RADIUS {
        return Err(ImageErrors::OperationFailed(
            "Gaussian blur",
            format!("kernel radius {radius} for sigma {sigma} is larger than {MAX_RADIUS}")
        ));
    }
    let denominator = 2.0 * sigma * sigma;

    // 2*sigma^2 underflowed, only the centre tap survives
    if radius == 0 || !denominator.is_normal() {
        return Ok(vec![1.0]);
    }

    let mut weights: Vec<f32> = (0..=2 * radius)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-(x * x) / denominator).exp()
        })
        .collect();

    let sum: f32 = weights.iter().sum();
    weights.iter_mut().for_each(|x| *x /= sum);

    Ok(weights)
}

impl OperationsTrait for GaussianBlur {
    fn name(&self) -> &'static str {
        "Gaussian blur"
    }

    fn apply(&self, image: &Image) -> Result<Image, ImageErrors> {
        let weights = gaussian_kernel(self.sigma)?;

        trace!(
            "Gaussian blur with sigma {} uses {} taps",
            self.sigma,
            weights.len()
        );

        let horizontal = Kernel::horizontal(weights.clone())?;
        let vertical = Kernel::vertical(weights)?;

        let intermediate = convolve(&horizontal, image)?;
        convolve(&vertical, &intermediate)
    }
}
