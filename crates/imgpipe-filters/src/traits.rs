/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by filters
use std::ops::{Add, Mul};

use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;
use imgpipe_core::pixel::{MAX_CHANNEL_VALUE, MIN_CHANNEL_VALUE};

/// An image operation
///
/// Operations never modify their input, `apply` returns
/// a freshly allocated image.
pub trait OperationsTrait {
    /// Name of the operation, used in logs and error messages
    fn name(&self) -> &'static str;

    /// Run the operation on `image`, returning the result
    fn apply(&self, image: &Image) -> Result<Image, ImageErrors>;
}

/// Numbers that convolution kernels can carry
///
/// The type must be wide enough to hold a weighted sum of
/// channel values without overflowing.
pub trait KernelNum: Copy + Add<Output = Self> + Mul<Output = Self> + PartialOrd {
    const ZERO: Self;

    /// Smallest channel value in this type
    fn min_channel() -> Self;
    /// Largest channel value in this type
    fn max_channel() -> Self;
    /// Widen a channel value
    fn from_channel(value: u8) -> Self;
    /// Convert back to a channel, truncating any fraction
    ///
    /// The value must already be clamped to the channel range
    fn to_channel(self) -> u8;

    /// Clamp to `[0,255]`
    fn clamp_channel(self) -> Self {
        if self < Self::min_channel() {
            Self::min_channel()
        } else if self > Self::max_channel() {
            Self::max_channel()
        } else {
            self
        }
    }
}

macro_rules! kernel_num {
    ($num:tt, $zero:expr) => {
        impl KernelNum for $num {
            const ZERO: $num = $zero;

            fn min_channel() -> $num {
                $num::from(MIN_CHANNEL_VALUE)
            }

            fn max_channel() -> $num {
                $num::from(MAX_CHANNEL_VALUE)
            }

            fn from_channel(value: u8) -> $num {
                $num::from(value)
            }

            fn to_channel(self) -> u8 {
                self as u8
            }
        }
    };
}

kernel_num!(i32, 0);
kernel_num!(f32, 0.0);
kernel_num!(f64, 0.0);
