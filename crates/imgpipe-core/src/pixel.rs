/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single RGB pixel
//!
//! Pixels store channels as they are, saturation is the job
//! of whoever computes the channel values.

/// Largest value a channel can hold
pub const MAX_CHANNEL_VALUE: u8 = u8::MAX;
/// Smallest value a channel can hold
pub const MIN_CHANNEL_VALUE: u8 = u8::MIN;

/// A color made of a red, green and blue 8-bit channel
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    pub red:   u8,
    pub green: u8,
    pub blue:  u8
}

impl Pixel {
    /// Pure black, `(0,0,0)`
    pub const BLACK: Pixel = Pixel::new(MIN_CHANNEL_VALUE, MIN_CHANNEL_VALUE, MIN_CHANNEL_VALUE);
    /// Pure white, `(255,255,255)`
    pub const WHITE: Pixel = Pixel::new(MAX_CHANNEL_VALUE, MAX_CHANNEL_VALUE, MAX_CHANNEL_VALUE);

    /// Create a new pixel from its red, green and blue channels
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Pixel {
        Pixel { red, green, blue }
    }

    /// Create a pixel whose three channels hold the same value
    #[must_use]
    pub const fn gray(value: u8) -> Pixel {
        Pixel::new(value, value, value)
    }

    /// Create a pixel from channels stored in `[B,G,R]` order,
    /// the layout BMP files use
    #[must_use]
    pub const fn from_bgr([blue, green, red]: [u8; 3]) -> Pixel {
        Pixel::new(red, green, blue)
    }

    /// Return channels in `[B,G,R]` order
    #[must_use]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Return channels in `[R,G,B]` order
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Apply `func` to every channel, returning the new pixel
    #[must_use]
    pub fn map<F: Fn(u8) -> u8>(self, func: F) -> Pixel {
        Pixel::new(func(self.red), func(self.green), func(self.blue))
    }
}
