/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `BITMAPFILEHEADER` size
pub const FILE_HEADER_SIZE: usize = 14;
/// `BITMAPINFOHEADER` size, the only header written by the encoder
pub const INFO_HEADER_SIZE: usize = 40;
pub const BITS_PER_PIXEL: u16 = 24;
pub const BYTES_PER_PIXEL: usize = 3;
pub const COLOR_PLANES: u16 = 1;
/// 72 DPI
pub const PIXELS_PER_METER: i32 = 2835;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS,
    Jpeg,
    Png
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> Option<BmpCompression> {
        match num {
            0 => Some(BmpCompression::RGB),
            1 => Some(BmpCompression::RLE8),
            2 => Some(BmpCompression::RLE4),
            3 => Some(BmpCompression::BITFIELDS),
            4 => Some(BmpCompression::Jpeg),
            5 => Some(BmpCompression::Png),
            _ => None
        }
    }
}

/// Information header sizes we know how to read
///
/// Everything past the first 40 bytes is ignored.
pub const fn is_supported_info_header(size: u32) -> bool {
    matches!(size, 40 | 52 | 56 | 108 | 124)
}

/// Number of bytes a row of `width` pixels occupies, rows are padded
/// to a multiple of four bytes
pub const fn row_stride(width: usize) -> usize {
    (width * BYTES_PER_PIXEL + 3) & !3
}

/// Number of zero bytes appended to every row
pub const fn row_padding(width: usize) -> usize {
    row_stride(width) - width * BYTES_PER_PIXEL
}
