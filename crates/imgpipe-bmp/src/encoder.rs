/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use imgpipe_core::bytestream::ByteWriter;
use imgpipe_core::image::Image;
use log::trace;

use crate::common::{
    row_padding, row_stride, BITS_PER_PIXEL, COLOR_PLANES, FILE_HEADER_SIZE, INFO_HEADER_SIZE,
    PIXELS_PER_METER
};
use crate::BmpEncoderErrors;

/// A 24 bit BMP encoder
///
/// The output always carries a `BITMAPINFOHEADER`, stores rows bottom up
/// and pads every row with zeroes to a multiple of four bytes.
pub struct BmpEncoder<'a> {
    image: &'a Image
}

impl<'a> BmpEncoder<'a> {
    /// Create a new encoder that will write `image`
    pub const fn new(image: &'a Image) -> BmpEncoder<'a> {
        BmpEncoder { image }
    }

    /// Sizes that go into the headers, checked against the header field widths
    ///
    /// Returns `(pixel array size, file size, width, height)`
    fn header_sizes(&self) -> Result<(u32, u32, i32, i32), BmpEncoderErrors> {
        let (width, height) = self.image.dimensions();
        let too_large = || BmpEncoderErrors::TooLargeDimensions(width, height);

        let image_size = row_stride(width)
            .checked_mul(height)
            .ok_or_else(too_large)?;
        let file_size = image_size
            .checked_add(FILE_HEADER_SIZE + INFO_HEADER_SIZE)
            .ok_or_else(too_large)?;

        let image_size = u32::try_from(image_size).map_err(|_| too_large())?;
        let file_size = u32::try_from(file_size).map_err(|_| too_large())?;
        let width = i32::try_from(width).map_err(|_| too_large())?;
        let height = i32::try_from(height).map_err(|_| too_large())?;

        Ok((image_size, file_size, width, height))
    }

    /// Encode the image into a BMP file held in memory
    pub fn encode(&self) -> Result<Vec<u8>, BmpEncoderErrors> {
        let (image_size, file_size, width, height) = self.header_sizes()?;

        let mut writer = ByteWriter::with_capacity(file_size as usize);

        // file header
        writer.write_all(b"BM");
        writer.write_u32_le(file_size);
        // reserved
        writer.write_u32_le(0);
        writer.write_u32_le((FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32);

        // info header
        writer.write_u32_le(INFO_HEADER_SIZE as u32);
        writer.write_i32_le(width);
        // positive height, rows go bottom up
        writer.write_i32_le(height);
        writer.write_u16_le(COLOR_PLANES);
        writer.write_u16_le(BITS_PER_PIXEL);
        // BI_RGB
        writer.write_u32_le(0);
        writer.write_u32_le(image_size);
        writer.write_i32_le(PIXELS_PER_METER);
        writer.write_i32_le(PIXELS_PER_METER);
        // colors in palette, important colors
        writer.write_u32_le(0);
        writer.write_u32_le(0);

        let padding = [0_u8; 3];
        let padding = &padding[..row_padding(self.image.width())];

        for row in self.image.rows().rev() {
            for pixel in row {
                writer.write_all(&pixel.to_bgr());
            }
            writer.write_all(padding);
        }
        trace!(
            "Encoded {}x{} image into {} bytes",
            width,
            height,
            writer.position()
        );

        Ok(writer.into_inner())
    }

    /// Encode the image and write it to `sink`
    pub fn encode_to<W: Write>(&self, sink: &mut W) -> Result<(), BmpEncoderErrors> {
        let bytes = self.encode()?;
        sink.write_all(&bytes)?;
        Ok(())
    }
}
