/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// File layout handled here
//
// - A 14 byte file header: the magic number ("BM"), the file size,
//   4 reserved bytes and the offset to the pixel data.
// - An information header, at least 40 bytes (BITMAPINFOHEADER): header size,
//   width, height, color planes, bits per pixel, compression and fields we
//   do not need (image size, resolution, palette sizes).
//   V4 (108 bytes) and V5 (124 bytes) headers extend it, the extra fields are skipped.
// - The pixel array at the data offset, 3 bytes per pixel in B,G,R order,
//   every row padded to a multiple of four bytes. Rows are stored bottom-up
//   unless the height is negative.

use imgpipe_core::bytestream::ByteReader;
use imgpipe_core::image::Image;
use imgpipe_core::options::DecoderOptions;
use imgpipe_core::pixel::Pixel;
use log::{trace, warn};

use crate::common::{
    is_supported_info_header, row_stride, BmpCompression, BITS_PER_PIXEL, BYTES_PER_PIXEL,
    COLOR_PLANES, FILE_HEADER_SIZE
};
use crate::BmpDecoderErrors;

/// Probe some bytes to see
/// if they consist of a BMP image
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read sz
            if let Some(sz) = bytes.get(14..18) {
                let sz = u32::from_le_bytes([sz[0], sz[1], sz[2], sz[3]]);
                return is_supported_info_header(sz);
            }
        }
    }
    false
}

/// A BMP decoder.
///
/// # Usage
/// The decoder can be used to read image information and or get the pixels out of a valid bmp
/// image.
///
/// ## Extracting image metadata
/// - use `decode_headers` + utility functions to get information
/// ```no_run
/// use imgpipe_bmp::BmpDecoder;
///
/// fn main()->Result<(),imgpipe_bmp::BmpDecoderErrors>{
///     let source = std::fs::read("image.bmp").unwrap();
///     let mut decoder = BmpDecoder::new(&source);
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     let (w,h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}",w,h);
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<'a> {
    bytes:           ByteReader<'a>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    flip_vertically: bool,
    decoded_headers: bool,
    file_size:       u32,
    pixel_offset:    u32,
    info_size:       u32,
    depth:           u16
}

impl<'a> BmpDecoder<'a> {
    /// Create a new bmp decoder that reads data from
    /// `data`
    pub fn new(data: &'a [u8]) -> BmpDecoder<'a> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The buffer from which we will read data from
    /// * `options`:  Specialized options for this decoder
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> BmpDecoder<'a> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            width: 0,
            height: 0,
            flip_vertically: false,
            decoded_headers: false,
            file_size: 0,
            pixel_offset: 0,
            info_size: 0,
            depth: 0
        }
    }

    /// Decode headers stored in the bmp file and store
    /// information in the decode context
    ///
    /// After calling this, most information fields will be filled
    /// except the actual decoding bytes
    ///
    /// # Returns
    /// - Ok(()) Indicates everything was okay during header parsing
    /// - Err: Error that occurred when decoding headers
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }

        if self.bytes.get_u8_err()? != b'B' || self.bytes.get_u8_err()? != b'M' {
            return Err(BmpDecoderErrors::InvalidMagicBytes);
        }
        let file_size = self.bytes.get_u32_le_err()?;
        // reserved
        self.bytes.skip(4)?;

        let pixel_offset = self.bytes.get_u32_le_err()?;
        let info_size = self.bytes.get_u32_le_err()?;

        if !is_supported_info_header(info_size) {
            return Err(BmpDecoderErrors::Generic(format!(
                "Unsupported information header size {info_size}"
            )));
        }
        if (info_size as usize).saturating_add(FILE_HEADER_SIZE) > pixel_offset as usize {
            return Err(BmpDecoderErrors::GenericStatic(
                "Pixel data offset points inside the headers"
            ));
        }

        let width = self.bytes.get_i32_le_err()?;
        let height = self.bytes.get_i32_le_err()?;

        if width < 0 {
            return Err(BmpDecoderErrors::GenericStatic(
                "Negative width, invalid image"
            ));
        }
        // positive heights are stored bottom up
        self.flip_vertically = height > 0;

        self.width = width.unsigned_abs() as usize;
        self.height = height.unsigned_abs() as usize;

        if self.height > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                self.height
            ));
        }
        if self.width > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                self.width
            ));
        }
        if self.width == 0 {
            return Err(BmpDecoderErrors::GenericStatic(
                "Width is zero, invalid image"
            ));
        }
        if self.height == 0 {
            return Err(BmpDecoderErrors::GenericStatic(
                "Height is zero, invalid image"
            ));
        }

        trace!("Width: {}", self.width);
        trace!("Height: {}", self.height);

        if self.bytes.get_u16_le_err()? != COLOR_PLANES {
            return Err(BmpDecoderErrors::GenericStatic(
                "Invalid BMP header, number of color planes must be 1"
            ));
        }

        let depth = self.bytes.get_u16_le_err()?;

        if depth != BITS_PER_PIXEL {
            return Err(BmpDecoderErrors::UnsupportedBitDepth(depth));
        }

        let compression = self.bytes.get_u32_le_err()?;

        if BmpCompression::from_u32(compression) != Some(BmpCompression::RGB) {
            return Err(BmpDecoderErrors::UnsupportedCompression(compression));
        }

        if file_size as usize != self.bytes.len() {
            let msg = format!(
                "File size in header is {file_size} but the file has {} bytes",
                self.bytes.len()
            );
            if self.options.strict_mode() {
                return Err(BmpDecoderErrors::Generic(msg));
            }
            warn!("{}", msg);
        }

        trace!("Bit depth: {:?}", depth);
        trace!("Pixel offset: {}", pixel_offset);
        trace!("Top down: {}", !self.flip_vertically);

        self.file_size = file_size;
        self.pixel_offset = pixel_offset;
        self.info_size = info_size;
        self.depth = depth;
        self.decoded_headers = true;

        Ok(())
    }

    /// Get the width and height of the image
    ///
    /// The tuple order is (width,height)
    ///
    /// Returns `None` if headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// Bits used to store a single pixel
    ///
    /// Returns `None` if headers haven't been decoded
    pub const fn bit_depth(&self) -> Option<u16> {
        if self.decoded_headers {
            return Some(self.depth);
        }
        None
    }

    /// File size as stored in the file header
    ///
    /// Returns `None` if headers haven't been decoded
    pub const fn header_file_size(&self) -> Option<u32> {
        if self.decoded_headers {
            return Some(self.file_size);
        }
        None
    }

    /// Size of the information header, 40 for `BITMAPINFOHEADER`
    ///
    /// Returns `None` if headers haven't been decoded
    pub const fn info_header_size(&self) -> Option<u32> {
        if self.decoded_headers {
            return Some(self.info_size);
        }
        None
    }

    /// Whether rows are stored top to bottom
    ///
    /// Returns `None` if headers haven't been decoded
    pub const fn is_top_down(&self) -> Option<bool> {
        if self.decoded_headers {
            return Some(!self.flip_vertically);
        }
        None
    }

    /// Decode the pixels into an [`Image`]
    ///
    /// Headers are decoded first if they haven't been.
    pub fn decode(&mut self) -> Result<Image, BmpDecoderErrors> {
        self.decode_headers()?;

        let stride = row_stride(self.width);
        let expected = stride
            .checked_mul(self.height)
            .and_then(|x| x.checked_add(self.pixel_offset as usize))
            .ok_or(BmpDecoderErrors::GenericStatic(
                "Pixel array size overflows a usize"
            ))?;

        if expected > self.bytes.len() {
            return Err(BmpDecoderErrors::TooSmallBuffer(expected, self.bytes.len()));
        }
        self.bytes.set_position(self.pixel_offset as usize)?;

        let mut rows = Vec::with_capacity(self.height);

        for _ in 0..self.height {
            let row_bytes = self.bytes.read_bytes(stride)?;

            let row: Vec<Pixel> = row_bytes
                .chunks_exact(BYTES_PER_PIXEL)
                .take(self.width)
                .map(|bgr| Pixel::from_bgr([bgr[0], bgr[1], bgr[2]]))
                .collect();

            rows.push(row);
        }
        if self.flip_vertically {
            rows.reverse();
        }

        Ok(Image::from_rows(rows)?)
    }
}
