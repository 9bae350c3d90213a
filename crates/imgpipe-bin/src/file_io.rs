/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use imgpipe_bmp::{probe_bmp, BmpDecoder, BmpEncoder};
use imgpipe_core::image::Image;
use imgpipe_core::options::DecoderOptions;
use log::info;

use crate::errors::CliErrors;

/// A BMP file on disk
pub struct BmpFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl BmpFile {
    pub fn new(file_path: &Path, options: DecoderOptions) -> BmpFile {
        BmpFile {
            file_path: file_path.to_path_buf(),
            options
        }
    }

    /// Read the whole file and decode it
    pub fn read_image(&self) -> Result<Image, CliErrors> {
        let data = std::fs::read(&self.file_path)?;

        info!("Read {} bytes from {:?}", data.len(), self.file_path);

        if !probe_bmp(&data) {
            return Err(CliErrors::GenericString(format!(
                "{:?} is not a supported BMP file",
                self.file_path
            )));
        }
        let image = BmpDecoder::new_with_options(&data, self.options).decode()?;

        Ok(image)
    }
}

/// Encode `image` and write it to `path`
///
/// The image is encoded before the file is created so an encoding
/// failure leaves nothing on disk.
pub fn write_image(path: &Path, image: &Image) -> Result<(), CliErrors> {
    let bytes = BmpEncoder::new(image).encode()?;

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;

    info!("Wrote {} bytes to {:?}", bytes.len(), path);

    Ok(())
}
