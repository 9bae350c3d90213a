/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use imgpipe_bmp::BmpDecoder;
use imgpipe_core::options::DecoderOptions;

use crate::errors::CliErrors;
use crate::serde::Metadata;

/// Read the headers of `in_file` and describe them as pretty printed json
pub fn probe_input_file(in_file: &Path) -> Result<String, CliErrors> {
    let data = std::fs::read(in_file)?;

    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::new_cmd()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let mut decoder = BmpDecoder::new_with_options(&data, options);
    decoder.decode_headers()?;

    let missing = || CliErrors::GenericString("Headers were not decoded".to_string());
    let (width, height) = decoder.dimensions().ok_or_else(missing)?;

    let metadata = Metadata {
        file: in_file,
        file_size: data.len() as u64,
        header_file_size: decoder.header_file_size().ok_or_else(missing)?,
        width,
        height,
        bit_depth: decoder.bit_depth().ok_or_else(missing)?,
        info_header_size: decoder.info_header_size().ok_or_else(missing)?,
        top_down: decoder.is_top_down().ok_or_else(missing)?
    };

    Ok(serde_json::to_string_pretty(&metadata)?)
}

#[cfg(test)]
mod tests {
    use imgpipe_bmp::BmpEncoder;
    use imgpipe_core::image::Image;
    use imgpipe_core::pixel::Pixel;

    use crate::probe_files::probe_input_file;

    #[test]
    fn probe_prints_dimensions() {
        let path = std::env::temp_dir().join(format!("imgpipe-probe-{}.bmp", std::process::id()));
        let image = Image::fill(Pixel::gray(3), 5, 2).unwrap();
        std::fs::write(&path, BmpEncoder::new(&image).encode().unwrap()).unwrap();

        let json = probe_input_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["width"], 5);
        assert_eq!(value["height"], 2);
        assert_eq!(value["bit_depth"], 24);
        assert_eq!(value["top_down"], false);
        // 54 + 2 rows of 16 bytes
        assert_eq!(value["file_size"], 86);
        assert_eq!(value["header_file_size"], 86);
    }
}
