/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use imgpipe_bmp::{probe_bmp, BmpDecoder, BmpDecoderErrors, BmpEncoder};
use imgpipe_core::image::Image;
use imgpipe_core::pixel::Pixel;
use nanorand::Rng;

fn random_image(width: usize, height: usize) -> Image {
    let mut rng = nanorand::WyRand::new();
    Image::from_fn(width, height, |_, _| {
        Pixel::new(rng.generate(), rng.generate(), rng.generate())
    })
    .unwrap()
}

#[test]
fn roundtrip_every_padding() {
    // widths 1..=4 cover padding of 1, 2, 3 and 0 bytes
    for width in 1..=4 {
        for height in 1..=3 {
            let image = random_image(width, height);
            let bytes = BmpEncoder::new(&image).encode().unwrap();

            let stride = (width * 3 + 3) & !3;
            assert_eq!(bytes.len(), 54 + stride * height);
            assert!(probe_bmp(&bytes));

            let decoded = BmpDecoder::new(&bytes).decode().unwrap();
            assert_eq!(decoded, image, "{width}x{height}");
        }
    }
}

#[test]
fn padding_bytes_are_zero() {
    let image = random_image(3, 5);
    let bytes = BmpEncoder::new(&image).encode().unwrap();

    for row in bytes[54..].chunks_exact(12) {
        assert_eq!(&row[9..], &[0, 0, 0]);
    }
}

#[test]
fn empty_and_short_inputs_fail() {
    assert!(BmpDecoder::new(&[]).decode().is_err());
    assert!(BmpDecoder::new(b"BM").decode().is_err());

    let image = random_image(4, 4);
    let bytes = BmpEncoder::new(&image).encode().unwrap();
    let result = BmpDecoder::new(&bytes[..bytes.len() - 1]).decode();

    assert!(matches!(result, Err(BmpDecoderErrors::TooSmallBuffer(..))));
}

#[test]
fn zero_width_header_is_rejected() {
    let image = random_image(2, 2);
    let mut bytes = BmpEncoder::new(&image).encode().unwrap();
    bytes[18..22].copy_from_slice(&0_i32.to_le_bytes());

    assert!(BmpDecoder::new(&bytes).decode().is_err());
}
