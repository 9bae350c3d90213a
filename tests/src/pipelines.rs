/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use imgpipe_bmp::{BmpDecoder, BmpEncoder};
use imgpipe_core::image::Image;
use imgpipe_core::options::DecoderOptions;
use imgpipe_core::pixel::Pixel;
use imgpipe_filters::filter::FilterSpec;
use imgpipe_filters::pipeline::Pipeline;

use crate::{hash, sample_path, test_pattern, TestEntry};

/// Decode `bytes`, run the pipeline and encode the result
fn run_through_bmp(bytes: &[u8], specs: &[FilterSpec]) -> Vec<u8> {
    let image = BmpDecoder::new_with_options(bytes, DecoderOptions::new_safe())
        .decode()
        .unwrap();

    let pipeline = Pipeline::from_specs(specs).unwrap();
    let output = pipeline.run(image).unwrap();

    BmpEncoder::new(&output).encode().unwrap()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_pipelines() {
    let file = sample_path().join("tests/pipelines.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let [width, height] = entry.size;
        let source = BmpEncoder::new(&test_pattern(width, height))
            .encode()
            .unwrap();

        let specs: Vec<FilterSpec> = entry.filters.iter().map(|x| x.to_spec()).collect();

        let first = run_through_bmp(&source, &specs);
        let second = run_through_bmp(&source, &specs);

        let mut problems = Vec::new();

        if hash(&first) != hash(&second) {
            problems.push(format!(
                "Hash mismatch between runs, {} vs {}",
                hash(&first),
                hash(&second)
            ));
        }

        let output = BmpDecoder::new(&first).decode().unwrap();

        if output.dimensions() != (entry.expected[0], entry.expected[1]) {
            problems.push(format!(
                "Expected dimensions {:?} but found {:?}",
                entry.expected,
                output.dimensions()
            ));
        }
        if let Some(expected) = entry.top_left {
            let found = output.get(0, 0).unwrap();
            if found != expected {
                problems.push(format!(
                    "Expected top left pixel {:?} but found {:?}",
                    expected, found
                ));
            }
        }
        if entry.binary
            && !output
                .pixels()
                .iter()
                .all(|x| *x == Pixel::WHITE || *x == Pixel::BLACK)
        {
            problems.push("Output is not black and white".to_string());
        }

        if !problems.is_empty() {
            error = true;
            failed.push(entry.name.clone());
            eprintln!("{}: {:#?}\nConfig:{:#?}\n", entry.name, problems, entry);
        }
    }
    if error {
        panic!("Errors found during pipeline tests\n {:#?}", failed);
    }
}

#[test]
fn encoded_source_is_stable() {
    // the source bytes feed every hash above, they must not drift between runs
    let a = BmpEncoder::new(&test_pattern(31, 9)).encode().unwrap();
    let b = BmpEncoder::new(&test_pattern(31, 9)).encode().unwrap();

    assert_eq!(hash(&a), hash(&b));
    assert_eq!(
        BmpDecoder::new(&a).decode().unwrap(),
        test_pattern(31, 9)
    );
}

#[test]
fn empty_pipeline_keeps_bytes() {
    let source = BmpEncoder::new(&test_pattern(13, 5)).encode().unwrap();
    let output = run_through_bmp(&source, &[]);

    assert_eq!(hash(&source), hash(&output));
}

#[test]
fn image_is_not_modified_by_filters() {
    let image: Image = test_pattern(12, 12);
    let copy = image.clone();

    let specs = [
        FilterSpec::new("-sharp", &[]),
        FilterSpec::new("-edge", &["0.2"])
    ];
    let pipeline = Pipeline::from_specs(&specs).unwrap();
    let _ = pipeline.run(image.clone()).unwrap();

    assert_eq!(image, copy);
}
