/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use imgpipe_filters::filter::FilterSpec;
use imgpipe_filters::pipeline::Pipeline;
use log::Level::Debug;
use log::{debug, info, log_enabled};

use crate::cmd_parsers::filters::parse_filters;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{write_image, BmpFile};
use crate::probe_files::probe_input_file;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    info!("Creating workflows from input");

    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or_else(|| CliErrors::GenericString("No input file given".to_string()))?;

    if cmd_opts.probe {
        verify_input_path(in_file)?;
        println!("{}", probe_input_file(in_file)?);
        return Ok(());
    }

    let out_file = args
        .get_one::<PathBuf>("out")
        .ok_or_else(|| CliErrors::GenericString("No output file given".to_string()))?;

    let specs = parse_filters(args)?;

    run_workflow(in_file, out_file, &specs, cmd_opts)
}

/// Read `in_file`, run every filter in `specs` and write the result to `out_file`
///
/// Paths and filters are validated before anything is read, nothing is
/// written unless every step succeeds.
pub(crate) fn run_workflow(
    in_file: &Path, out_file: &Path, specs: &[FilterSpec], cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    verify_file_paths(in_file, out_file, cmd_opts)?;

    let pipeline = Pipeline::from_specs(specs)?;

    if log_enabled!(Debug) {
        for filter in pipeline.filters() {
            debug!("Queued {:?}", filter);
        }
    }
    if pipeline.filters().is_empty() {
        info!("No filters given, the image will be copied");
    }

    let image = BmpFile::new(in_file, cmd_opts.decoder_options).read_image()?;

    let (width, height) = image.dimensions();
    info!("Decoded {:?}, {}x{}", in_file, width, height);

    let image = pipeline.run(image)?;

    write_image(out_file, &image)
}

fn verify_input_path(in_path: &Path) -> Result<(), CliErrors> {
    if !in_path.exists() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }
    Ok(())
}

fn verify_file_paths(in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    if in_path == out_path {
        return Err(CliErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            in_path
        )));
    }
    verify_input_path(in_path)?;

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            return Err(CliErrors::GenericString(format!(
                "File {:?} exists, pass --yes to overwrite it",
                out_path
            )));
        }
    }
    Ok(())
}
