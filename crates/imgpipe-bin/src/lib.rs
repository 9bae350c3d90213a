/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod probe_files;
mod serde;
mod workflow;

pub use crate::errors::CliErrors;

pub fn main() {
    let mut cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches_mut();

    if !options.contains_id("in") {
        // nothing to do, show how to use the tool
        if let Err(e) = cmd.print_help() {
            eprintln!("{e}");
            exit(1);
        }
        return;
    }

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let result = create_and_exec_workflow_from_cmd(&options, &parsed_opts);

    if let Err(reason) = result {
        println!();
        error!(" Could not complete workflow, reason {:?}", reason);
        println!();
        exit(1);
    }
}
