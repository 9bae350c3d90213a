/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{filters_help, FILTERS_HELP, OVERVIEW_HELP, STRICT_HELP};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("imgpipe")
        .about("Apply a chain of filters to a 24-bit BMP image")
        .long_about(OVERVIEW_HELP)
        .after_help(filters_help())
        .arg(Arg::new("in")
            .help("Input file to read data from")
            .value_parser(value_parser!(PathBuf))
            .index(1))
        .arg(Arg::new("out")
            .help("Output to write the data to")
            .value_parser(value_parser!(PathBuf))
            .index(2))
        .arg(Arg::new("filters")
            .help("Filters to apply, in order, e.g -crop 800 600 -gs -blur 0.5")
            .long_help(FILTERS_HELP)
            .num_args(1..)
            .allow_hyphen_values(true)
            .trailing_var_arg(true)
            .action(ArgAction::Append)
            .index(3))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Print the input's header information as json and exit"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Overwrite the output file if it exists"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an image to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an image to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat most warnings as errors")
            .long_help(STRICT_HELP))
}
