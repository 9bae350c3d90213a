/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::Write;

use imgpipe_filters::filter::FILTER_USAGE;

pub static OVERVIEW_HELP: &str = "Apply a chain of filters to a 24-bit BMP image

Usage: imgpipe [OPTIONS] <input.bmp> <output.bmp> [-filter [args...]]...

Filters run from left to right, each one consuming the output of the previous.
Options must come before the first filter.";

pub static FILTERS_HELP: &str = "Filters to apply, in order

A token starting with '-' followed by a letter starts a new filter, every
other token is an argument of the filter before it, so negative numbers
like -1 are arguments.";

pub static STRICT_HELP: &str = "Treat most warnings as errors

With this the decoder rejects files whose header does not
match the data, e.g a file size that differs from the real one.";

/// List every filter with its arguments
pub fn filters_help() -> String {
    let mut help = String::from("Filters:\n");

    for (_, usage, description) in FILTER_USAGE {
        // writing to a string cannot fail
        let _ = writeln!(help, "  {usage:<20} {description}");
    }
    help
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::help_strings::filters_help;

    #[test]
    fn lists_every_filter() {
        let help = filters_help();
        for name in ["-crop", "-gs", "-neg", "-sharp", "-edge", "-blur", "-pix"] {
            assert!(help.contains(name), "{name}");
        }
    }
}
