/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use imgpipe_core::options::DecoderOptions;
use log::{info, Level};

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decoder_options: DecoderOptions,
    pub override_files:  bool,
    pub probe:           bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            decoder_options: DecoderOptions::new_cmd(),
            override_files:  false,
            probe:           false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.decoder_options = get_decoder_options(options);

    info!(
        "Maximum image dimensions: {}x{}",
        cmd_options.decoder_options.max_width(),
        cmd_options.decoder_options.max_height()
    );

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }

    if options.value_source("probe") == Some(ValueSource::CommandLine) {
        info!("Probing input, no output will be written");
        cmd_options.probe = true;
    }
    cmd_options
}

/// Pick the log level from the command line, warn when nothing is given
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use imgpipe_core::options::DEFAULT_MAX_DIMENSION;
    use log::Level;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::{log_level, parse_options};

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["imgpipe", "a.bmp", "b.bmp"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(log_level(&matches), Level::Warn);
        assert!(!options.override_files);
        assert!(!options.probe);
        assert!(!options.decoder_options.strict_mode());
        assert_eq!(options.decoder_options.max_width(), DEFAULT_MAX_DIMENSION);
        assert_eq!(options.decoder_options.max_height(), DEFAULT_MAX_DIMENSION);
    }

    #[test]
    fn flags_are_read() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "imgpipe",
                "--trace",
                "-y",
                "--strict",
                "--max-width",
                "20",
                "a.bmp",
                "b.bmp"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(log_level(&matches), Level::Trace);
        assert!(options.override_files);
        assert!(options.decoder_options.strict_mode());
        assert_eq!(options.decoder_options.max_width(), 20);
    }
}
