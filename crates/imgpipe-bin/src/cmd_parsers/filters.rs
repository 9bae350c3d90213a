/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Group the trailing command line tokens into filter specifications
//!
//! ```text
//!  -crop 10 20 -neg -blur -1
//!  └────┬────┘ └┬─┘ └───┬──┘
//!     spec     spec   spec
//! ```
//! A token that starts with `-` followed by something other than a digit
//! or a `.` names a filter, so negative numbers stay arguments.
use clap::ArgMatches;
use imgpipe_filters::filter::FilterSpec;
use log::debug;

use crate::errors::CliErrors;

/// Whether `token` starts a new filter
pub fn is_filter_name(token: &str) -> bool {
    let mut chars = token.chars();

    chars.next() == Some('-')
        && chars
            .next()
            .map_or(false, |c| !(c.is_ascii_digit() || c == '.'))
}

/// Split `tokens` into filter specifications, in command line order
///
/// # Errors
/// If an argument appears before any filter name
pub fn tokenize_filters<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<FilterSpec>, CliErrors> {
    let mut specs: Vec<FilterSpec> = Vec::new();

    for token in tokens {
        let token = token.as_ref();

        if is_filter_name(token) {
            specs.push(FilterSpec {
                name: token.to_string(),
                args: Vec::new()
            });
        } else if let Some(spec) = specs.last_mut() {
            spec.args.push(token.to_string());
        } else {
            return Err(CliErrors::GenericString(format!(
                "Argument `{token}` does not follow a filter name, filters start with '-'"
            )));
        }
    }
    for spec in &specs {
        debug!("Filter specification: {}", spec);
    }
    Ok(specs)
}

/// Filter specifications from the parsed command line
pub fn parse_filters(options: &ArgMatches) -> Result<Vec<FilterSpec>, CliErrors> {
    let tokens: Vec<&String> = options
        .get_many::<String>("filters")
        .map(Iterator::collect)
        .unwrap_or_default();

    tokenize_filters(&tokens)
}
