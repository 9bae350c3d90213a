/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Filters selectable from the command line
//!
//! A [`FilterSpec`] is the raw name and arguments as typed by the user,
//! [`Filter::from_spec`] validates them and builds the matching filter.
//!
//! | name    | arguments             | filter                      |
//! |---------|-----------------------|-----------------------------|
//! | `crop`  | width, height         | [`Crop`]                    |
//! | `gs`    |                       | [`Grayscale`]               |
//! | `neg`   |                       | [`Negative`]                |
//! | `sharp` |                       | [`Sharpen`]                 |
//! | `edge`  | threshold in `[0,1]`  | [`EdgeDetect`]              |
//! | `blur`  | sigma                 | [`GaussianBlur`]            |
//! | `pix`   | block size, `> 0`     | [`Pixelate`]                |
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;
use log::debug;

use crate::crop::Crop;
use crate::edge::EdgeDetect;
use crate::errors::FilterErrors;
use crate::gaussian_blur::{kernel_radius, GaussianBlur, MAX_RADIUS};
use crate::grayscale::Grayscale;
use crate::negative::Negative;
use crate::pixelate::Pixelate;
use crate::sharpen::Sharpen;
use crate::traits::OperationsTrait;

/// Names and usage of every filter, in the order they are listed in help output
pub const FILTER_USAGE: [(&str, &str, &str); 7] = [
    ("crop", "-crop width height", "Keep the top left width x height region"),
    ("gs", "-gs", "Convert to grayscale"),
    ("neg", "-neg", "Invert all channels"),
    ("sharp", "-sharp", "Sharpen"),
    ("edge", "-edge threshold", "Edge detection, threshold between 0 and 1"),
    ("blur", "-blur sigma", "Gaussian blur with the given sigma"),
    ("pix", "-pix size", "Pixelate with size x size blocks")
];

/// A filter name and its unparsed arguments
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub name: String,
    pub args: Vec<String>
}

impl FilterSpec {
    pub fn new(name: &str, args: &[&str]) -> FilterSpec {
        FilterSpec {
            name: name.to_string(),
            args: args.iter().map(ToString::to_string).collect()
        }
    }
}

impl Display for FilterSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Every filter that can appear in a pipeline
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Filter {
    Crop(Crop),
    Grayscale(Grayscale),
    Negative(Negative),
    Sharpen(Sharpen),
    EdgeDetect(EdgeDetect),
    GaussianBlur(GaussianBlur),
    Pixelate(Pixelate)
}

/// Check argument count before anything gets parsed
fn expect_args(filter: &'static str, spec: &FilterSpec, expected: usize) -> Result<(), FilterErrors> {
    if spec.args.len() != expected {
        return Err(FilterErrors::WrongArgumentCount {
            filter,
            expected,
            found: spec.args.len()
        });
    }
    Ok(())
}

fn parse_arg<T>(filter: &'static str, argument: &str) -> Result<T, FilterErrors>
where
    T: FromStr,
    T::Err: Display
{
    argument
        .parse::<T>()
        .map_err(|e| FilterErrors::InvalidArgument {
            filter,
            argument: argument.to_string(),
            reason: e.to_string()
        })
}

impl Filter {
    /// Validate a filter specification and build the filter it names
    ///
    /// A leading `-` on the name is optional.
    ///
    /// # Errors
    /// - [`FilterErrors::UnknownFilter`] for names not listed in [`FILTER_USAGE`]
    /// - [`FilterErrors::WrongArgumentCount`] if the argument count is wrong, checked first
    /// - [`FilterErrors::InvalidArgument`] if an argument isn't a number of the required type
    /// - [`FilterErrors::OutOfRange`] for numbers outside the filter's range
    pub fn from_spec(spec: &FilterSpec) -> Result<Filter, FilterErrors> {
        let name = spec.name.strip_prefix('-').unwrap_or(&spec.name);

        let filter = match name {
            "crop" => {
                expect_args("crop", spec, 2)?;
                let width = parse_arg::<usize>("crop", &spec.args[0])?;
                let height = parse_arg::<usize>("crop", &spec.args[1])?;

                Filter::Crop(Crop::new(width, height))
            }
            "gs" => {
                expect_args("gs", spec, 0)?;
                Filter::Grayscale(Grayscale)
            }
            "neg" => {
                expect_args("neg", spec, 0)?;
                Filter::Negative(Negative)
            }
            "sharp" => {
                expect_args("sharp", spec, 0)?;
                Filter::Sharpen(Sharpen)
            }
            "edge" => {
                expect_args("edge", spec, 1)?;
                let threshold = parse_arg::<f64>("edge", &spec.args[0])?;

                if !(0.0..=1.0).contains(&threshold) {
                    return Err(FilterErrors::OutOfRange {
                        filter:   "edge",
                        argument: spec.args[0].clone(),
                        reason:   "threshold must be between 0 and 1"
                    });
                }
                Filter::EdgeDetect(EdgeDetect::new(threshold))
            }
            "blur" => {
                expect_args("blur", spec, 1)?;
                let sigma = parse_arg::<f32>("blur", &spec.args[0])?;

                if !sigma.is_finite() {
                    return Err(FilterErrors::OutOfRange {
                        filter:   "blur",
                        argument: spec.args[0].clone(),
                        reason:   "sigma must be a finite number"
                    });
                }
                if kernel_radius(sigma) > MAX_RADIUS {
                    return Err(FilterErrors::OutOfRange {
                        filter:   "blur",
                        argument: spec.args[0].clone(),
                        reason:   "sigma is too large"
                    });
                }
                Filter::GaussianBlur(GaussianBlur::new(sigma))
            }
            "pix" => {
                expect_args("pix", spec, 1)?;
                let size = parse_arg::<usize>("pix", &spec.args[0])?;

                if size == 0 {
                    return Err(FilterErrors::OutOfRange {
                        filter:   "pix",
                        argument: spec.args[0].clone(),
                        reason:   "pixel size must be greater than zero"
                    });
                }
                Filter::Pixelate(Pixelate::new(size))
            }
            _ => return Err(FilterErrors::UnknownFilter(spec.name.clone()))
        };
        debug!("Resolved `{}` into {:?}", spec, filter);

        Ok(filter)
    }

    fn operation(&self) -> &dyn OperationsTrait {
        match self {
            Filter::Crop(op) => op,
            Filter::Grayscale(op) => op,
            Filter::Negative(op) => op,
            Filter::Sharpen(op) => op,
            Filter::EdgeDetect(op) => op,
            Filter::GaussianBlur(op) => op,
            Filter::Pixelate(op) => op
        }
    }
}

impl OperationsTrait for Filter {
    fn name(&self) -> &'static str {
        self.operation().name()
    }

    fn apply(&self, image: &Image) -> Result<Image, ImageErrors> {
        self.operation().apply(image)
    }
}

#[cfg(test)]
mod tests {
    use imgpipe_core::image::Image;
    use imgpipe_core::pixel::Pixel;

    use crate::crop::Crop;
    use crate::errors::FilterErrors;
    use crate::filter::{Filter, FilterSpec, FILTER_USAGE};
    use crate::traits::OperationsTrait;

    fn resolve(name: &str, args: &[&str]) -> Result<Filter, FilterErrors> {
        Filter::from_spec(&FilterSpec::new(name, args))
    }

    #[test]
    fn resolves_every_listed_filter() {
        let args: [&[&str]; 7] = [&["1", "2"], &[], &[], &[], &["0.5"], &["1.0"], &["3"]];

        for ((name, _, _), args) in FILTER_USAGE.iter().zip(args) {
            assert!(resolve(name, args).is_ok(), "{name}");
            assert!(resolve(&format!("-{name}"), args).is_ok(), "-{name}");
        }
    }

    #[test]
    fn crop_arguments() {
        assert_eq!(
            resolve("-crop", &["10", "20"]).unwrap(),
            Filter::Crop(Crop::new(10, 20))
        );
        assert!(matches!(
            resolve("-crop", &["10"]),
            Err(FilterErrors::WrongArgumentCount {
                filter:   "crop",
                expected: 2,
                found:    1
            })
        ));
        assert!(matches!(
            resolve("-crop", &["ten", "20"]),
            Err(FilterErrors::InvalidArgument { filter: "crop", .. })
        ));
        assert!(matches!(
            resolve("-crop", &["-1", "20"]),
            Err(FilterErrors::InvalidArgument { filter: "crop", .. })
        ));
    }

    #[test]
    fn count_is_checked_before_parsing() {
        assert!(matches!(
            resolve("-edge", &["abc", "def"]),
            Err(FilterErrors::WrongArgumentCount { .. })
        ));
        assert!(matches!(
            resolve("-neg", &["1"]),
            Err(FilterErrors::WrongArgumentCount {
                filter:   "neg",
                expected: 0,
                found:    1
            })
        ));
    }

    #[test]
    fn range_checks() {
        assert!(matches!(
            resolve("-edge", &["1.5"]),
            Err(FilterErrors::OutOfRange { filter: "edge", .. })
        ));
        assert!(matches!(
            resolve("-edge", &["-0.1"]),
            Err(FilterErrors::OutOfRange { filter: "edge", .. })
        ));
        assert!(resolve("-edge", &["0"]).is_ok());
        assert!(resolve("-edge", &["1"]).is_ok());

        assert!(matches!(
            resolve("-pix", &["0"]),
            Err(FilterErrors::OutOfRange { filter: "pix", .. })
        ));
        assert!(matches!(
            resolve("-blur", &["inf"]),
            Err(FilterErrors::OutOfRange { filter: "blur", .. })
        ));
        assert!(matches!(
            resolve("-blur", &["NaN"]),
            Err(FilterErrors::OutOfRange { filter: "blur", .. })
        ));
        assert!(resolve("-blur", &["0"]).is_ok());
        assert!(resolve("-blur", &["-2"]).is_ok());
    }

    #[test]
    fn tiny_blur_keeps_image() {
        let image = Image::fill(Pixel::new(100, 150, 200), 4, 4).unwrap();
        let blur = resolve("-blur", &["1e-30"]).unwrap();

        assert_eq!(blur.apply(&image).unwrap(), image);
    }

    #[test]
    fn unknown_names() {
        assert!(matches!(
            resolve("-sepia", &[]),
            Err(FilterErrors::UnknownFilter(name)) if name == "-sepia"
        ));
        assert!(resolve("--neg", &[]).is_err());
    }

    #[test]
    fn errors_name_the_filter() {
        let err = resolve("-edge", &["2"]).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("edge"));
        assert!(message.contains("between 0 and 1"));
    }

    #[test]
    fn filter_names() {
        assert_eq!(resolve("neg", &[]).unwrap().name(), "Negative");
        assert_eq!(resolve("blur", &["2"]).unwrap().name(), "Gaussian blur");
    }
}
