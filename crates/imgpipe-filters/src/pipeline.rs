/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Run several filters one after the other
//!
//! A pipeline is created from filter specifications, all of them are
//! validated before the pipeline exists so a bad argument at the end of
//! a long chain is reported before any pixel is processed.
use std::time::Instant;

use imgpipe_core::errors::ImageErrors;
use imgpipe_core::image::Image;
use log::Level::Trace;
use log::{log_enabled, trace};

use crate::errors::FilterErrors;
use crate::filter::{Filter, FilterSpec};
use crate::traits::OperationsTrait;

/// An ordered list of filters
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pipeline {
    filters: Vec<Filter>
}

impl Pipeline {
    /// Create an empty pipeline, running it returns the input unchanged
    #[must_use]
    pub fn new() -> Pipeline {
        Pipeline::default()
    }

    /// Resolve every specification into a filter
    ///
    /// # Errors
    /// The first specification that fails to resolve, see [`Filter::from_spec`]
    pub fn from_specs(specs: &[FilterSpec]) -> Result<Pipeline, FilterErrors> {
        let filters = specs
            .iter()
            .map(Filter::from_spec)
            .collect::<Result<Vec<Filter>, FilterErrors>>()?;

        Ok(Pipeline { filters })
    }

    /// Add a filter to the end of the pipeline
    pub fn chain(&mut self, filter: Filter) -> &mut Pipeline {
        self.filters.push(filter);
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Apply every filter in order, each one consuming the output of the previous
    ///
    /// # Errors
    /// The first error raised by a filter, later filters do not run
    pub fn run(&self, image: Image) -> Result<Image, ImageErrors> {
        let mut image = image;

        for filter in &self.filters {
            let operation_name = filter.name();

            trace!("Running {}", operation_name);

            let start = Instant::now();

            image = filter.apply(&image)?;

            let stop = Instant::now();

            trace!(
                "Finished running `{operation_name}` in {} ms",
                (stop - start).as_millis()
            );
        }
        if log_enabled!(Trace) && !self.filters.is_empty() {
            let (width, height) = image.dimensions();
            trace!("Pipeline output is {}x{}", width, height);
        }
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use imgpipe_core::errors::ImageErrors;
    use imgpipe_core::image::Image;
    use imgpipe_core::pixel::Pixel;

    use crate::crop::Crop;
    use crate::errors::FilterErrors;
    use crate::filter::{Filter, FilterSpec};
    use crate::negative::Negative;
    use crate::pipeline::Pipeline;

    #[test]
    fn empty_pipeline_is_identity() {
        let image = Image::fill(Pixel::new(1, 2, 3), 3, 3).unwrap();
        assert_eq!(Pipeline::new().run(image.clone()).unwrap(), image);
    }

    #[test]
    fn filters_run_in_order() {
        let image = Image::from_fn(4, 4, |row, col| Pixel::gray((row * 4 + col) as u8)).unwrap();

        let mut pipeline = Pipeline::new();
        pipeline
            .chain(Filter::Crop(Crop::new(2, 2)))
            .chain(Filter::Negative(Negative));

        let out = pipeline.run(image).unwrap();

        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get(1, 1).unwrap(), Pixel::gray(255 - 5));
    }

    #[test]
    fn specs_are_all_resolved_first() {
        let specs = [
            FilterSpec::new("-neg", &[]),
            FilterSpec::new("-crop", &["10"]),
            FilterSpec::new("-nope", &[])
        ];
        assert!(matches!(
            Pipeline::from_specs(&specs),
            Err(FilterErrors::WrongArgumentCount { filter: "crop", .. })
        ));

        let specs = [
            FilterSpec::new("-crop", &["10", "20"]),
            FilterSpec::new("-neg", &[]),
            FilterSpec::new("-blur", &["0.5"])
        ];
        assert_eq!(Pipeline::from_specs(&specs).unwrap().filters().len(), 3);
    }

    #[test]
    fn first_error_stops_the_pipeline() {
        let image = Image::fill(Pixel::BLACK, 3, 3).unwrap();

        let mut pipeline = Pipeline::new();
        pipeline
            .chain(Filter::Crop(Crop::new(0, 3)))
            .chain(Filter::Negative(Negative));

        assert!(matches!(
            pipeline.run(image),
            Err(ImageErrors::ZeroDimensions(0, 3))
        ));
    }
}
