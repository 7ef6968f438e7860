/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_imageprocs::depth::MaxValue;
use asciipnm_imageprocs::pad::Border;
use asciipnm_imageprocs::resize::Enlarge;
use asciipnm_imageprocs::traits::RasterOperation;
use clap::ArgMatches;
use log::debug;

use crate::cmd_args::IBorderColor;

/// Collect the raster operations in the order they appear
/// on the command line
pub fn get_operations(args: &ArgMatches) -> Vec<Box<dyn RasterOperation>> {
    let mut operations: Vec<(usize, Box<dyn RasterOperation>)> = Vec::with_capacity(3);

    if let (Some(depth), Some(index)) = (args.get_one::<u32>("depth"), args.index_of("depth")) {
        debug!("Added max value operation with value {depth}");
        operations.push((index, Box::new(MaxValue::new(*depth))));
    }
    if let (Some(factor), Some(index)) =
        (args.get_one::<usize>("enlarge"), args.index_of("enlarge"))
    {
        debug!("Added enlarge operation with factor {factor}");
        operations.push((index, Box::new(Enlarge::new(*factor))));
    }
    if let (Some(width), Some(index)) = (args.get_one::<usize>("border"), args.index_of("border"))
    {
        let color = args
            .get_one::<IBorderColor>("border-color")
            .copied()
            .unwrap_or(IBorderColor::White)
            .to_border_color();

        debug!("Added border operation, width {width} color {color:?}");
        operations.push((index, Box::new(Border::new(*width, color))));
    }
    operations.sort_by_key(|(index, _)| *index);

    operations.into_iter().map(|(_, op)| op).collect()
}
