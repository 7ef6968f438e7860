/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_core::Raster;

use crate::errors::ProcsErrors;

/// A single raster to raster operation
pub trait RasterOperation {
    /// Name of the operation, used in logs
    fn name(&self) -> &'static str;

    /// Run the operation, returning a new raster
    ///
    /// # Errors
    /// When the raster cannot be processed by this operation
    fn execute(&self, raster: &Raster) -> Result<Raster, ProcsErrors>;
}
