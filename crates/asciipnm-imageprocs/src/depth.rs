/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_core::{set_max_color_value, Raster};

use crate::errors::ProcsErrors;
use crate::traits::RasterOperation;

/// Reduce the max value of a raster
///
/// See [`set_max_color_value`] for the exact mapping, a max value of 1
/// thresholds the raster into a bitmap.
#[derive(Copy, Clone, Debug)]
pub struct MaxValue {
    max_value: u32
}

impl MaxValue {
    pub fn new(max_value: u32) -> MaxValue {
        MaxValue { max_value }
    }
}

impl RasterOperation for MaxValue {
    fn name(&self) -> &'static str {
        "max value"
    }

    fn execute(&self, raster: &Raster) -> Result<Raster, ProcsErrors> {
        Ok(set_max_color_value(raster, self.max_value)?)
    }
}

#[cfg(test)]
mod tests {
    use asciipnm_core::{FormatKind, Raster};

    use crate::depth::MaxValue;
    use crate::errors::ProcsErrors;
    use crate::traits::RasterOperation;

    #[test]
    fn max_value_one_gives_bitmap() {
        let raster = Raster::new(FormatKind::Grayscale, 2, 1, 255, vec![3, 250]).unwrap();
        let bitmap = MaxValue::new(1).execute(&raster).unwrap();

        assert_eq!(bitmap.kind(), FormatKind::Bitmap);
        assert_eq!(bitmap.samples(), &[0, 1]);
    }

    #[test]
    fn zero_is_rejected() {
        let raster = Raster::filled(FormatKind::Grayscale, 1, 1, 255, 0).unwrap();

        assert!(matches!(
            MaxValue::new(0).execute(&raster),
            Err(ProcsErrors::Raster(_))
        ));
    }
}
