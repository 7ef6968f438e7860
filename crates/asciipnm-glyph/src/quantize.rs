/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciipnm_core::{set_max_color_value, Raster, RasterErrors};

/// Remap every sample onto the integer range `[0, levels]`
///
/// Lower samples never map to higher levels than larger ones.
pub fn change_gradient(raster: &Raster, levels: u32) -> Result<Raster, RasterErrors> {
    set_max_color_value(raster, levels)
}

#[cfg(test)]
mod tests {
    use asciipnm_core::{FormatKind, Raster};
    use nanorand::Rng;

    use crate::change_gradient;

    #[test]
    fn gradient_example() {
        let raster = Raster::new(FormatKind::Grayscale, 2, 2, 255, vec![0, 85, 170, 255]).unwrap();
        let levels = change_gradient(&raster, 11).unwrap();

        assert_eq!(levels.samples(), &[0, 3, 7, 11]);
    }

    #[test]
    fn gradient_is_monotonic() {
        let mut rand = nanorand::WyRand::new_seed(99);

        for max_value in [1, 7, 100, 255, 4095, 65535] {
            let mut samples: Vec<u32> = (0..512).map(|_| rand.generate_range(0..=max_value)).collect();
            samples.sort_unstable();

            let raster = Raster::new(FormatKind::Grayscale, 512, 1, max_value, samples).unwrap();
            let levels = change_gradient(&raster, 11).unwrap();

            assert!(levels.samples().windows(2).all(|x| x[0] <= x[1]));
            assert!(levels.samples().iter().all(|x| *x <= 11));
        }
    }
}
