/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Depth reduction
//!
//! Maps samples from `[0, old_max]` onto `[0, k]`.
use log::trace;

use crate::errors::RasterErrors;
use crate::raster::{FormatKind, Raster};

/// Return a copy of `raster` whose samples lie in `[0, k]`
///
/// - When `k == 1` every sample is thresholded, samples strictly greater
///   than half of the old max value become `1`, the rest `0`. The result is
///   a [`FormatKind::Bitmap`] raster, except for color rasters which are
///   thresholded per channel and keep their kind.
/// - When `old_max >= k` an integer step `floor(old_max / k)` is computed and
///   every sample becomes `floor(sample / step)`, saturating at `k`.
/// - When `old_max < k` samples are widened to `floor(sample * k / old_max)`,
///   saturating at `k`, so a sample at the old max lands on `k`.
///
/// A bitmap source becomes a grayscale raster when `k > 1`.
///
/// Applying the function twice with the same `k` gives the same result
/// as applying it once.
///
/// # Errors
/// If `k` is zero
///
/// # Example
/// ```
/// use asciipnm_core::{set_max_color_value, FormatKind, Raster};
///
/// let raster = Raster::new(FormatKind::Grayscale, 2, 2, 255, vec![0, 85, 170, 255]).unwrap();
/// let reduced = set_max_color_value(&raster, 11).unwrap();
///
/// assert_eq!(reduced.samples(), &[0, 3, 7, 11]);
/// assert_eq!(reduced.max_value(), 11);
/// ```
pub fn set_max_color_value(raster: &Raster, k: u32) -> Result<Raster, RasterErrors> {
    if k == 0 {
        return Err(RasterErrors::InvalidMaxValue(k));
    }
    let old_max = u64::from(raster.max_value());

    if k == 1 {
        let kind = match raster.kind() {
            FormatKind::Color => FormatKind::Color,
            _ => FormatKind::Bitmap
        };
        trace!("Thresholding {:?} raster at half of {old_max}", raster.kind());

        // sample / old_max > 0.5, without going through floats
        return Ok(raster.map_samples(kind, 1, |x| u32::from(2 * u64::from(x) > old_max)));
    }

    let kind = match raster.kind() {
        FormatKind::Bitmap => FormatKind::Grayscale,
        kind => kind
    };

    if old_max < u64::from(k) {
        let old_max = old_max.max(1);
        let wide_k = u64::from(k);

        trace!("Widening depth from {old_max} to {k}");

        // the product fits in u64 since both factors fit in u32
        return Ok(raster.map_samples(kind, k, |x| {
            (u64::from(x) * wide_k / old_max).min(wide_k) as u32
        }));
    }
    let step = (raster.max_value() / k).max(1);

    trace!("Reducing depth from {old_max} to {k} with step {step}");

    Ok(raster.map_samples(kind, k, |x| (x / step).min(k)))
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::{set_max_color_value, FormatKind, Raster, RasterErrors};

    fn random_gray(max_value: u32) -> Raster {
        let mut rand = nanorand::WyRand::new_seed(42);
        let samples = (0..64 * 48)
            .map(|_| rand.generate_range(0..=max_value))
            .collect();

        Raster::new(FormatKind::Grayscale, 64, 48, max_value, samples).unwrap()
    }

    #[test]
    fn threshold_produces_bitmap() {
        let raster = Raster::new(FormatKind::Grayscale, 4, 1, 255, vec![0, 127, 128, 255]).unwrap();
        let reduced = set_max_color_value(&raster, 1).unwrap();

        assert_eq!(reduced.kind(), FormatKind::Bitmap);
        assert_eq!(reduced.max_value(), 1);
        // 127/255 < 0.5 < 128/255
        assert_eq!(reduced.samples(), &[0, 0, 1, 1]);
    }

    #[test]
    fn threshold_at_exact_half_is_background() {
        let raster = Raster::new(FormatKind::Grayscale, 2, 1, 10, vec![5, 6]).unwrap();
        let reduced = set_max_color_value(&raster, 1).unwrap();

        assert_eq!(reduced.samples(), &[0, 1]);
    }

    #[test]
    fn zero_levels_is_an_error() {
        let raster = random_gray(255);
        assert!(matches!(
            set_max_color_value(&raster, 0),
            Err(RasterErrors::InvalidMaxValue(0))
        ));
    }

    #[test]
    fn reduction_never_exceeds_k() {
        // 20 / 11 rounds to a step of 1, so raw division would overshoot
        let raster = random_gray(20);
        let reduced = set_max_color_value(&raster, 11).unwrap();

        assert!(reduced.samples().iter().all(|x| *x <= 11));
    }

    #[test]
    fn reduction_is_idempotent() {
        let raster = random_gray(255);

        for k in [1, 2, 3, 11, 100, 255] {
            let once = set_max_color_value(&raster, k).unwrap();
            let twice = set_max_color_value(&once, k).unwrap();

            assert_eq!(once, twice, "k = {k}");
        }
    }

    #[test]
    fn reduction_is_monotonic() {
        let samples: Vec<u32> = (0..=255).collect();
        let raster = Raster::new(FormatKind::Grayscale, 256, 1, 255, samples).unwrap();
        let reduced = set_max_color_value(&raster, 11).unwrap();

        for pair in reduced.samples().windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn source_is_untouched() {
        let raster = random_gray(255);
        let copy = raster.clone();

        let _ = set_max_color_value(&raster, 7).unwrap();
        assert_eq!(raster, copy);
    }

    #[test]
    fn bitmap_widened_becomes_grayscale() {
        let raster = Raster::new(FormatKind::Bitmap, 2, 1, 1, vec![0, 1]).unwrap();
        let widened = set_max_color_value(&raster, 3).unwrap();

        assert_eq!(widened.kind(), FormatKind::Grayscale);
        assert_eq!(widened.max_value(), 3);
        assert_eq!(widened.samples(), &[0, 3]);
    }

    #[test]
    fn low_depth_source_is_stretched() {
        let samples: Vec<u32> = (0..=5).collect();
        let raster = Raster::new(FormatKind::Grayscale, 6, 1, 5, samples).unwrap();
        let widened = set_max_color_value(&raster, 11).unwrap();

        // floor(x * 11 / 5)
        assert_eq!(widened.samples(), &[0, 2, 4, 6, 8, 11]);

        for max_value in [1, 2, 5, 7, 10] {
            let raster = Raster::filled(FormatKind::Grayscale, 3, 2, max_value, max_value).unwrap();
            let widened = set_max_color_value(&raster, 11).unwrap();

            assert!(widened.samples().iter().all(|x| *x == 11), "max = {max_value}");
        }
    }

    #[test]
    fn widening_is_idempotent() {
        let raster = random_gray(7);

        for k in [8, 11, 255] {
            let once = set_max_color_value(&raster, k).unwrap();
            let twice = set_max_color_value(&once, k).unwrap();

            assert_eq!(once, twice, "k = {k}");
        }
    }
}
