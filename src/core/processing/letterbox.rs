//! Letterboxing: aspect-fit resize followed by centered solid-color padding
//! to an exact target size.
use ndarray::s;
use tracing::debug;

use crate::core::processing::resize::resize_keeping_aspect_ratio;
use crate::error::Result;
use crate::raster::{Color, Raster};

/// Resize `raster` into `desired_size` (width, height) preserving aspect
/// ratio, then pad with `color` so the output is exactly `desired_size`.
/// Top/left padding is the floor half of the total; bottom/right take the
/// remainder. Input already at the target size is returned unchanged.
pub fn letterbox_image(
    raster: &Raster,
    desired_size: (usize, usize),
    color: Color,
) -> Result<Raster> {
    let (target_cols, target_rows) = desired_size;
    let resized = resize_keeping_aspect_ratio(raster, desired_size)?;
    if (resized.width(), resized.height()) == desired_size {
        return Ok(resized);
    }

    let top = (target_rows - resized.height()) / 2;
    let left = (target_cols - resized.width()) / 2;
    debug!(
        "Letterbox: content {}x{} centered at ({}, {}) in {}x{}",
        resized.width(),
        resized.height(),
        left,
        top,
        target_cols,
        target_rows
    );

    let mut padded = Raster::solid(target_cols, target_rows, color);
    padded
        .data_mut()
        .slice_mut(s![
            top..top + resized.height(),
            left..left + resized.width(),
            ..
        ])
        .assign(resized.data());
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILL: Color = Color::rgb(200, 100, 50);

    #[test]
    fn output_always_has_requested_dimensions() {
        for &(w, h) in &[(10usize, 100usize), (100, 10), (64, 64), (1, 1)] {
            let raster = Raster::solid(w, h, Color::rgb(0, 0, 0));
            let boxed = letterbox_image(&raster, (50, 40), FILL).unwrap();
            assert_eq!((boxed.width(), boxed.height()), (50, 40));
        }
    }

    #[test]
    fn letterboxing_is_idempotent_on_sized_input() {
        let raster = Raster::solid(50, 40, Color::rgb(7, 7, 7));
        let boxed = letterbox_image(&raster, (50, 40), FILL).unwrap();
        assert_eq!(boxed, raster);
    }

    #[test]
    fn padding_splits_floor_top_remainder_bottom() {
        // 40x20 into 40x41: content resized to 40x20, total pad 21 -> 10 top, 11 bottom
        let raster = Raster::solid(40, 20, Color::rgb(1, 1, 1));
        let boxed = letterbox_image(&raster, (40, 41), FILL).unwrap();
        // rows 0..10 and 30..41 are fill; rows 10..30 are content
        assert_eq!(boxed.data()[[9, 0, 0]], FILL.r);
        assert_eq!(boxed.data()[[10, 0, 0]], 1);
        assert_eq!(boxed.data()[[29, 0, 0]], 1);
        assert_eq!(boxed.data()[[30, 0, 0]], FILL.r);
    }

    #[test]
    fn horizontal_padding_centers_content() {
        let raster = Raster::solid(10, 20, Color::rgb(5, 5, 5));
        let boxed = letterbox_image(&raster, (40, 20), FILL).unwrap();
        // content is 10x20, pads 15 left / 15 right
        assert_eq!(boxed.data()[[0, 14, 0]], FILL.r);
        assert_eq!(boxed.data()[[0, 15, 0]], 5);
        assert_eq!(boxed.data()[[0, 24, 0]], 5);
        assert_eq!(boxed.data()[[0, 25, 0]], FILL.r);
    }
}
