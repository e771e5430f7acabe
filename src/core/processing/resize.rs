//! Aspect-ratio-preserving resize primitives built on `fast_image_resize`.
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::{Error, Result};
use crate::raster::Raster;

/// Compute the largest dimensions fitting inside `(target_cols, target_rows)`
/// while preserving the source aspect ratio. The relatively larger source
/// dimension is matched to its target exactly; the other is scaled by the
/// same ratio and truncated to whole pixels. When the ratios are exactly
/// equal, width is the matched dimension.
pub fn calculate_fit_dimensions(
    cols: usize,
    rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> (usize, usize) {
    let image_ratio = cols as f64 / rows as f64;
    let target_ratio = target_cols as f64 / target_rows as f64;
    if image_ratio >= target_ratio {
        let new_rows = ((target_cols as f64 / image_ratio) as usize).max(1);
        (target_cols, new_rows)
    } else {
        let new_cols = ((target_rows as f64 * image_ratio) as usize).max(1);
        (new_cols, target_rows)
    }
}

fn resize_rgb(raster: &Raster, target_cols: usize, target_rows: usize) -> Result<Raster> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        raster.width() as u32,
        raster.height() as u32,
        raster.to_raw_vec(),
        PixelType::U8x3,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    Raster::from_raw(target_cols, target_rows, dst_image.into_vec())
}

/// Resize `raster` to fit inside `desired_size` (width, height) without
/// distorting its aspect ratio. Input already at exactly the desired size
/// is returned unchanged.
pub fn resize_keeping_aspect_ratio(raster: &Raster, desired_size: (usize, usize)) -> Result<Raster> {
    let (target_cols, target_rows) = desired_size;
    if (raster.width(), raster.height()) == desired_size {
        return Ok(raster.clone());
    }
    let (new_cols, new_rows) =
        calculate_fit_dimensions(raster.width(), raster.height(), target_cols, target_rows);
    debug!(
        "Aspect resize: {}x{} -> {}x{} (box {}x{})",
        raster.width(),
        raster.height(),
        new_cols,
        new_rows,
        target_cols,
        target_rows
    );
    resize_rgb(raster, new_cols, new_rows)
}

/// Resize `raster` by a uniform scale factor; scale > 1 zooms in, < 1 zooms
/// out. Target dimensions are truncated to whole pixels, never below one.
pub fn resize_scaled(raster: &Raster, scale_factor: f64) -> Result<Raster> {
    if !(scale_factor > 0.0) {
        return Err(Error::InvalidScaleFactor {
            factor: scale_factor,
        });
    }
    let new_cols = ((raster.width() as f64 * scale_factor) as usize).max(1);
    let new_rows = ((raster.height() as f64 * scale_factor) as usize).max(1);
    resize_rgb(raster, new_cols, new_rows)
}
