//! Grid planning: common-tile-size aggregation and (rows, columns)
//! negotiation for a mosaic.
use tracing::debug;

use crate::error::{Error, Result};
use crate::raster::Raster;
use crate::types::TileScaling;

/// Collections of up to this many images are laid out in a single row.
pub const MAX_COLUMNS_FOR_SINGLE_ROW_GRID: usize = 3;

/// Aggregate the input dimensions into a common tile size (width, height),
/// per `mode`: widths and heights are aggregated independently, and `avg`
/// rounds to the nearest whole pixel.
pub fn aggregate_tile_size(rasters: &[Raster], mode: TileScaling) -> (usize, usize) {
    let widths = rasters.iter().map(Raster::width);
    let heights = rasters.iter().map(Raster::height);
    match mode {
        TileScaling::Min => (
            widths.min().unwrap_or(1),
            heights.min().unwrap_or(1),
        ),
        TileScaling::Max => (
            widths.max().unwrap_or(1),
            heights.max().unwrap_or(1),
        ),
        TileScaling::Avg => {
            let count = rasters.len().max(1) as f64;
            let width = (widths.sum::<usize>() as f64 / count).round() as usize;
            let height = (heights.sum::<usize>() as f64 / count).round() as usize;
            (width.max(1), height.max(1))
        }
    }
}

/// Automatic grid negotiation. Up to three images sit in one row; above
/// that the grid starts at the ceiling square root on both sides and rows
/// are trimmed while the last row would stay structurally empty.
pub fn negotiate_grid_size(n_images: usize) -> (usize, usize) {
    if n_images <= MAX_COLUMNS_FOR_SINGLE_ROW_GRID {
        return (1, n_images);
    }
    let nearest_sqrt = (n_images as f64).sqrt().ceil() as usize;
    let columns = nearest_sqrt;
    let mut rows = nearest_sqrt;
    while columns * (rows - 1) >= n_images {
        rows -= 1;
    }
    (rows, columns)
}

/// Resolve the final grid shape from an optional (rows, columns) override.
/// A fully or partially absent override is completed from the image count;
/// explicit zero dimensions are rejected.
pub fn establish_grid_size(
    n_images: usize,
    grid_size: (Option<usize>, Option<usize>),
) -> Result<(usize, usize)> {
    if matches!(grid_size, (Some(0), _) | (_, Some(0))) {
        return Err(Error::InvalidArgument {
            arg: "grid_size",
            value: format!("{:?}", grid_size),
        });
    }
    let grid = match grid_size {
        (None, None) => negotiate_grid_size(n_images),
        (Some(rows), None) => (rows, n_images.div_ceil(rows)),
        (None, Some(columns)) => (n_images.div_ceil(columns), columns),
        (Some(rows), Some(columns)) => (rows, columns),
    };
    debug!("Grid for {} images: {:?}", n_images, grid);
    Ok(grid)
}

/// Fail when the grid cannot hold all images.
pub fn check_grid_capacity(n_images: usize, grid: (usize, usize)) -> Result<()> {
    let (rows, cols) = grid;
    if n_images > rows * cols {
        return Err(Error::GridCapacity {
            images: n_images,
            rows,
            cols,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;

    #[test]
    fn up_to_three_images_fit_a_single_row() {
        for n in 1..=3 {
            assert_eq!(negotiate_grid_size(n), (1, n));
        }
    }

    #[test]
    fn negotiation_uses_ceil_sqrt_columns_and_minimal_rows() {
        for n in 4..=50 {
            let (rows, cols) = negotiate_grid_size(n);
            let expected_cols = (n as f64).sqrt().ceil() as usize;
            assert_eq!(cols, expected_cols, "n={}", n);
            assert!(rows * cols >= n, "n={} grid {}x{}", n, rows, cols);
            assert!(cols * (rows - 1) < n, "n={} has an empty last row", n);
        }
    }

    #[test]
    fn five_images_negotiate_two_by_three() {
        assert_eq!(negotiate_grid_size(5), (2, 3));
    }

    #[test]
    fn fixed_rows_or_columns_complete_the_other_side() {
        assert_eq!(establish_grid_size(7, (Some(2), None)).unwrap(), (2, 4));
        assert_eq!(establish_grid_size(7, (None, Some(2))).unwrap(), (4, 2));
        assert_eq!(establish_grid_size(7, (Some(3), Some(3))).unwrap(), (3, 3));
    }

    #[test]
    fn zero_grid_dimensions_are_rejected() {
        assert!(establish_grid_size(4, (Some(0), None)).is_err());
        assert!(establish_grid_size(4, (None, Some(0))).is_err());
    }

    #[test]
    fn capacity_check_flags_small_grids() {
        assert!(check_grid_capacity(4, (2, 2)).is_ok());
        let err = check_grid_capacity(5, (2, 2)).unwrap_err();
        assert!(matches!(
            err,
            Error::GridCapacity { images: 5, rows: 2, cols: 2 }
        ));
    }

    #[test]
    fn aggregate_modes_operate_per_dimension() {
        let rasters = vec![
            Raster::solid(100, 40, Color::rgb(0, 0, 0)),
            Raster::solid(60, 80, Color::rgb(0, 0, 0)),
        ];
        assert_eq!(aggregate_tile_size(&rasters, TileScaling::Min), (60, 40));
        assert_eq!(aggregate_tile_size(&rasters, TileScaling::Max), (100, 80));
        assert_eq!(aggregate_tile_size(&rasters, TileScaling::Avg), (80, 60));
    }

    #[test]
    fn average_rounds_to_nearest_pixel() {
        let rasters = vec![
            Raster::solid(3, 3, Color::rgb(0, 0, 0)),
            Raster::solid(4, 4, Color::rgb(0, 0, 0)),
        ];
        // mean 3.5 rounds away from zero
        assert_eq!(aggregate_tile_size(&rasters, TileScaling::Avg), (4, 4));
    }
}
