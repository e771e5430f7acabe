//! Mosaic assembly: reshape equally-sized tiles row-major, complete short
//! rows and grids with filler tiles, and join everything with margin strips.
use ndarray::{Axis, concatenate};
use tracing::debug;

use crate::error::{Error, Result};
use crate::raster::{Color, Raster};
use crate::utils::create_batches;

/// Merge `tiles` into one raster laid out as `grid` = (rows, columns).
///
/// Tiles are consumed in row-major order. A short last row is completed
/// with solid `filler_color` tiles of `tile_size`; missing whole rows are
/// appended as filler rows. Adjacent tiles and rows are separated by
/// `margin`-pixel strips of `margin_color`, with no leading or trailing
/// margins, so the output measures exactly
/// `(cols*tw + (cols-1)*margin, rows*th + (rows-1)*margin)`.
pub fn compose_tiles(
    tiles: &[Raster],
    grid: (usize, usize),
    tile_size: (usize, usize),
    margin: usize,
    margin_color: Color,
    filler_color: Color,
) -> Result<Raster> {
    if tiles.is_empty() {
        return Err(Error::EmptyInput);
    }
    let (rows, columns) = grid;
    let (tile_width, tile_height) = tile_size;

    let filler = Raster::solid(tile_width, tile_height, filler_color);
    let mut tile_rows = create_batches(tiles, columns);
    if let Some(last_row) = tile_rows.last_mut() {
        while last_row.len() < columns {
            last_row.push(filler.clone());
        }
    }
    while tile_rows.len() < rows {
        tile_rows.push(vec![filler.clone(); columns]);
    }

    let vertical_strip = Raster::solid(margin.max(1), tile_height, margin_color);
    let mut merged_rows = Vec::with_capacity(tile_rows.len());
    for tile_row in &tile_rows {
        let mut views = Vec::with_capacity(tile_row.len() * 2);
        for (i, tile) in tile_row.iter().enumerate() {
            if i > 0 && margin > 0 {
                views.push(vertical_strip.data().view());
            }
            views.push(tile.data().view());
        }
        let merged = concatenate(Axis(1), &views).map_err(Error::external)?;
        merged_rows.push(merged);
    }

    let row_width = merged_rows[0].shape()[1];
    let horizontal_strip = Raster::solid(row_width, margin.max(1), margin_color);
    let mut views = Vec::with_capacity(merged_rows.len() * 2);
    for (i, row) in merged_rows.iter().enumerate() {
        if i > 0 && margin > 0 {
            views.push(horizontal_strip.data().view());
        }
        views.push(row.view());
    }
    let mosaic = concatenate(Axis(0), &views).map_err(Error::external)?;

    debug!(
        "Composed {}x{} mosaic from {} tiles in {:?} grid",
        mosaic.shape()[1],
        mosaic.shape()[0],
        tiles.len(),
        grid
    );
    Ok(Raster::from_array(mosaic))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARGIN: Color = Color::rgb(191, 190, 189);
    const FILLER: Color = Color::rgb(217, 217, 217);

    fn tiles(n: usize, w: usize, h: usize) -> Vec<Raster> {
        (0..n)
            .map(|i| Raster::solid(w, h, Color::rgb(i as u8 + 1, 0, 0)))
            .collect()
    }

    #[test]
    fn output_dimensions_include_margins() {
        let mosaic =
            compose_tiles(&tiles(6, 20, 10), (2, 3), (20, 10), 5, MARGIN, FILLER).unwrap();
        assert_eq!(mosaic.width(), 3 * 20 + 2 * 5);
        assert_eq!(mosaic.height(), 2 * 10 + 1 * 5);
    }

    #[test]
    fn zero_margin_packs_tiles_exactly() {
        let mosaic =
            compose_tiles(&tiles(4, 8, 6), (2, 2), (8, 6), 0, MARGIN, FILLER).unwrap();
        assert_eq!((mosaic.width(), mosaic.height()), (16, 12));
        // each quadrant keeps its source tile's color
        assert_eq!(mosaic.data()[[0, 0, 0]], 1);
        assert_eq!(mosaic.data()[[0, 8, 0]], 2);
        assert_eq!(mosaic.data()[[6, 0, 0]], 3);
        assert_eq!(mosaic.data()[[6, 8, 0]], 4);
    }

    #[test]
    fn short_last_row_is_completed_with_filler() {
        let mosaic =
            compose_tiles(&tiles(5, 4, 4), (2, 3), (4, 4), 0, MARGIN, FILLER).unwrap();
        assert_eq!((mosaic.width(), mosaic.height()), (12, 8));
        // bottom-right cell is filler
        assert_eq!(mosaic.data()[[4, 8, 0]], FILLER.r);
        assert_eq!(mosaic.data()[[4, 8, 1]], FILLER.g);
    }

    #[test]
    fn missing_rows_are_appended_as_filler_rows() {
        let mosaic =
            compose_tiles(&tiles(2, 4, 4), (3, 2), (4, 4), 0, MARGIN, FILLER).unwrap();
        assert_eq!((mosaic.width(), mosaic.height()), (8, 12));
        for x in [0, 4] {
            assert_eq!(mosaic.data()[[5, x, 0]], FILLER.r);
            assert_eq!(mosaic.data()[[9, x, 0]], FILLER.r);
        }
    }

    #[test]
    fn margin_strips_carry_the_margin_color() {
        let mosaic =
            compose_tiles(&tiles(4, 4, 4), (2, 2), (4, 4), 2, MARGIN, FILLER).unwrap();
        // vertical strip between columns
        assert_eq!(mosaic.data()[[0, 4, 0]], MARGIN.r);
        assert_eq!(mosaic.data()[[0, 5, 2]], MARGIN.b);
        // horizontal strip between rows
        assert_eq!(mosaic.data()[[4, 0, 0]], MARGIN.r);
        assert_eq!(mosaic.data()[[5, 0, 1]], MARGIN.g);
    }

    #[test]
    fn empty_tile_list_is_rejected() {
        assert!(matches!(
            compose_tiles(&[], (1, 1), (4, 4), 0, MARGIN, FILLER),
            Err(Error::EmptyInput)
        ));
    }
}
