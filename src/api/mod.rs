//! High-level, ergonomic library API: compose an image collection into a
//! single mosaic raster with automatic grid placement, letterboxing, and
//! optional tile titles. Prefer these entrypoints over the low-level
//! processing modules when integrating TILERY.
use tracing::{debug, info};

use crate::core::params::{TilesParams, TitleAnchors};
use crate::core::processing::compose::compose_tiles;
use crate::core::processing::grid::{
    aggregate_tile_size, check_grid_capacity, establish_grid_size,
};
use crate::core::processing::letterbox::letterbox_image;
use crate::core::processing::text::{TitleStyle, draw_title, optimal_text_scale};
use crate::error::{Error, Result};
use crate::raster::{ImageForm, Point, Raster};
use crate::types::{ImageFormat, TitlePlacement};
use crate::utils::fill;

/// Majority vote over the input element forms. Raster inputs at or above
/// half the collection win; draws resolve in favour of the raster form.
pub fn negotiate_tiles_format(images: &[ImageForm]) -> ImageFormat {
    let raster_count = images.iter().filter(|image| image.is_raster()).count();
    if raster_count >= images.len() / 2 {
        ImageFormat::Raster
    } else {
        ImageFormat::Dynamic
    }
}

/// Create a tiles mosaic from `images`, automating grid placement and
/// normalizing every image to a common tile resolution while preserving
/// aspect ratios. Optional titles are rendered onto their tiles before
/// composition.
///
/// Fails with [`Error::EmptyInput`] for an empty collection and
/// [`Error::GridCapacity`] when an explicit grid cannot hold all images.
pub fn create_tiles(images: Vec<ImageForm>, params: &TilesParams) -> Result<ImageForm> {
    if images.is_empty() {
        return Err(Error::EmptyInput);
    }
    let return_format = match params.return_format {
        ImageFormat::Auto => negotiate_tiles_format(&images),
        requested => requested,
    };
    debug!("Output format: {}", return_format);

    let rasters: Vec<Raster> = images.into_iter().map(ImageForm::into_raster).collect();

    let tile_size = match params.tile_size {
        Some((width, height)) => {
            if width == 0 || height == 0 {
                return Err(Error::InvalidDimensions { width, height });
            }
            (width, height)
        }
        None => aggregate_tile_size(&rasters, params.tile_scaling),
    };
    info!(
        "Tiling {} images at {}x{} per tile",
        rasters.len(),
        tile_size.0,
        tile_size.1
    );

    let letterboxed: Vec<Raster> = rasters
        .iter()
        .map(|raster| letterbox_image(raster, tile_size, params.tile_padding_color))
        .collect::<Result<_>>()?;

    let grid = establish_grid_size(letterboxed.len(), params.grid_size)?;
    check_grid_capacity(letterboxed.len(), grid)?;

    let titled = draw_titles(&letterboxed, params);

    let mosaic = compose_tiles(
        &titled,
        grid,
        tile_size,
        params.tile_margin,
        params.tile_margin_color,
        params.tile_padding_color,
    )?;

    Ok(match return_format {
        ImageFormat::Dynamic => ImageForm::Dynamic(mosaic.to_dynamic()),
        _ => ImageForm::Raster(mosaic),
    })
}

fn default_anchor(raster: &Raster, placement: TitlePlacement) -> Point {
    let width = raster.width() as f64;
    let height = raster.height() as f64;
    match placement {
        TitlePlacement::Top => Point::new(width / 2.0, height * 0.1),
        TitlePlacement::Bottom => Point::new(width / 2.0, height * 0.9),
    }
}

/// Render titles tile-by-tile. A titles list shorter than the image list
/// is right-padded with empty entries; anchors broadcast or default per
/// `default_title_placement`; a shared text scale is derived once from the
/// first tile when not given explicitly.
fn draw_titles(images: &[Raster], params: &TilesParams) -> Vec<Raster> {
    let Some(titles) = &params.titles else {
        return images.to_vec();
    };
    let titles = fill(titles.clone(), images.len(), None);

    let anchors: Vec<Option<Point>> = match &params.title_anchors {
        TitleAnchors::Auto => vec![None; images.len()],
        TitleAnchors::Shared(anchor) => vec![Some(*anchor); images.len()],
        TitleAnchors::PerTile(anchors) => fill(anchors.clone(), images.len(), None),
    };

    let scale = params
        .title_scale
        .unwrap_or_else(|| optimal_text_scale((images[0].width(), images[0].height())));
    let style = TitleStyle {
        color: params.title_color,
        scale,
        thickness: params.title_thickness,
        padding: params.title_padding,
        font: params.title_font,
        background_color: params.title_background_color,
    };

    images
        .iter()
        .zip(titles)
        .zip(anchors)
        .map(|((image, title), anchor)| match title {
            None => image.clone(),
            Some(text) => {
                let anchor = anchor
                    .unwrap_or_else(|| default_anchor(image, params.default_title_placement));
                draw_title(image, &text, anchor, &style)
            }
        })
        .collect()
}
