use serde::{Deserialize, Serialize};

use crate::raster::{Color, Point};
use crate::types::{ImageFormat, TileScaling, TitleFont, TitlePlacement};

/// Title anchor specification: automatic per-tile placement, one shared
/// anchor broadcast to every tile, or an explicit per-tile list (shorter
/// lists are right-padded with automatic placement).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum TitleAnchors {
    #[default]
    Auto,
    Shared(Point),
    PerTile(Vec<Option<Point>>),
}

/// Tiling parameters suitable for config files and presets.
///
/// Every free parameter of mosaic creation lives here with documented
/// defaults; `Default` gives automatic grid placement, average tile
/// sizing, a 10 px margin, and the stock colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilesParams {
    /// Expected (rows, columns); either side may be left for negotiation
    pub grid_size: (Option<usize>, Option<usize>),
    /// Exact tile (width, height); None derives it via `tile_scaling`
    pub tile_size: Option<(usize, usize)>,
    pub tile_scaling: TileScaling,
    /// Letterbox padding and filler-tile color
    pub tile_padding_color: Color,
    /// Gap between adjacent tiles, in pixels
    pub tile_margin: usize,
    pub tile_margin_color: Color,
    /// Requested output representation; `Auto` votes over the inputs
    pub return_format: ImageFormat,
    /// Per-tile titles in input order; None entries skip a tile
    pub titles: Option<Vec<Option<String>>>,
    pub title_anchors: TitleAnchors,
    pub title_color: Color,
    /// Text scale; None computes one from the first tile's resolution
    pub title_scale: Option<f32>,
    pub title_thickness: usize,
    /// Background box padding around the title text, in pixels
    pub title_padding: usize,
    pub title_font: TitleFont,
    pub title_background_color: Color,
    pub default_title_placement: TitlePlacement,
}

impl Default for TilesParams {
    fn default() -> Self {
        Self {
            grid_size: (None, None),
            tile_size: None,
            tile_scaling: TileScaling::Avg,
            tile_padding_color: Color::DEFAULT_PADDING,
            tile_margin: 10,
            tile_margin_color: Color::DEFAULT_MARGIN,
            return_format: ImageFormat::Auto,
            titles: None,
            title_anchors: TitleAnchors::Auto,
            title_color: Color::DEFAULT_TITLE_TEXT,
            title_scale: None,
            title_thickness: 1,
            title_padding: 10,
            title_font: TitleFont::Basic,
            title_background_color: Color::DEFAULT_TITLE_BACKGROUND,
            default_title_placement: TitlePlacement::Top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_round_trip_through_json() {
        let mut params = TilesParams {
            grid_size: (Some(2), None),
            titles: Some(vec![Some("a".to_string()), None]),
            title_anchors: TitleAnchors::Shared(Point::new(10.0, 5.0)),
            ..TilesParams::default()
        };
        params.tile_margin = 0;

        let json = serde_json::to_string(&params).unwrap();
        let restored: TilesParams = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.grid_size, (Some(2), None));
        assert_eq!(restored.tile_margin, 0);
        assert_eq!(restored.titles, params.titles);
    }
}
