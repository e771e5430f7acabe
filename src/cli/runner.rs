use std::fs::File;

use tracing::info;

use tilery::api::create_tiles;
use tilery::core::params::TilesParams;
use tilery::io::loader::{load_image, load_images_from_dir};
use tilery::io::sink::write_raster;
use tilery::raster::Color;

use super::args::CliArgs;
use super::errors::AppError;

fn parse_grid(value: &str) -> Result<(Option<usize>, Option<usize>), AppError> {
    let invalid = || AppError::InvalidGrid {
        value: value.to_string(),
    };
    let lowered = value.to_ascii_lowercase();
    let (rows, cols) = lowered.split_once('x').ok_or_else(invalid)?;

    let parse_side = |side: &str| -> Result<Option<usize>, AppError> {
        if side.is_empty() {
            return Ok(None);
        }
        side.parse::<usize>().map(Some).map_err(|_| invalid())
    };
    let grid = (parse_side(rows.trim())?, parse_side(cols.trim())?);
    if grid == (None, None) {
        return Err(invalid());
    }
    Ok(grid)
}

fn parse_tile_size(value: &str) -> Result<(usize, usize), AppError> {
    let invalid = || AppError::InvalidTileSize {
        value: value.to_string(),
    };
    let lowered = value.to_ascii_lowercase();
    let (width, height) = lowered.split_once('x').ok_or_else(invalid)?;
    let width = width.trim().parse::<usize>().map_err(|_| invalid())?;
    let height = height.trim().parse::<usize>().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

fn parse_color(value: &str) -> Result<Color, AppError> {
    Color::from_hex(value).map_err(|_| AppError::InvalidColor {
        value: value.to_string(),
    })
}

fn build_params(args: &CliArgs) -> Result<TilesParams, Box<dyn std::error::Error>> {
    let mut params = match &args.params {
        Some(path) => serde_json::from_reader(File::open(path).map_err(AppError::Io)?)
            .map_err(AppError::Params)?,
        None => TilesParams::default(),
    };

    if let Some(grid) = &args.grid {
        params.grid_size = parse_grid(grid)?;
    }
    if let Some(tile_size) = &args.tile_size {
        params.tile_size = Some(parse_tile_size(tile_size)?);
    }
    if let Some(scaling) = args.scaling {
        params.tile_scaling = scaling;
    }
    if let Some(color) = &args.padding_color {
        params.tile_padding_color = parse_color(color)?;
    }
    if let Some(margin) = args.margin {
        params.tile_margin = margin;
    }
    if let Some(color) = &args.margin_color {
        params.tile_margin_color = parse_color(color)?;
    }
    if !args.title.is_empty() {
        // empty strings mark untitled tiles
        params.titles = Some(
            args.title
                .iter()
                .map(|t| if t.is_empty() { None } else { Some(t.clone()) })
                .collect(),
        );
    }
    if let Some(placement) = args.placement {
        params.default_title_placement = placement;
    }
    if let Some(scale) = args.title_scale {
        params.title_scale = Some(scale);
    }
    if let Some(thickness) = args.title_thickness {
        params.title_thickness = thickness;
    }
    if let Some(padding) = args.title_padding {
        params.title_padding = padding;
    }
    if let Some(font) = args.title_font {
        params.title_font = font;
    }
    if let Some(color) = &args.title_color {
        params.title_color = parse_color(color)?;
    }
    if let Some(color) = &args.title_background_color {
        params.title_background_color = parse_color(color)?;
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = build_params(&args)?;

    let images = if !args.input.is_empty() {
        let mut images = Vec::with_capacity(args.input.len());
        for path in &args.input {
            images.push(load_image(path)?);
        }
        images
    } else if let Some(dir) = &args.input_dir {
        let images = load_images_from_dir(dir)?;
        if images.is_empty() {
            return Err(AppError::EmptyInputDir {
                dir: dir.display().to_string(),
            }
            .into());
        }
        images
    } else {
        return Err(AppError::MissingInput.into());
    };
    info!("Loaded {} input images", images.len());

    let mosaic = create_tiles(images, &params)?.into_raster();
    write_raster(&args.output, &mosaic)?;
    info!(
        "Mosaic {}x{} written to {:?}",
        mosaic.width(),
        mosaic.height(),
        args.output
    );

    Ok(())
}
